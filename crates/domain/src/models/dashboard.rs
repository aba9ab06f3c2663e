//! Dashboard statistics domain models.

use serde::{Deserialize, Serialize};

/// Activity counts over the trailing 30-day window, inclusive of both
/// endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DashboardStats {
    pub rentals: i64,
    pub water_sales: i64,
    pub internet_accesses: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_serialization() {
        let stats = DashboardStats {
            rentals: 3,
            water_sales: 7,
            internet_accesses: 2,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"rentals\":3"));
        assert!(json.contains("\"water_sales\":7"));
        assert!(json.contains("\"internet_accesses\":2"));
    }
}
