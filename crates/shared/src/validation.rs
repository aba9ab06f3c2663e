//! Common validation utilities.

use validator::ValidationError;

/// Maximum accepted phone number length.
const MAX_PHONE_LEN: usize = 20;

/// Validates a customer phone number: digits with an optional leading `+`,
/// at least 6 digits and at most 20 characters.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let ok = !digits.is_empty()
        && digits.len() >= 6
        && phone.len() <= MAX_PHONE_LEN
        && digits.chars().all(|c| c.is_ascii_digit());
    if ok {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_format");
        err.message = Some("Phone must be 6-20 digits, optionally prefixed with +".into());
        Err(err)
    }
}

/// Validates that a monetary amount is non-negative and finite.
pub fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("amount_range");
        err.message = Some("Amount must be a non-negative number".into());
        Err(err)
    }
}

/// Validates that a water container size is positive.
pub fn validate_size(size: f64) -> Result<(), ValidationError> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("size_range");
        err.message = Some("Size must be a positive number of liters".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone() {
        assert!(validate_phone("1234567890").is_ok());
        assert!(validate_phone("+221771234567").is_ok());
    }

    #[test]
    fn test_phone_too_short() {
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_phone_rejects_letters() {
        assert!(validate_phone("12345abcde").is_err());
    }

    #[test]
    fn test_phone_rejects_interior_plus() {
        assert!(validate_phone("123+456789").is_err());
    }

    #[test]
    fn test_amount_range() {
        assert!(validate_amount(0.0).is_ok());
        assert!(validate_amount(1500.0).is_ok());
        assert!(validate_amount(-1.0).is_err());
        assert!(validate_amount(f64::NAN).is_err());
    }

    #[test]
    fn test_size_range() {
        assert!(validate_size(0.5).is_ok());
        assert!(validate_size(1.5).is_ok());
        assert!(validate_size(0.0).is_err());
        assert!(validate_size(-0.5).is_err());
    }
}
