//! WiFi voucher password generation.

use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};

/// Length of generated WiFi voucher passwords.
pub const WIFI_PASSWORD_LEN: usize = 10;

/// Generates a random alphanumeric WiFi password from the OS random source.
///
/// Vouchers are handed to customers verbatim, so the charset is restricted to
/// characters that survive being read aloud and typed on a phone keyboard.
pub fn generate_wifi_password() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(WIFI_PASSWORD_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_length() {
        assert_eq!(generate_wifi_password().len(), WIFI_PASSWORD_LEN);
    }

    #[test]
    fn test_password_is_alphanumeric() {
        let password = generate_wifi_password();
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_passwords_differ() {
        // Collisions over a 62^10 space are not a realistic flake source.
        let a = generate_wifi_password();
        let b = generate_wifi_password();
        assert_ne!(a, b);
    }
}
