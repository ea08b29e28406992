//! Common validation utilities shared by request DTOs and services

use once_cell::sync::Lazy;
use regex::Regex;

/// Five digit postal code
pub static ZIP_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}$").expect("valid regex"));

/// Ten digit phone number with an optional `+52` prefix, spaces and dashes allowed
pub static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+?52)?[\s-]?(\d[\s-]?){9}\d$").expect("valid regex")
});

/// Check if a string is not blank
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a URL uses http or https
pub fn is_valid_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Mask a token or identifier for logging, keeping only the last four characters
pub fn mask_secret(value: &str) -> String {
    let visible: String = value
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("***{}", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_code() {
        assert!(ZIP_CODE_REGEX.is_match("64000"));
        assert!(!ZIP_CODE_REGEX.is_match("6400"));
        assert!(!ZIP_CODE_REGEX.is_match("64000-123"));
    }

    #[test]
    fn test_phone() {
        assert!(PHONE_REGEX.is_match("8112345678"));
        assert!(PHONE_REGEX.is_match("+528112345678"));
        assert!(PHONE_REGEX.is_match("81-1234-5678"));
        assert!(!PHONE_REGEX.is_match("12345"));
    }

    #[test]
    fn test_helpers() {
        assert!(not_blank(" a "));
        assert!(!not_blank("   "));
        assert!(is_valid_url("https://greencircle.mx/logo.png"));
        assert!(!is_valid_url("ftp://files"));
        assert_eq!(mask_secret("abcdefgh"), "***efgh");
        assert_eq!(mask_secret("ab"), "***ab");
    }
}
