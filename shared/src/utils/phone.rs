//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").expect("E.164 pattern is a valid regex")
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is valid (international E.164 format)
///
/// The check is strict: formatting characters are not stripped first, so
/// `"+1 555 123 4567"` is rejected. Used for configured sender numbers,
/// which are sent to the provider as-is.
pub fn is_valid_international_phone(phone: &str) -> bool {
    INTERNATIONAL_PHONE_REGEX.is_match(phone)
}

/// Mask a phone number for logs (e.g., +15****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
