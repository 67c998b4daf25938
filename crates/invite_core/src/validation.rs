//! Keystroke filters and validity predicates shared by the add and edit forms.

use once_cell::sync::Lazy;
use regex::Regex;
use shared::domain::{MAX_EMAIL_CHARS, MAX_EXTRAS, MAX_NAME_CHARS, MOBILE_DIGITS};

static EMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("email pattern compiles")
});

pub fn filter_name(input: &str) -> String {
    input.chars().take(MAX_NAME_CHARS).collect()
}

/// Keeps digits only, then the first ten of them.
pub fn filter_mobile(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MOBILE_DIGITS)
        .collect()
}

pub fn filter_email(input: &str) -> String {
    input.chars().take(MAX_EMAIL_CHARS).collect()
}

/// Returns the new extras text, or `current` unchanged when the edit would
/// exceed the maximum. Typing "2" then "0" therefore stays at "2".
pub fn filter_extras(current: &str, input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    match digits.parse::<u32>() {
        Ok(value) if value <= u32::from(MAX_EXTRAS) => digits,
        _ => current.to_string(),
    }
}

/// Parses staged extras text for storage; blank or unparseable text becomes 0.
pub fn parse_extras(text: &str) -> u8 {
    text.trim()
        .parse::<u8>()
        .ok()
        .filter(|value| *value <= MAX_EXTRAS)
        .unwrap_or(0)
}

pub fn is_name_valid(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn is_mobile_valid(mobile: &str) -> bool {
    mobile.len() == MOBILE_DIGITS && mobile.chars().all(|c| c.is_ascii_digit())
}

pub fn is_email_address(email: &str) -> bool {
    EMAIL_ADDRESS.is_match(email)
}

/// Email is optional: blank passes, anything else must be an address.
pub fn is_email_valid(email: &str) -> bool {
    email.trim().is_empty() || is_email_address(email)
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
