//! Joining and splitting the stored `mobile` string.

use once_cell::sync::Lazy;
use regex::Regex;
use shared::domain::{DEFAULT_COUNTRY_CODE, MOBILE_DIGITS};

static LEGACY_CODE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+\d{1,2}").expect("country code pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileParts {
    pub country_code: String,
    pub digits: String,
}

pub fn compose_mobile(country_code: &str, digits: &str) -> String {
    format!("{country_code}{digits}")
}

/// Recovers the country code and subscriber digits from a stored mobile.
///
/// A `+` followed by one to three digits directly before the last ten digits is
/// taken as the code. Anything else falls back to the one-or-two digit prefix
/// rule and finally to [`DEFAULT_COUNTRY_CODE`].
pub fn split_mobile(mobile: &str) -> MobileParts {
    let digits = last_digits(mobile);
    let country_code = exact_prefix(mobile)
        .or_else(|| {
            LEGACY_CODE_PREFIX
                .find(mobile)
                .map(|m| m.as_str().to_string())
        })
        .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string());
    MobileParts {
        country_code,
        digits,
    }
}

fn exact_prefix(mobile: &str) -> Option<String> {
    if !mobile.is_ascii() || mobile.len() <= MOBILE_DIGITS {
        return None;
    }
    let (prefix, tail) = mobile.split_at(mobile.len() - MOBILE_DIGITS);
    let code_digits = prefix.strip_prefix('+')?;
    let well_formed = (1..=3).contains(&code_digits.len())
        && code_digits.chars().all(|c| c.is_ascii_digit())
        && tail.chars().all(|c| c.is_ascii_digit());
    well_formed.then(|| prefix.to_string())
}

fn last_digits(mobile: &str) -> String {
    let all: Vec<char> = mobile.chars().filter(char::is_ascii_digit).collect();
    let start = all.len().saturating_sub(MOBILE_DIGITS);
    all[start..].iter().collect()
}

#[cfg(test)]
#[path = "tests/phone_tests.rs"]
mod tests;
