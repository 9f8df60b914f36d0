use std::sync::LazyLock;

use regex::Regex;

use super::{matches, value_text, Pattern};
use crate::scoring::{ValidationResult, Validator};

static URL_PATTERN: Pattern = LazyLock::new(|| Regex::new(r"^https?://.+\..+").ok());
static GTM_PATTERN: Pattern = LazyLock::new(|| Regex::new(r"^GTM-[A-Z0-9]+$").ok());
static TWITTER_HANDLE_PATTERN: Pattern =
    LazyLock::new(|| Regex::new(r"^@?[A-Za-z0-9_]{1,15}$").ok());
static EMAIL_PATTERN: Pattern = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

const URL_VALID_SCORE: u32 = 10;
const HTTPS_BONUS: u32 = 5;

pub fn is_valid_url(text: &str) -> bool {
    matches(&URL_PATTERN, text)
}

pub fn is_https(text: &str) -> bool {
    text.get(..8)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("https://"))
}

/// Format validity and HTTPS preference folded into one score.
pub fn website_url() -> Validator {
    Validator::new(|value, _, _| match value_text(value) {
        None => ValidationResult::error(0, "Website URL is required"),
        Some(url) if !is_valid_url(url) => {
            ValidationResult::error(0, format!("Website URL '{url}' is not a valid http(s) URL"))
        }
        Some(url) if is_https(url) => ValidationResult::good(
            URL_VALID_SCORE + HTTPS_BONUS,
            "Website URL is valid and served over HTTPS",
        ),
        Some(_) => ValidationResult::warning(
            URL_VALID_SCORE,
            "Website URL is valid but should use HTTPS",
        ),
    })
}

pub fn canonical_url() -> Validator {
    Validator::new(|value, _, _| match value_text(value) {
        None => ValidationResult::warning(
            0,
            "Canonical URL not set; duplicate pages may compete in search",
        ),
        Some(url) if !is_valid_url(url) => {
            ValidationResult::error(0, format!("Canonical URL '{url}' is not a valid http(s) URL"))
        }
        Some(url) if is_https(url) => ValidationResult::good(10, "Canonical URL is set"),
        Some(_) => ValidationResult::warning(5, "Canonical URL should use HTTPS"),
    })
}

pub fn gtm_container() -> Validator {
    Validator::new(|value, _, _| match value_text(value) {
        None => ValidationResult::info("No Google Tag Manager container configured"),
        Some(id) if matches(&GTM_PATTERN, id) => {
            ValidationResult::good(5, "Google Tag Manager container id is valid")
        }
        Some(id) => ValidationResult::error(
            0,
            format!("'{id}' is not a valid container id (expected GTM-XXXXXX)"),
        ),
    })
}

pub fn twitter_handle() -> Validator {
    Validator::new(|value, _, _| match value_text(value) {
        None => ValidationResult::warning(
            0,
            "Twitter handle not set; cards cannot attribute the site",
        ),
        Some(handle) if matches(&TWITTER_HANDLE_PATTERN, handle) => {
            ValidationResult::good(5, "Twitter handle is valid")
        }
        Some(handle) => ValidationResult::warning(
            2,
            format!("Twitter handle '{handle}' should be 1-15 letters, digits or underscores"),
        ),
    })
}

pub fn email_address() -> Validator {
    Validator::new(|value, _, _| match value_text(value) {
        None => ValidationResult::warning(0, "Contact email not set"),
        Some(email) if matches(&EMAIL_PATTERN, email) => {
            ValidationResult::good(5, "Contact email is valid")
        }
        Some(email) => {
            ValidationResult::warning(2, format!("Contact email '{email}' looks malformed"))
        }
    })
}
