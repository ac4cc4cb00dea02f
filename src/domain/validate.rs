//! Input validation for user-supplied text

use regex::Regex;
use std::sync::OnceLock;

/// Regex for a plausible email address: something@domain.tld, no whitespace
fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Regex for an http(s) URL: scheme prefix followed by at least one
/// non-whitespace character
fn url_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^https?://\S+").unwrap())
}

/// Check that `input` looks like an email address
pub fn is_valid_email(input: &str) -> bool {
    email_regex().is_match(input)
}

/// Check that `input` looks like an http(s) URL
pub fn is_valid_url(input: &str) -> bool {
    url_regex().is_match(input)
}
