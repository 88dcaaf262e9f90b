//! Email discovery inside free text.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static EMAIL_IN_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email pattern")
});

static EMAIL_EXACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

/// Every distinct address-shaped substring of `text`.
pub fn extract_emails(text: &str) -> HashSet<String> {
    EMAIL_IN_TEXT
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Whether the whole of `value` is address-shaped.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_EXACT.is_match(value)
}
