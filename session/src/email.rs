//! Institutional email rule applied before any directory lookup.

use std::sync::LazyLock;

use regex::Regex;

/// Staff addresses end in `@usm.my`, student addresses in `@student.usm.my`.
static USM_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+-]+@(student\.)?usm\.my$").expect("USM_EMAIL is a valid pattern")
});

/// Returns `true` when `email` (after trimming) is a USM address.
#[must_use]
pub fn is_institutional_email(email: &str) -> bool {
    USM_EMAIL.is_match(email.trim())
}

/// Trim and validate `email`, returning the trimmed form when it passes.
#[must_use]
pub fn normalize_institutional_email(email: &str) -> Option<&str> {
    let trimmed = email.trim();
    USM_EMAIL.is_match(trimmed).then_some(trimmed)
}

#[cfg(test)]
#[path = "email_test.rs"]
mod tests;
