//! Common utility functions shared across the codebase.

use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Checks if the text can be used as a style entry or registry name.
///
/// Names start with a letter or underscore and continue with letters,
/// digits or underscores.
///
/// # Examples
///
/// ```
/// use sheetlift::utils::is_valid_identifier;
///
/// assert!(is_valid_identifier("myStyle1"));
/// assert!(is_valid_identifier("_private"));
/// assert!(!is_valid_identifier("1style"));
/// assert!(!is_valid_identifier("my-style"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(text: &str) -> bool {
    IDENTIFIER_REGEX.is_match(text)
}

/// Singular or plural noun for a count, e.g. `1 style`, `2 styles`.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
