//! Inventory of the `StyleSheet.create` registries already in a file.
//!
//! This is a text scan, not a parse: a regex finds each registry header and a
//! small tokenizer walks to the matching closing brace, skipping strings and
//! comments. Entry names come from a cheap `identifier:` key scan, which also
//! picks up keys of nested objects. That over-approximation only makes the
//! collision set larger.

use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Identifier of the registry factory; also what auto-import adds.
pub const REGISTRY_FACTORY: &str = "StyleSheet";

static REGISTRY_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"const\s+([A-Za-z_$][\w$]*)\s*=\s*StyleSheet\s*\.\s*create\s*\(\s*\{").unwrap()
});

static ENTRY_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+)\s*:").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRegistry {
    pub name: String,
    /// Raw text between the outer braces of the entry list.
    pub body: String,
    /// From `const` through the closing parenthesis.
    pub range: Range<usize>,
    /// Offset of the closing `}` of the entry list.
    pub close_brace: usize,
}

/// Offset of the `}` matching the `{` at `open`, if any.
fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            quote @ (b'\'' | b'"' | b'`') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = text[i + 2..].find("*/").map(|end| i + 2 + end + 1)?;
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Every `const <name> = StyleSheet.create({ ... })` in the text.
pub fn find_existing_style_sheets(text: &str) -> Vec<StyleRegistry> {
    REGISTRY_HEADER_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str().to_string();
            let open = whole.end() - 1;
            let close = matching_brace(text, open)?;
            let after = &text[close + 1..];
            let paren = after.len() - after.trim_start().len();
            let end = if after[paren..].starts_with(')') {
                close + 1 + paren + 1
            } else {
                close + 1
            };
            Some(StyleRegistry {
                name,
                body: text[open + 1..close].to_string(),
                range: whole.start()..end,
                close_brace: close,
            })
        })
        .collect()
}

/// The registry new entries go into.
///
/// A lone registry is always the destination. With several, only the one
/// named `preferred` qualifies; `None` means a new registry must be created.
pub fn get_target_style_sheet<'a>(
    registries: &'a [StyleRegistry],
    preferred: &str,
) -> Option<&'a StyleRegistry> {
    match registries {
        [] => None,
        [only] => Some(only),
        many => many.iter().find(|registry| registry.name == preferred),
    }
}

/// Entry names across all registries, in order of first appearance.
pub fn collect_existing_style_names(registries: &[StyleRegistry]) -> Vec<String> {
    let mut seen = HashSet::new();
    registries
        .iter()
        .flat_map(|registry| {
            ENTRY_KEY_REGEX
                .captures_iter(&registry.body)
                .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
                .collect::<Vec<_>>()
        })
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// `<prefix><n>` for the smallest `n >= 1` found in neither name set.
pub fn generate_unique_style_name(prefix: &str, existing: &[String], additional: &[String]) -> String {
    let taken: HashSet<&str> = existing
        .iter()
        .chain(additional.iter())
        .map(String::as_str)
        .collect();
    (1..)
        .map(|n| format!("{}{}", prefix, n))
        .find(|candidate| !taken.contains(candidate.as_str()))
        .unwrap_or_else(|| prefix.to_string())
}

/// First registry name bound more than once in the file.
pub fn find_duplicate_registry_name(registries: &[StyleRegistry]) -> Option<&str> {
    let mut seen = HashSet::new();
    registries
        .iter()
        .map(|registry| registry.name.as_str())
        .find(|name| !seen.insert(*name))
}
