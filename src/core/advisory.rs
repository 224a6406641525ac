//! Cheap textual pre-filter a host can use to decide whether to offer
//! extraction at all. The locator stays authoritative.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Editor language ids the extraction supports.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "javascript",
    "javascriptreact",
    "typescript",
    "typescriptreact",
];

static DIALECT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"from\s+['"]react-native['"]"#,
        r"import.*react-native",
        r"\b(View|Text|ScrollView|TouchableOpacity|Image|StyleSheet)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static INLINE_STYLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"style\s*=\s*(\{\{|\[)").unwrap());

pub fn is_supported_language(language_id: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language_id)
}

/// Language id for a file path, from its extension.
pub fn language_id_for_path(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "js" | "mjs" | "cjs" => Some("javascript"),
        "jsx" => Some("javascriptreact"),
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" => Some("typescriptreact"),
        _ => None,
    }
}

/// Whether the text imports the UI module or mentions one of its components.
pub fn looks_like_dialect(text: &str) -> bool {
    DIALECT_PATTERNS.iter().any(|pattern| pattern.is_match(text))
}

pub fn line_has_inline_style(line: &str) -> bool {
    INLINE_STYLE_REGEX.is_match(line)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub language_supported: bool,
    pub looks_like_dialect: bool,
    /// Present only when a line was asked about.
    pub line_has_inline_style: Option<bool>,
}

impl Advice {
    /// Whether a host should offer the extraction.
    pub fn should_offer(&self) -> bool {
        self.language_supported && self.looks_like_dialect && self.line_has_inline_style != Some(false)
    }
}

pub fn advise(language_id: &str, text: &str, line: Option<&str>) -> Advice {
    Advice {
        language_supported: is_supported_language(language_id),
        looks_like_dialect: looks_like_dialect(text),
        line_has_inline_style: line.map(line_has_inline_style),
    }
}
