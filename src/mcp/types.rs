use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::core::{Extraction, TextEdit};
use crate::notices::{Notice, Report};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Directory to start the config file search from
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractStyleParams {
    /// Path of the JSX/TSX source file
    pub file_path: String,
    /// Cursor line (1-based)
    pub line: u32,
    /// Cursor column (1-based, in characters)
    pub column: u32,
    /// Name of the new registry entry (default: next free `<prefix><n>`)
    #[serde(default)]
    pub name: Option<String>,
    /// Write the result back to the file (default: false, returns the new text)
    #[serde(default)]
    pub apply: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractAllStylesParams {
    /// Path of the JSX/TSX source file
    pub file_path: String,
    /// Write the result back to the file (default: false, returns the new text)
    #[serde(default)]
    pub apply: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InspectFileParams {
    /// Path of the JSX/TSX source file
    pub file_path: String,
    /// Line (1-based) to check for an inline style
    #[serde(default)]
    pub line: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: Config,
}

// ============================================================
// Extraction Types (extract_style, extract_all_styles)
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ExtractionStatus {
    Extracted,
    Notice,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditDto {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

impl From<TextEdit> for EditDto {
    fn from(edit: TextEdit) -> Self {
        Self {
            start: edit.start,
            end: edit.end,
            replacement: edit.replacement,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoticeDto {
    pub rule: String,
    pub severity: String,
    pub message: String,
    /// True when calling again with a different name may succeed
    pub retryable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<Notice> for NoticeDto {
    fn from(notice: Notice) -> Self {
        Self {
            rule: notice.report_rule().to_string(),
            severity: notice.report_severity().to_string(),
            message: notice.message(),
            retryable: notice.is_retryable(),
            details: notice.details(),
        }
    }
}

/// Result of an extraction tool call.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub status: ExtractionStatus,
    pub file_path: String,
    /// True if the file was rewritten
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_registry: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub style_names: Vec<String>,
    /// Byte-offset edits against the original text
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edits: Vec<EditDto>,
    /// Rewritten text, only for dry runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<NoticeDto>,
}

impl ExtractionResult {
    pub fn extracted(file_path: &str, extraction: Extraction, applied: bool) -> Self {
        Self {
            status: ExtractionStatus::Extracted,
            file_path: file_path.to_string(),
            applied,
            registry_name: Some(extraction.registry_name),
            created_registry: Some(extraction.created_registry),
            style_names: extraction.style_names,
            edits: extraction.edits.into_iter().map(EditDto::from).collect(),
            text: (!applied).then_some(extraction.text),
            notice: None,
        }
    }

    pub fn notice(file_path: &str, notice: Notice) -> Self {
        Self {
            status: ExtractionStatus::Notice,
            file_path: file_path.to_string(),
            applied: false,
            registry_name: None,
            created_registry: None,
            style_names: Vec::new(),
            edits: Vec::new(),
            text: None,
            notice: Some(notice.into()),
        }
    }
}
