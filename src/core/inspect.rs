//! Read-only summary of a file: advisory verdict, registries and the
//! literals extraction would pick up.

use std::path::Path;

use serde::Serialize;

use super::advisory::{Advice, advise, language_id_for_path};
use super::comments::extract_comments;
use super::extract::suggest_name;
use super::locate::{TargetKind, find_all};
use super::parsers::parse_jsx_source;
use super::partition::parse_style_properties;
use super::registry::{collect_existing_style_names, find_existing_style_sheets};
use super::source::LineIndex;
use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySummary {
    pub name: String,
    /// 1-based line of the declaration.
    pub line: usize,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSummary {
    /// 1-based position of the replaced range.
    pub line: usize,
    pub column: usize,
    pub kind: TargetKind,
    pub static_count: usize,
    pub dynamic_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub language_id: Option<String>,
    pub advice: Advice,
    pub registries: Vec<RegistrySummary>,
    pub targets: Vec<TargetSummary>,
    pub suggested_name: String,
    /// Set when the file failed to parse; `targets` is then empty.
    pub parse_error: Option<String>,
}

/// Summarize `text`. `line` is 1-based.
pub fn inspect(text: &str, file_path: &str, line: Option<usize>, config: &Config) -> Inspection {
    let index = LineIndex::new(text);
    let language_id = language_id_for_path(Path::new(file_path));
    let line_text = line.map(|line| index.line_text(line.saturating_sub(1)));
    let advice = advise(language_id.unwrap_or_default(), text, line_text);

    let registries = find_existing_style_sheets(text)
        .into_iter()
        .map(|registry| RegistrySummary {
            line: index.line_of(registry.range.start) + 1,
            entries: collect_existing_style_names(std::slice::from_ref(&registry)),
            name: registry.name,
        })
        .collect();

    let (targets, parse_error) = match parse_jsx_source(text, file_path) {
        Ok(parsed) => {
            let targets = find_all(&parsed, text)
                .into_iter()
                .map(|target| {
                    let (line, column) = index.position_at(target.range.start);
                    let cleaned = extract_comments(&target.body).cleaned;
                    let partition = parse_style_properties(cleaned.trim());
                    TargetSummary {
                        line: line + 1,
                        column: column + 1,
                        kind: target.kind,
                        static_count: partition.static_props().len(),
                        dynamic_count: partition.dynamic_props().len(),
                    }
                })
                .collect();
            (targets, None)
        }
        Err(err) => (Vec::new(), Some(err.to_string())),
    };

    Inspection {
        language_id: language_id.map(String::from),
        advice,
        registries,
        targets,
        suggested_name: suggest_name(text, config),
        parse_error,
    }
}
