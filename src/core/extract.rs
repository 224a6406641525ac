//! Single and bulk extraction.
//!
//! Both operations compute their whole edit list in memory and only then
//! apply it, so a notice always leaves the text byte-identical.

use std::collections::HashSet;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use super::comments::{
    CommentRecord, InlineLine, extract_comments, property_name, restore_to_inline,
};
use super::locate::{Located, StyleTarget, find_all, find_at_cursor};
use super::parsers::parse_jsx_source;
use super::partition::{format_props_for_static, parse_style_properties};
use super::registry::{
    collect_existing_style_names, find_duplicate_registry_name, find_existing_style_sheets,
    generate_unique_style_name, get_target_style_sheet,
};
use super::rewrite::{
    create_registry, create_style_object_with_comments, create_style_replacement, import_patch,
    insert_into_registry,
};
use super::source::{TextEdit, apply_edits};
use crate::config::Config;
use crate::notices::{
    AliasDetectedNotice, AllDynamicNotice, DuplicateRegistryNameNotice, EmptyBodyNotice,
    FileParseFailedNotice, NameCollisionNotice, NameInvalidNotice, NoTargetsNotice,
    NotFoundNotice, Notice, ParseFailedNotice, Report,
};
use crate::utils::is_valid_identifier;

/// A successful extraction: the edits and the text they produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    pub edits: Vec<TextEdit>,
    pub text: String,
    /// Entry names added, in document order of their call sites.
    pub style_names: Vec<String>,
    pub registry_name: String,
    pub created_registry: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Extracted(Extraction),
    Skipped(Notice),
}

impl From<Notice> for Outcome {
    fn from(notice: Notice) -> Self {
        Outcome::Skipped(notice)
    }
}

/// A target whose body split into a non-empty static part.
struct PreparedTarget {
    target: StyleTarget,
    static_props: Vec<String>,
    dynamic: Vec<InlineLine>,
    comments: Vec<CommentRecord>,
}

fn prepare(target: StyleTarget, config: &Config) -> std::result::Result<PreparedTarget, Notice> {
    let extracted = extract_comments(&target.body);
    let cleaned = extracted.cleaned.trim();
    if cleaned.is_empty() || cleaned == "{}" {
        return Err(EmptyBodyNotice.into());
    }

    let partition = parse_style_properties(cleaned);
    if partition.is_empty() {
        return Err(ParseFailedNotice.into());
    }
    debug!(
        properties = partition.properties.len(),
        comments = extracted.comments.len(),
        "partitioned style body"
    );

    let static_props =
        format_props_for_static(&partition.static_props(), config.sort_static_properties);
    if static_props.is_empty() {
        return Err(AllDynamicNotice.into());
    }

    // Comments tied to keys nested inside a value become orphans.
    let first_level: HashSet<&str> = partition
        .properties
        .iter()
        .filter_map(|prop| property_name(&prop.text))
        .collect();
    let comments: Vec<CommentRecord> = if config.preserve_comments {
        extracted
            .comments
            .into_iter()
            .map(|comment| {
                let nested = comment
                    .property
                    .as_deref()
                    .is_some_and(|name| !first_level.contains(name));
                if nested { comment.orphan() } else { comment }
            })
            .collect()
    } else {
        Vec::new()
    };
    let dynamic = restore_to_inline(&partition.dynamic_props(), &comments);
    Ok(PreparedTarget {
        target,
        static_props,
        dynamic,
        comments,
    })
}

/// Build the edits for the prepared targets, each paired with its entry name.
fn synthesize(
    text: &str,
    prepared: &[(PreparedTarget, String)],
    config: &Config,
) -> Result<Extraction> {
    let registries = find_existing_style_sheets(text);
    let destination = get_target_style_sheet(&registries, &config.preferred_registry_name);
    let registry_name = destination
        .map(|registry| registry.name.clone())
        .unwrap_or_else(|| config.preferred_registry_name.clone());

    let entries: Vec<String> = prepared
        .iter()
        .map(|(item, name)| {
            create_style_object_with_comments(
                name,
                &item.static_props,
                &item.comments,
                config.preserve_comments,
            )
        })
        .collect();

    let mut edits = Vec::new();
    if config.auto_import
        && let Some(edit) = import_patch(text)
    {
        edits.push(edit);
    }
    match destination {
        Some(registry) => {
            debug!(registry = %registry.name, "adding entries to existing registry");
            edits.push(insert_into_registry(registry, &entries));
        }
        None => {
            debug!(registry = %registry_name, "creating registry");
            edits.push(create_registry(
                text,
                &registry_name,
                &entries,
                config.insertion_policy,
            ));
        }
    }
    for (item, name) in prepared {
        let replacement = create_style_replacement(
            &registry_name,
            name,
            &item.dynamic,
            &item.target.indent,
            item.target.kind,
        );
        edits.push(TextEdit::replace(
            item.target.range.start,
            item.target.range.end,
            replacement,
        ));
    }

    let rewritten = apply_edits(text, &edits)?;
    Ok(Extraction {
        edits,
        text: rewritten,
        style_names: prepared.iter().map(|(_, name)| name.clone()).collect(),
        registry_name,
        created_registry: destination.is_none(),
    })
}

/// First `<prefix><n>` not used by any registry in the text.
pub fn suggest_name(text: &str, config: &Config) -> String {
    let existing = collect_existing_style_names(&find_existing_style_sheets(text));
    generate_unique_style_name(&config.default_name_prefix, &existing, &[])
}

/// Extract the style literal at byte `offset` into a registry entry.
///
/// Without a `name` the suggested one is used. An invalid or taken name is a
/// retryable notice; the host may ask again and call this with a new name.
pub fn extract_one(
    text: &str,
    file_path: &str,
    offset: usize,
    name: Option<&str>,
    config: &Config,
) -> Result<Outcome> {
    let parsed = match parse_jsx_source(text, file_path) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(error = %err, file_path, "file did not parse");
            return Ok(Notice::from(FileParseFailedNotice {
                error: err.to_string(),
            })
            .into());
        }
    };

    let target = match find_at_cursor(&parsed, text, offset) {
        Located::Target(target) => target,
        Located::AliasDetected => return Ok(Notice::from(AliasDetectedNotice).into()),
        Located::NotFound => return Ok(Notice::from(NotFoundNotice).into()),
    };
    debug!(start = target.range.start, end = target.range.end, "located style literal");
    if target.is_empty() {
        return Ok(Notice::from(EmptyBodyNotice).into());
    }

    let name = match name {
        Some(name) => name.to_string(),
        None => suggest_name(text, config),
    };
    if !is_valid_identifier(&name) {
        return Ok(Notice::from(NameInvalidNotice { name }).into());
    }
    let existing = collect_existing_style_names(&find_existing_style_sheets(text));
    if existing.contains(&name) {
        return Ok(Notice::from(NameCollisionNotice { name }).into());
    }

    let prepared = match prepare(target, config) {
        Ok(prepared) => prepared,
        Err(notice) => return Ok(notice.into()),
    };
    Ok(Outcome::Extracted(synthesize(text, &[(prepared, name)], config)?))
}

/// Extract every inline style literal in the file.
///
/// Targets that cannot be extracted on their own (all dynamic, unparseable)
/// are skipped; the rest are extracted in one batch.
pub fn extract_all(text: &str, file_path: &str, config: &Config) -> Result<Outcome> {
    let registries = find_existing_style_sheets(text);
    if let Some(name) = find_duplicate_registry_name(&registries) {
        return Ok(Notice::from(DuplicateRegistryNameNotice {
            name: name.to_string(),
        })
        .into());
    }

    let parsed = match parse_jsx_source(text, file_path) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(error = %err, file_path, "file did not parse");
            return Ok(Notice::from(FileParseFailedNotice {
                error: err.to_string(),
            })
            .into());
        }
    };

    let targets = find_all(&parsed, text);
    if targets.is_empty() {
        return Ok(Notice::from(NoTargetsNotice).into());
    }

    let existing = collect_existing_style_names(&registries);
    let mut chosen: Vec<String> = Vec::new();
    let mut prepared = Vec::new();
    for target in targets {
        let start = target.range.start;
        match prepare(target, config) {
            Ok(item) => {
                let name =
                    generate_unique_style_name(&config.default_name_prefix, &existing, &chosen);
                chosen.push(name.clone());
                prepared.push((item, name));
            }
            Err(notice) => debug!(start, rule = %notice.report_rule(), "skipping style literal"),
        }
    }

    if prepared.is_empty() {
        return Ok(Notice::from(AllDynamicNotice).into());
    }
    Ok(Outcome::Extracted(synthesize(text, &prepared, config)?))
}
