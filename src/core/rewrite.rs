//! Text synthesis: registry entries, call-site replacements, registry
//! insertion and the `StyleSheet` import patch.

use std::sync::LazyLock;

use regex::Regex;

use super::comments::{CommentRecord, InlineLine, restore_to_registry};
use super::locate::{Indentation, TargetKind};
use super::registry::{REGISTRY_FACTORY, StyleRegistry};
use super::source::TextEdit;
use crate::config::InsertionPolicy;

/// Module the registry factory is imported from.
pub const UI_MODULE: &str = "react-native";

static IMPORT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*import\s+(?:([\w$*{}\s,]+?)\s*from\s*)?['"]([^'"]+)['"][ \t]*;?"#)
        .unwrap()
});

fn is_comment_line(code: &str) -> bool {
    let trimmed = code.trim_start();
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}

/// Indent every line of `code` and terminate the property with a comma.
///
/// Comment lines get no comma. `trailing` is appended after the comma.
fn indent_property_code(code: &str, indent: &str, trailing: Option<&str>) -> String {
    let single_line = !code.contains('\n');
    if single_line && is_comment_line(code) {
        return format!("{}{}", indent, code.trim());
    }

    let mut output: Vec<String> = code
        .split('\n')
        .map(|line| format!("{}{}", indent, line).trim_end().to_string())
        .collect();
    if let Some(last) = output.last_mut() {
        last.push(',');
        if let Some(comment) = trailing {
            last.push(' ');
            last.push_str(comment);
        }
    }
    output.join("\n")
}

/// Build `\t<name>: {\n\t\t<prop>,\n\t},` and put the comments back into it.
pub fn create_style_object_with_comments(
    name: &str,
    static_props: &[String],
    comments: &[CommentRecord],
    preserve_comments: bool,
) -> String {
    let props: Vec<String> = static_props
        .iter()
        .map(|prop| indent_property_code(prop, "\t\t", None))
        .collect();
    let entry = format!("\t{}: {{\n{}\n\t}},", name, props.join("\n"));
    if preserve_comments && !comments.is_empty() {
        restore_to_registry(&entry, comments)
    } else {
        entry
    }
}

/// Text replacing the original style literal at the call site.
///
/// Without dynamic properties this is a plain `registry.entry` reference.
/// Otherwise the reference is composed in an array with an object holding
/// the dynamic remainder.
pub fn create_style_replacement(
    registry_name: &str,
    entry_name: &str,
    dynamic: &[InlineLine],
    indent: &Indentation,
    kind: TargetKind,
) -> String {
    let reference = format!("{}.{}", registry_name, entry_name);
    if dynamic.is_empty() {
        return match kind {
            TargetKind::Attribute => format!("style={{{}}}", reference),
            TargetKind::ArrayElement => reference,
        };
    }

    let lines: Vec<String> = dynamic
        .iter()
        .map(|line| match line {
            InlineLine::Comment(comment) => format!("{}{}", indent.object, comment),
            InlineLine::Property { code, trailing } => {
                indent_property_code(code, &indent.object, trailing.as_deref())
            }
        })
        .collect();

    let composed = format!(
        "[\n{arr}{reference},\n{arr}{{\n{lines}\n{arr}}},\n{base}]",
        arr = indent.array,
        reference = reference,
        lines = lines.join("\n"),
        base = indent.base,
    );
    match kind {
        TargetKind::Attribute => format!("style={{{}}}", composed),
        TargetKind::ArrayElement => composed,
    }
}

/// Edit adding `entries` just before the closing brace of `registry`.
///
/// A comma is added after the last existing entry when it lacks one.
pub fn insert_into_registry(registry: &StyleRegistry, entries: &[String]) -> TextEdit {
    let content = registry.body.trim_end();
    let at = registry.close_brace - (registry.body.len() - content.len());
    let rest = &registry.body[content.len()..];

    let mut text = String::new();
    if !content.trim().is_empty() && !content.ends_with(',') {
        text.push(',');
    }
    text.push('\n');
    text.push_str(&entries.join("\n"));
    if !rest.contains('\n') {
        text.push('\n');
    }
    TextEdit::insert(at, text)
}

struct ImportStatement<'a> {
    /// Everything between `import` and `from`, absent for side-effect imports.
    clause: Option<regex::Match<'a>>,
    module: &'a str,
    end: usize,
}

fn imports(text: &str) -> Vec<ImportStatement<'_>> {
    IMPORT_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            Some(ImportStatement {
                clause: caps.get(1),
                module: caps.get(2)?.as_str(),
                end: caps.get(0)?.end(),
            })
        })
        .collect()
}

/// Byte offset just past the last import statement.
pub fn end_of_imports(text: &str) -> Option<usize> {
    imports(text).last().map(|import| import.end)
}

/// Edit creating a new registry holding `entries`, placed per `policy`.
pub fn create_registry(
    text: &str,
    registry_name: &str,
    entries: &[String],
    policy: InsertionPolicy,
) -> TextEdit {
    let declaration = format!(
        "const {} = {}.create({{\n{}\n}});",
        registry_name,
        REGISTRY_FACTORY,
        entries.join("\n")
    );
    let after_imports = match policy {
        InsertionPolicy::AfterImports => end_of_imports(text),
        InsertionPolicy::Top | InsertionPolicy::Bottom => None,
    };

    match (policy, after_imports) {
        (InsertionPolicy::AfterImports, Some(at)) => {
            TextEdit::insert(at, format!("\n\n{}", declaration))
        }
        (InsertionPolicy::Top | InsertionPolicy::AfterImports, _) => {
            TextEdit::insert(0, format!("{}\n\n", declaration))
        }
        (InsertionPolicy::Bottom, _) => {
            let separator = if text.is_empty() || text.ends_with('\n') {
                "\n"
            } else {
                "\n\n"
            };
            TextEdit::insert(text.len(), format!("{}{}\n", separator, declaration))
        }
    }
}

/// Edit adding the registry factory to the imports, if the file never
/// mentions it.
///
/// An existing named import from the UI module gains the identifier; a
/// default-only import gets a named list. Failing that, a new import is
/// added after the last import (or at the top of the file).
pub fn import_patch(text: &str) -> Option<TextEdit> {
    if text.contains(REGISTRY_FACTORY) {
        return None;
    }

    let statements = imports(text);
    let ui_import = statements
        .iter()
        .filter(|import| import.module == UI_MODULE)
        .filter_map(|import| import.clause)
        .find(|clause| !clause.as_str().starts_with("type ") && !clause.as_str().contains('*'));

    if let Some(clause) = ui_import {
        let clause_text = clause.as_str();
        if let (Some(open), Some(close)) = (clause_text.find('{'), clause_text.rfind('}')) {
            let inner = &clause_text[open + 1..close];
            let content = inner.trim_end();
            if content.trim().is_empty() {
                return Some(TextEdit::replace(
                    clause.start() + open,
                    clause.start() + close + 1,
                    format!("{{ {} }}", REGISTRY_FACTORY),
                ));
            }
            let insertion = if content.ends_with(',') && inner.contains('\n') {
                let last_line = content.rsplit('\n').next().unwrap_or_default();
                let item_indent = &last_line[..last_line.len() - last_line.trim_start().len()];
                format!("\n{}{},", item_indent, REGISTRY_FACTORY)
            } else if content.ends_with(',') {
                format!(" {}", REGISTRY_FACTORY)
            } else {
                format!(", {}", REGISTRY_FACTORY)
            };
            let at = clause.start() + open + 1 + content.len();
            return Some(TextEdit::insert(at, insertion));
        }
        return Some(TextEdit::insert(
            clause.end(),
            format!(", {{ {} }}", REGISTRY_FACTORY),
        ));
    }

    let statement = format!("import {{ {} }} from '{}';", REGISTRY_FACTORY, UI_MODULE);
    Some(match statements.last() {
        Some(last) => TextEdit::insert(last.end, format!("\n{}", statement)),
        None => TextEdit::insert(0, format!("{}\n", statement)),
    })
}
