use std::collections::HashSet;

use super::{CommentKind, CommentPosition, CommentRecord, property_name};

/// Indentation of orphaned comments inside a registry entry.
const ORPHAN_INDENT: &str = "\t\t";

/// A line of the dynamic remainder left at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineLine {
    Comment(String),
    Property {
        code: String,
        /// Comment to append after the property's trailing comma.
        trailing: Option<String>,
    },
}

/// Render a comment on lines of its own, starting at `indent`.
///
/// Multi-line blocks are re-indented: lines after the opening one lose their
/// original leading whitespace and get `indent` plus one space. The closing
/// line keeps its content as written, with `*/` appended.
fn standalone(comment: &CommentRecord, indent: &str) -> Vec<String> {
    match comment.kind {
        CommentKind::Line => vec![format!("{}// {}", indent, comment.text)],
        CommentKind::Block if !comment.is_multi_line() => {
            vec![format!("{}/* {} */", indent, comment.text.trim())]
        }
        CommentKind::Block => {
            let parts: Vec<&str> = comment.text.split('\n').collect();
            let last = parts.len() - 1;
            parts
                .iter()
                .enumerate()
                .map(|(i, part)| {
                    let line = if i == 0 {
                        format!("{}/*{}", indent, part)
                    } else if i == last {
                        match part.trim_start() {
                            "" => format!("{} */", indent),
                            content => format!("{} {}*/", indent, content),
                        }
                    } else {
                        format!("{} {}", indent, part.trim_start())
                    };
                    line.trim_end().to_string()
                })
                .collect()
        }
    }
}

/// Render a comment to follow code on the same line.
fn trailing(comment: &CommentRecord) -> String {
    match comment.kind {
        CommentKind::Line => format!("// {}", comment.text),
        CommentKind::Block => {
            let collapsed: Vec<&str> = comment
                .text
                .split('\n')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect();
            format!("/* {} */", collapsed.join(" "))
        }
    }
}

fn matching<'a>(
    comments: &'a [CommentRecord],
    name: &'a str,
    position: CommentPosition,
) -> impl Iterator<Item = &'a CommentRecord> {
    comments
        .iter()
        .filter(move |comment| comment.belongs_to(name, position))
}

/// Put comments back into a freshly built registry entry.
///
/// The entry's first line is its `name: {` header; orphans go right below
/// it. Each property line gets its `before` comments above, the first
/// `inline` comment appended and its `after` comments below.
pub fn restore_to_registry(entry: &str, comments: &[CommentRecord]) -> String {
    let mut output = Vec::new();
    let mut restored: HashSet<&str> = HashSet::new();

    for (i, line) in entry.split('\n').enumerate() {
        if i == 0 {
            output.push(line.to_string());
            for orphan in comments.iter().filter(|comment| comment.is_orphan()) {
                output.extend(standalone(orphan, ORPHAN_INDENT));
            }
            continue;
        }

        let content = line.trim_start();
        let indent = &line[..line.len() - content.len()];
        let Some(name) = property_name(content).filter(|name| restored.insert(*name)) else {
            output.push(line.to_string());
            continue;
        };

        for comment in matching(comments, name, CommentPosition::Before) {
            output.extend(standalone(comment, indent));
        }
        match matching(comments, name, CommentPosition::Inline).next() {
            Some(comment) => output.push(format!("{} {}", line, trailing(comment))),
            None => output.push(line.to_string()),
        }
        for comment in matching(comments, name, CommentPosition::After) {
            output.extend(standalone(comment, indent));
        }
    }

    output.join("\n")
}

/// Attach comments to the dynamic properties that stay at the call site.
///
/// Indentation is left to the caller, which lays the lines out inside the
/// array composition.
pub fn restore_to_inline(dynamic_props: &[String], comments: &[CommentRecord]) -> Vec<InlineLine> {
    let mut lines = Vec::new();
    let mut restored: HashSet<&str> = HashSet::new();

    for prop in dynamic_props {
        let name = property_name(prop.trim_start()).filter(|name| restored.insert(*name));
        let Some(name) = name else {
            lines.push(InlineLine::Property {
                code: prop.clone(),
                trailing: None,
            });
            continue;
        };

        for comment in matching(comments, name, CommentPosition::Before) {
            lines.extend(standalone(comment, "").into_iter().map(InlineLine::Comment));
        }
        lines.push(InlineLine::Property {
            code: prop.clone(),
            trailing: matching(comments, name, CommentPosition::Inline)
                .next()
                .map(trailing),
        });
        for comment in matching(comments, name, CommentPosition::After) {
            lines.extend(standalone(comment, "").into_iter().map(InlineLine::Comment));
        }
    }

    lines
}
