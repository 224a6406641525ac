use std::collections::VecDeque;

use super::{CommentKind, CommentPosition, CommentRecord, property_name};

/// A property list with its comments removed, plus what was removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedComments {
    pub cleaned: String,
    pub comments: Vec<CommentRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Line,
    Block,
}

/// Part of a physical line still to be scanned.
struct Pending {
    line: usize,
    /// Byte offset in the line where scanning resumes.
    from: usize,
    /// Code seen so far on this line, comments excluded.
    code: String,
    /// Scanning resumes inside a template literal opened on an earlier line.
    in_template: bool,
}

/// Leftmost `//` or `/*` that is not inside a string literal, and whether
/// `text` ends inside an unclosed template literal.
///
/// Quotes close at the end of a line; only backticks carry over to the next.
fn find_comment_start(text: &str, in_template: bool) -> (Option<(usize, Marker)>, bool) {
    let bytes = text.as_bytes();
    let mut quote: Option<u8> = in_template.then_some(b'`');
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        match quote {
            Some(_) if byte == b'\\' => i += 1,
            Some(q) if byte == q => quote = None,
            Some(_) => {}
            None => match (byte, bytes.get(i + 1)) {
                (b'\'' | b'"' | b'`', _) => quote = Some(byte),
                (b'/', Some(b'/')) => return (Some((i, Marker::Line)), false),
                (b'/', Some(b'*')) => return (Some((i, Marker::Block)), false),
                _ => {}
            },
        }
        i += 1;
    }
    (None, quote == Some(b'`'))
}

fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with("//") || line.starts_with("/*")
}

/// Decide which property a comment documents.
///
/// Code before the comment on its own line makes it inline. Otherwise the
/// next property line below claims it. Multi-line blocks with nothing below
/// fall back to the nearest property line above.
fn associate(
    lines: &[&str],
    before: &str,
    start_line: usize,
    end_line: usize,
    multi_line: bool,
) -> (Option<String>, CommentPosition) {
    if let Some(name) = property_name(before.trim()) {
        return (Some(name.to_string()), CommentPosition::Inline);
    }

    for later in lines.iter().skip(end_line + 1) {
        let later = later.trim();
        if is_skippable(later) {
            continue;
        }
        if let Some(name) = property_name(later) {
            return (Some(name.to_string()), CommentPosition::Before);
        }
        break;
    }

    if multi_line {
        for earlier in lines[..start_line].iter().rev() {
            let earlier = earlier.trim();
            if is_skippable(earlier) {
                continue;
            }
            if let Some(name) = property_name(earlier) {
                return (Some(name.to_string()), CommentPosition::After);
            }
            break;
        }
    }

    (None, CommentPosition::Before)
}

/// Collapse runs of blank lines and drop blank lines at either end.
fn tidy(kept: Vec<String>) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(kept.len());
    for line in kept {
        let blank = line.trim().is_empty();
        if blank && lines.last().is_none_or(|last| last.trim().is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|last| last.trim().is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

fn keep_code(kept: &mut Vec<String>, code: &str) {
    if !code.trim().is_empty() {
        kept.push(code.trim_end().to_string());
    }
}

/// Strip every comment from a style property list.
///
/// Each line is scanned left to right; after a comment is removed the rest of
/// the line goes back on the queue, so one pass handles exactly one comment.
/// Lines left empty by comment removal disappear from the cleaned text.
/// Block comments end at the first `*/`; there is no nesting. A template
/// literal spanning lines hides comment markers until its closing backtick.
pub fn extract_comments(body: &str) -> ExtractedComments {
    let lines: Vec<&str> = body.split('\n').collect();
    let mut kept = Vec::new();
    let mut comments = Vec::new();
    let mut queue = VecDeque::new();

    let mut next = 0;
    let mut template_open = false;
    while next < lines.len() {
        queue.push_back(Pending {
            line: next,
            from: 0,
            code: String::new(),
            in_template: template_open,
        });
        next += 1;

        while let Some(Pending {
            line: line_no,
            from,
            mut code,
            in_template,
        }) = queue.pop_front()
        {
            let line = lines[line_no];
            let (found, ends_in_template) = find_comment_start(&line[from..], in_template);
            template_open = ends_in_template;
            let Some((relative, marker)) = found else {
                if from == 0 {
                    kept.push(line.to_string());
                } else {
                    code.push_str(&line[from..]);
                    keep_code(&mut kept, &code);
                }
                continue;
            };

            let at = from + relative;
            code.push_str(&line[from..at]);
            let column = line[..at].chars().count() + 1;
            let open = at + 2;

            match marker {
                Marker::Line => {
                    let (property, position) = associate(&lines, &code, line_no, line_no, false);
                    comments.push(CommentRecord {
                        kind: CommentKind::Line,
                        text: line[open..].trim().to_string(),
                        line: line_no + 1,
                        column,
                        end: None,
                        property,
                        position,
                    });
                    keep_code(&mut kept, &code);
                }
                Marker::Block => {
                    if let Some(close) = line[open..].find("*/") {
                        let close = open + close;
                        let (property, position) =
                            associate(&lines, &code, line_no, line_no, false);
                        comments.push(CommentRecord {
                            kind: CommentKind::Block,
                            text: line[open..close].to_string(),
                            line: line_no + 1,
                            column,
                            end: None,
                            property,
                            position,
                        });
                        queue.push_front(Pending {
                            line: line_no,
                            from: close + 2,
                            code,
                            in_template: false,
                        });
                        continue;
                    }

                    let mut text = line[open..].to_string();
                    let mut end_line = line_no;
                    let mut resume = None;
                    for (later_no, later) in lines.iter().enumerate().skip(line_no + 1) {
                        end_line = later_no;
                        text.push('\n');
                        if let Some(close) = later.find("*/") {
                            text.push_str(&later[..close]);
                            resume = Some(close + 2);
                            break;
                        }
                        text.push_str(later);
                    }
                    let end_text = &lines[end_line][..resume.unwrap_or(lines[end_line].len())];
                    let (property, position) = associate(&lines, &code, line_no, end_line, true);
                    comments.push(CommentRecord {
                        kind: CommentKind::Block,
                        text,
                        line: line_no + 1,
                        column,
                        end: Some((end_line + 1, end_text.chars().count())),
                        property,
                        position,
                    });

                    next = end_line + 1;
                    keep_code(&mut kept, &code);
                    if let Some(from) = resume {
                        queue.push_front(Pending {
                            line: end_line,
                            from,
                            code: String::new(),
                            in_template: false,
                        });
                    }
                }
            }
        }
    }

    ExtractedComments {
        cleaned: tidy(kept),
        comments,
    }
}
