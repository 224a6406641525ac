//! Source text with a line index and atomic text edits.
//!
//! The engine works on byte offsets internally. Hosts speak in line/column
//! positions, so conversion happens at the boundary through [`LineIndex`].

use anyhow::{Result, bail};
use serde::Serialize;

/// Offset ⇄ (line, column) mapping over one immutable text snapshot.
///
/// Lines and columns are 0-based; columns count characters, not bytes.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { text, line_starts }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset of a position. Out-of-range lines and columns clamp.
    pub fn offset_at(&self, line: usize, column: usize) -> usize {
        let Some(&start) = self.line_starts.get(line) else {
            return self.text.len();
        };
        let line_text = self.line_text(line);
        let within = line_text
            .char_indices()
            .nth(column)
            .map(|(i, _)| i)
            .unwrap_or(line_text.len());
        start + within
    }

    /// Position of a byte offset. Offsets past the end clamp to the end.
    pub fn position_at(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.text.len());
        let line = self.line_of(offset);
        let start = self.line_starts[line];
        let column = self.text[start..floor_char_boundary(self.text, offset)]
            .chars()
            .count();
        (line, column)
    }

    /// 0-based line containing `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }

    /// Text of a line without its terminator (`\n` or `\r\n`).
    pub fn line_text(&self, line: usize) -> &'a str {
        let Some(&start) = self.line_starts.get(line) else {
            return "";
        };
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.text.len());
        self.text[start..end].trim_end_matches('\r')
    }

    /// Leading whitespace of the line containing `offset`.
    pub fn indent_at(&self, offset: usize) -> &'a str {
        let line = self.line_text(self.line_of(offset));
        let trimmed = line.trim_start_matches([' ', '\t']);
        &line[..line.len() - trimmed.len()]
    }
}

fn floor_char_boundary(text: &str, mut offset: usize) -> usize {
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Replace the byte range `start..end` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

impl TextEdit {
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            start: at,
            end: at,
            replacement: text.into(),
        }
    }

    pub fn replace(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            replacement: text.into(),
        }
    }
}

/// Apply a batch of edits to `text` all at once.
///
/// Edits refer to offsets in the original text. Insertions sharing an offset
/// keep their list order. Any out-of-bounds or overlapping edit fails the whole
/// batch, leaving nothing applied.
pub fn apply_edits(text: &str, edits: &[TextEdit]) -> Result<String> {
    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by_key(|edit| (edit.start, edit.end));

    let mut previous_end = 0;
    for edit in &ordered {
        if edit.start > edit.end || edit.end > text.len() {
            bail!(
                "Edit range {}..{} is out of bounds for text of length {}",
                edit.start,
                edit.end,
                text.len()
            );
        }
        if !text.is_char_boundary(edit.start) || !text.is_char_boundary(edit.end) {
            bail!(
                "Edit range {}..{} splits a character",
                edit.start,
                edit.end
            );
        }
        if edit.start < previous_end {
            bail!("Edit at {} overlaps a previous edit", edit.start);
        }
        previous_end = edit.end;
    }

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    for edit in ordered {
        output.push_str(&text[cursor..edit.start]);
        output.push_str(&edit.replacement);
        cursor = edit.end;
    }
    output.push_str(&text[cursor..]);
    Ok(output)
}
