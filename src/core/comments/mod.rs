//! Comment handling for style property lists.
//!
//! Comments are not part of the parsed tree, so they are stripped from the
//! body text before parsing and tied to properties by textual adjacency.
//! After the rewrite they are put back next to the property they annotate.
//!
//! ## Module Structure
//!
//! - `extractor`: strips comments and infers their association
//! - `restore`: re-emits comments into registry entries and inline properties

mod extractor;
mod restore;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub use extractor::{ExtractedComments, extract_comments};
pub use restore::{InlineLine, restore_to_inline, restore_to_registry};

static PROPERTY_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s*:").unwrap());

/// Name of the property a trimmed line starts with, if any.
pub(crate) fn property_name(line: &str) -> Option<&str> {
    PROPERTY_LINE_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CommentKind {
    Line,
    Block,
}

/// Where a comment sits relative to its property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CommentPosition {
    Before,
    After,
    Inline,
}

/// A comment removed from a style body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub kind: CommentKind,
    /// Trimmed for line comments; block comment interiors are kept verbatim,
    /// newlines and indentation included.
    pub text: String,
    /// 1-based line within the body.
    pub line: usize,
    /// 1-based character column of the opening marker.
    pub column: usize,
    /// End line and column, only for block comments spanning several lines.
    pub end: Option<(usize, usize)>,
    /// `None` means the comment is orphaned.
    pub property: Option<String>,
    pub position: CommentPosition,
}

impl CommentRecord {
    pub fn is_orphan(&self) -> bool {
        self.property.is_none()
    }

    pub fn is_multi_line(&self) -> bool {
        self.kind == CommentKind::Block && self.text.contains('\n')
    }

    pub fn belongs_to(&self, name: &str, position: CommentPosition) -> bool {
        self.position == position && self.property.as_deref() == Some(name)
    }

    /// Drop the association, keeping the comment at the top of its block.
    pub fn orphan(mut self) -> Self {
        self.property = None;
        self.position = CommentPosition::Before;
        self
    }
}
