//! Extraction engine.
//!
//! Turns inline style literals in JSX into entries of a `StyleSheet.create`
//! registry and rewrites the call sites to reference them.
//!
//! ## Module Structure
//!
//! - `source`: offsets, positions and atomic text edits
//! - `parsers`: source and style-body parsing plus expression shapes
//! - `locate`: finds the style literal under the cursor or every literal
//! - `comments`: strips comments from a body and puts them back afterwards
//! - `partition`: splits properties into static and dynamic
//! - `registry`: inventory of existing registries and entry names
//! - `rewrite`: builds entries, call-site replacements and imports
//! - `extract`: single and bulk extraction on top of the above
//! - `advisory`: heuristic check of whether to offer extraction
//! - `inspect`: read-only summary of a file for hosts

pub mod advisory;
pub mod comments;
pub mod extract;
pub mod inspect;
pub mod locate;
pub mod parsers;
pub mod partition;
pub mod registry;
pub mod rewrite;
pub mod source;

pub use advisory::{Advice, advise};
pub use extract::{Extraction, Outcome, extract_all, extract_one, suggest_name};
pub use inspect::{Inspection, inspect};
pub use locate::{Located, StyleTarget, TargetKind};
pub use registry::StyleRegistry;
pub use source::{LineIndex, TextEdit, apply_edits};
