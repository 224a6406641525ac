//! Notice types for extraction outcomes that leave the file untouched.
//!
//! Every notice is an expected result, not a failure of the tool. Each one
//! carries what a host needs to show it: a message, a severity and a stable
//! rule id.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Rule identifier for each notice type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    NotFound,
    AliasDetected,
    EmptyBody,
    ParseFailed,
    AllDynamic,
    NameInvalid,
    NameCollision,
    DuplicateRegistryName,
    NoTargets,
    FileParseFailed,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::NotFound => write!(f, "not-found"),
            Rule::AliasDetected => write!(f, "alias-detected"),
            Rule::EmptyBody => write!(f, "empty-body"),
            Rule::ParseFailed => write!(f, "parse-failed"),
            Rule::AllDynamic => write!(f, "all-dynamic"),
            Rule::NameInvalid => write!(f, "name-invalid"),
            Rule::NameCollision => write!(f, "name-collision"),
            Rule::DuplicateRegistryName => write!(f, "duplicate-registry-name"),
            Rule::NoTargets => write!(f, "no-targets"),
            Rule::FileParseFailed => write!(f, "file-parse-failed"),
        }
    }
}

// ============================================================
// Notice Types - Locating
// ============================================================

/// No style literal under the cursor and no registry reference either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundNotice;

impl NotFoundNotice {
    pub fn severity() -> Severity {
        Severity::Info
    }

    pub fn rule() -> Rule {
        Rule::NotFound
    }
}

/// The cursor is on a reference to an existing registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDetectedNotice;

impl AliasDetectedNotice {
    pub fn severity() -> Severity {
        Severity::Info
    }

    pub fn rule() -> Rule {
        Rule::AliasDetected
    }
}

/// The located literal holds nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyBodyNotice;

impl EmptyBodyNotice {
    pub fn severity() -> Severity {
        Severity::Info
    }

    pub fn rule() -> Rule {
        Rule::EmptyBody
    }
}

/// The whole file failed to parse; nothing was located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileParseFailedNotice {
    /// Parser diagnostic, for logs and `details`.
    pub error: String,
}

impl FileParseFailedNotice {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::FileParseFailed
    }
}

// ============================================================
// Notice Types - Partitioning
// ============================================================

/// The property list did not parse once comments were stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailedNotice;

impl ParseFailedNotice {
    pub fn severity() -> Severity {
        Severity::Info
    }

    pub fn rule() -> Rule {
        Rule::ParseFailed
    }
}

/// Every property is computed; there is nothing to hoist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllDynamicNotice;

impl AllDynamicNotice {
    pub fn severity() -> Severity {
        Severity::Info
    }

    pub fn rule() -> Rule {
        Rule::AllDynamic
    }
}

// ============================================================
// Notice Types - Naming
// ============================================================

/// The chosen entry name is not an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameInvalidNotice {
    pub name: String,
}

impl NameInvalidNotice {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NameInvalid
    }
}

/// The chosen entry name is already used by some registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCollisionNotice {
    pub name: String,
}

impl NameCollisionNotice {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NameCollision
    }
}

// ============================================================
// Notice Types - Bulk
// ============================================================

/// Two or more registries share a name, so the destination is ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRegistryNameNotice {
    pub name: String,
}

impl DuplicateRegistryNameNotice {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DuplicateRegistryName
    }
}

/// The file holds no extractable style literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoTargetsNotice;

impl NoTargetsNotice {
    pub fn severity() -> Severity {
        Severity::Info
    }

    pub fn rule() -> Rule {
        Rule::NoTargets
    }
}

// ============================================================
// Notice Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NotFound(NotFoundNotice),
    AliasDetected(AliasDetectedNotice),
    EmptyBody(EmptyBodyNotice),
    ParseFailed(ParseFailedNotice),
    AllDynamic(AllDynamicNotice),
    NameInvalid(NameInvalidNotice),
    NameCollision(NameCollisionNotice),
    DuplicateRegistryName(DuplicateRegistryNameNotice),
    NoTargets(NoTargetsNotice),
    FileParseFailed(FileParseFailedNotice),
}

impl Notice {
    /// Whether the host should ask for another name instead of giving up.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Notice::NameInvalid(_) | Notice::NameCollision(_))
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

// ============================================================
// Report Trait
// ============================================================

/// What a host needs to present a notice.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Notice` enum.
#[enum_dispatch]
pub trait Report {
    /// User-facing message.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional extra context, shown after the message.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for NotFoundNotice {
    fn message(&self) -> String {
        "No style block found in the JSX element containing the cursor.".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for AliasDetectedNotice {
    fn message(&self) -> String {
        "This style is already extracted to a StyleSheet. Select an inline style object to extract instead."
            .to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for EmptyBodyNotice {
    fn message(&self) -> String {
        "Style object is empty. Nothing to extract.".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for ParseFailedNotice {
    fn message(&self) -> String {
        "Failed to parse style for dynamic props.".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for AllDynamicNotice {
    fn message(&self) -> String {
        "All style properties are dynamic. No static styles to extract.".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for NameInvalidNotice {
    fn message(&self) -> String {
        format!(
            "Style name '{}' is invalid. Use only letters, numbers, and underscores, and do not start with a number.",
            self.name
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for NameCollisionNotice {
    fn message(&self) -> String {
        format!(
            "Style '{}' already exists. Please choose a different name.",
            self.name
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for DuplicateRegistryNameNotice {
    fn message(&self) -> String {
        format!(
            "There are multiple StyleSheets named '{}'. Please ensure StyleSheet names are unique.",
            self.name
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for NoTargetsNotice {
    fn message(&self) -> String {
        "No style objects found to extract.".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for FileParseFailedNotice {
    fn message(&self) -> String {
        "Failed to parse file for extraction.".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(self.error.clone())
    }
}
