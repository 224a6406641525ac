use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): the command did what it was asked
/// - `Failure` (1): a notice was reported and nothing was extracted
/// - `Error` (2): internal error (I/O, bad config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command did what it was asked.
    Success,
    /// A notice was reported; the file is unchanged.
    Failure,
    /// The command failed due to an internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
