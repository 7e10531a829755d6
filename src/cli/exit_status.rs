use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): Command completed successfully, no issues found
/// - `Failure` (1): Command completed but found gaps (missing translations, bad keys)
/// - `Error` (2): Command failed due to internal error (I/O, parse error, config error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully, no issues found.
    Success,
    /// Command completed but found gaps.
    Failure,
    /// Command failed due to internal error.
    Error,
}

impl ExitStatus {
    /// `Failure` when `has_issues`, otherwise `Success`.
    pub fn from_issues(has_issues: bool) -> Self {
        if has_issues {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
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
