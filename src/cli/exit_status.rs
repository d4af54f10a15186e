use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, whether or not duplicates were found
/// - `Error` (1): Command failed (bad arguments, config error, unreadable file, etc.)
///
/// Finding duplicates is informational and does not fail the process; only
/// genuine errors exit non-zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed.
    Success,
    /// Command failed due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
