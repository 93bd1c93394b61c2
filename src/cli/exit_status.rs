use std::process::ExitCode;

use anyhow::Error;

use crate::error::LocError;

/// Exit status for the CLI.
///
/// - `Success` (0): run completed and output was written (or reported for a dry run)
/// - `Failure` (1): run aborted on the input, e.g. a key conflict or a malformed strings file
/// - `Error` (2): run could not start (bad arguments, config error, missing directory)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Classify an error returned by a run.
    pub fn from_error(err: &Error) -> Self {
        if err.downcast_ref::<LocError>().is_some() {
            ExitStatus::Failure
        } else {
            ExitStatus::Error
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
