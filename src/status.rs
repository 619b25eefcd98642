//! Exit status codes for the CLI
//!
//! The tool is transparent on success: whatever the child command exits with is
//! what `ec2-meta-env` exits with. Its own failures use fixed codes:
//! - 1: strict metadata fetch failure, config or client error
//! - 2: command-line usage error (clap's convention)
//! - 126: the command was found but could not be executed
//! - 127: the command was not found
//! - 130: interrupted before the command was started

use std::io;
use std::process::{ExitCode, Termination};

use crate::errors::Ec2MetaEnvError;

/// Exit status of an `ec2-meta-env` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
    Usage,
    CannotExecute,
    CommandNotFound,
    Interrupted,
    /// Exit code reported by the child command
    Code(u8),
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Error => 1,
            ExitStatus::Usage => 2,
            ExitStatus::CannotExecute => 126,
            ExitStatus::CommandNotFound => 127,
            ExitStatus::Interrupted => 130,
            ExitStatus::Code(code) => code,
        }
    }

    /// Map a child's raw exit code onto the 0-255 range a process can report
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            code => ExitStatus::Code((code & 0xff) as u8),
        }
    }

    /// Pick the exit status for an error that ended the run
    pub fn from_error(error: &Ec2MetaEnvError) -> Self {
        match error {
            Ec2MetaEnvError::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                ExitStatus::CommandNotFound
            }
            Ec2MetaEnvError::Spawn { .. } => ExitStatus::CannotExecute,
            Ec2MetaEnvError::Argument(_) => ExitStatus::Usage,
            Ec2MetaEnvError::Interrupted => ExitStatus::Interrupted,
            _ => ExitStatus::Error,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}
