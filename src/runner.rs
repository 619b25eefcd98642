//! Child command execution

use std::process::Command;

use tracing::{debug, info};

use crate::environ::Environ;
use crate::errors::{Ec2MetaEnvError, Result};

/// Offset added to a signal number to form an exit code (shell convention)
const SIGNAL_EXIT_BASE: i32 = 128;

/// Run `command` with `environ` as its entire environment and wait for it.
///
/// Returns the child's exit code. A child terminated by a signal reports
/// `128 + signal`. The first element is looked up using the `PATH` found in
/// `environ`.
pub fn run_command(command: &[String], environ: &Environ) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Ec2MetaEnvError::Argument("no command given".to_string()))?;

    info!(%program, args = args.len(), vars = environ.len(), "Starting command");

    let mut child = Command::new(program)
        .args(args)
        .env_clear()
        .envs(environ)
        .spawn()
        .map_err(|source| Ec2MetaEnvError::Spawn {
            program: program.clone(),
            source,
        })?;

    let status = child.wait().map_err(|source| Ec2MetaEnvError::Wait {
        program: program.clone(),
        source,
    })?;

    debug!(%program, %status, "Command finished");
    Ok(exit_code(status))
}

#[cfg(unix)]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => SIGNAL_EXIT_BASE + signal,
        (None, None) => 1,
    }
}

#[cfg(not(unix))]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
