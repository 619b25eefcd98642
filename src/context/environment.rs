//! Execution environment captured at startup

use std::ffi::OsString;
use std::io::IsTerminal;

use crate::environ::Environ;

/// Everything read from the ambient process state.
///
/// Built once in `main`; the rest of the program only sees what is passed in.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Variables handed to the child, before metadata is merged in
    pub vars: Environ,
    pub stderr_isatty: bool,
    pub program_name: String,
}

impl Environment {
    /// Snapshot the current process environment
    pub fn init() -> Self {
        Self {
            vars: std::env::vars_os().collect(),
            stderr_isatty: std::io::stderr().is_terminal(),
            program_name: env!("CARGO_PKG_NAME").to_string(),
        }
    }

    /// An environment with exactly the given variables
    pub fn from_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        Self {
            vars: vars.into_iter().collect(),
            stderr_isatty: false,
            program_name: env!("CARGO_PKG_NAME").to_string(),
        }
    }

    /// Look up a variable that is valid UTF-8
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(&OsString::from(name)).and_then(|v| v.to_str())
    }
}
