//! Environment construction
//!
//! Turns metadata keys into `EC2_*` variables and merges them into a copy of a
//! base environment.

use std::collections::HashMap;
use std::ffi::OsString;

use tracing::{debug, warn};

use crate::errors::{Ec2MetaEnvError, Result};
use crate::metadata::MetadataSource;
use crate::signals;

/// A process environment: variable name to value
pub type Environ = HashMap<OsString, OsString>;

/// Prefix of every variable derived from a metadata key
pub const VAR_PREFIX: &str = "EC2_";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: f64 = 0.2;

/// How metadata values are fetched and merged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildOptions {
    /// Metadata keys in the order given; duplicates are fetched again
    pub keys: Vec<String>,
    /// Replace variables that already exist
    pub override_existing: bool,
    /// Abort on the first fetch failure
    pub strict: bool,
}

/// Derive the variable name for a metadata key.
///
/// `public-keys/0/openssh-key` becomes `EC2_PUBLIC_KEYS_0_OPENSSH_KEY`.
pub fn env_var_name(key: &str) -> String {
    let mut name = String::with_capacity(VAR_PREFIX.len() + key.len());
    name.push_str(VAR_PREFIX);
    name.extend(key.chars().map(|c| match c {
        '/' | '-' => '_',
        c => c,
    }));
    name.to_uppercase()
}

/// Build the environment for the child command.
///
/// `base` is copied, never modified. Keys are fetched one at a time in order.
/// A failed fetch aborts the build in strict mode and is skipped otherwise.
/// Empty values are never written.
pub fn build_environment<S>(base: &Environ, options: &BuildOptions, source: &S) -> Result<Environ>
where
    S: MetadataSource + ?Sized,
{
    let mut environ = base.clone();

    for key in &options.keys {
        if signals::was_interrupted() {
            return Err(Ec2MetaEnvError::Interrupted);
        }

        let name = OsString::from(env_var_name(key));

        let value = match source.fetch(key) {
            Ok(value) => value,
            Err(e) if options.strict => return Err(e.into()),
            Err(e) => {
                warn!(key = %key, error = %e, "Skipping metadata key");
                continue;
            }
        };

        if value.is_empty() {
            debug!(key = %key, "Metadata value is empty, not setting {}", name.to_string_lossy());
            continue;
        }

        if options.override_existing {
            environ.insert(name, OsString::from(value));
        } else if environ.contains_key(&name) {
            debug!(key = %key, "Keeping existing {}", name.to_string_lossy());
        } else {
            environ.insert(name, OsString::from(value));
        }
    }

    // a Ctrl+C during the last fetch must still keep the command from starting
    if signals::was_interrupted() {
        return Err(Ec2MetaEnvError::Interrupted);
    }

    Ok(environ)
}
