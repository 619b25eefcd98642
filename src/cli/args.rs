//! CLI argument definitions using clap

use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};

use crate::environ::{BuildOptions, DEFAULT_TIMEOUT_SECS};

/// Run a command with EC2 instance metadata exposed as environment variables
#[derive(Parser, Debug, Clone)]
#[command(name = "ec2-meta-env", version, about, long_about = None)]
pub struct Args {
    /// An EC2 metadata key to add as an environment variable, e.g. "local-ipv4" or
    /// "public-keys/0/openssh-key". The variable name is the key prefixed with
    /// "EC2_", uppercased, with slashes and dashes replaced by underscores, e.g.
    /// "EC2_LOCAL_IPV4" or "EC2_PUBLIC_KEYS_0_OPENSSH_KEY"
    #[arg(short = 'e', long = "env", value_name = "KEY")]
    pub env: Vec<String>,

    /// Override existing environment variables of the same name
    #[arg(long = "override", action = ArgAction::SetTrue)]
    pub override_existing: bool,

    /// Fail immediately if EC2 metadata cannot be retrieved
    #[arg(short = 's', long = "strict", action = ArgAction::SetTrue)]
    pub strict: bool,

    /// HTTP request timeout per metadata key
    #[arg(
        short = 't',
        long = "timeout",
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = parse_timeout,
    )]
    pub timeout: f64,

    /// Base URL of the instance metadata service
    /// [env: EC2_META_ENV_METADATA_URL]
    #[arg(long = "metadata-url", value_name = "URL")]
    pub metadata_url: Option<String>,

    /// Log progress to stderr. Repeat for more detail (-vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Log line format
    #[arg(long = "log-format", value_name = "FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// The command to run with the specified environment variables
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
    )]
    pub command: Vec<String>,
}

impl Args {
    /// Environment builder settings for this invocation
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            keys: self.env.clone(),
            override_existing: self.override_existing,
            strict: self.strict,
        }
    }

    /// Per-request metadata timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout)
    }
}

/// Log output format
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}

fn parse_timeout(s: &str) -> Result<f64, String> {
    let seconds: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", s))?;

    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(format!("timeout must be a positive number of seconds, got '{}'", s));
    }
    // Duration::from_secs_f64 panics past u64::MAX seconds
    if seconds > u32::MAX as f64 {
        return Err(format!("timeout '{}' is too large", s));
    }

    Ok(seconds)
}
