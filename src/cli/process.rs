//! Pre- and post-parsing argument logic
//!
//! Config file defaults are spliced into the raw command line before clap sees
//! it; settings with several sources are resolved after parsing.

use crate::cli::args::Args;
use crate::config::Config;
use crate::context::Environment;
use crate::metadata::DEFAULT_METADATA_URL;

/// Environment variable overriding the metadata service URL
pub const METADATA_URL_ENV: &str = "EC2_META_ENV_METADATA_URL";

/// Insert the config file's default options right after the program name.
///
/// Options given on the command line come later and so take precedence for
/// single-valued flags. Defaults must be complete option/value pairs; they are
/// placed before the command and never reach it.
pub fn merge_default_options(args: Vec<String>, config: &Config) -> Vec<String> {
    if config.default_options.is_empty() {
        return args;
    }

    let mut merged = Vec::with_capacity(args.len() + config.default_options.len());
    let mut args = args.into_iter();

    if let Some(program) = args.next() {
        merged.push(program);
    }
    merged.extend(config.default_options.iter().cloned());
    merged.extend(args);

    merged
}

/// Command line, then environment, then config file, then the EC2 default
pub fn resolve_metadata_url(args: &Args, env: &Environment, config: &Config) -> String {
    args.metadata_url
        .as_deref()
        .or_else(|| env.var(METADATA_URL_ENV).filter(|url| !url.is_empty()))
        .or(config.metadata_url.as_deref())
        .unwrap_or(DEFAULT_METADATA_URL)
        .to_string()
}
