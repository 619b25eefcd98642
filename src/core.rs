use clap::Parser;
use tracing::{debug, info};

use crate::cli::{merge_default_options, resolve_metadata_url, Args};
use crate::config::Config;
use crate::context::Environment;
use crate::environ::build_environment;
use crate::errors::{Ec2MetaEnvError, Result};
use crate::logging;
use crate::metadata::{ImdsClient, MetadataSource};
use crate::runner::run_command;
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Loads the config file, parses `args` (including the program name) and runs
/// the requested command with metadata merged into `env.vars`.
pub fn run(args: Vec<String>, env: Environment) -> ExitStatus {
    let config = match Config::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: warning: {}", env.program_name, e);
            Config::fallback(&env)
        }
    };

    let merged_args = merge_default_options(args, &config);

    let parsed = match Args::try_parse_from(&merged_args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Usage
            };
        }
    };

    logging::init(parsed.verbose, parsed.log_format, env.stderr_isatty);
    debug!(config_file = %config.config_file().display(), "Configuration loaded");

    let metadata_url = resolve_metadata_url(&parsed, &env, &config);
    let client = match ImdsClient::new(&metadata_url, parsed.timeout()) {
        Ok(client) => client,
        Err(e) => return handle_error(&env, Ec2MetaEnvError::from(e), parsed.verbose),
    };

    match program(&parsed, &env, &client) {
        Ok(status) => status,
        Err(e) => handle_error(&env, e, parsed.verbose),
    }
}

/// Build the environment from `source` and run the command in it
pub fn program<S>(args: &Args, env: &Environment, source: &S) -> Result<ExitStatus>
where
    S: MetadataSource + ?Sized,
{
    let options = args.build_options();
    info!(
        keys = options.keys.len(),
        strict = options.strict,
        override_existing = options.override_existing,
        "Building environment"
    );

    let environ = build_environment(&env.vars, &options, source)?;
    let code = run_command(&args.command, &environ)?;

    Ok(ExitStatus::from_code(code))
}

fn handle_error(env: &Environment, error: Ec2MetaEnvError, verbose: u8) -> ExitStatus {
    if verbose >= 3 {
        eprintln!("{}: {:?}", env.program_name, error);
    } else {
        eprintln!("{}: {}", env.program_name, error);
    }

    ExitStatus::from_error(&error)
}
