use ec2_meta_env::context::Environment;
use ec2_meta_env::status::ExitStatus;
use ec2_meta_env::{core, signals};

/// Entry point - installs the Ctrl+C handler and calls core::run()
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    // The child shares our process group and gets Ctrl+C on its own; we only
    // need to survive it to report the child's exit code.
    signals::install_handler().ok();

    let args: Vec<String> = std::env::args().collect();
    let env = Environment::init();

    core::run(args, env)
}
