//! ec2-meta-env library interface
//!
//! Runs a command with EC2 instance metadata exposed as `EC2_*` environment
//! variables.
//!
//! # Module Organization
//!
//! - [`cli`] - Argument definitions and config/flag merging
//! - [`environ`] - Variable naming and environment construction
//! - [`metadata`] - Metadata source trait and the IMDS HTTP client
//! - [`runner`] - Child command execution
//! - [`core`] - Main execution logic
//! - [`errors`] - Error types (Ec2MetaEnvError, Result)
//! - [`status`] - Exit status codes (ExitStatus)

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod environ;
pub mod errors;
pub mod logging;
pub mod metadata;
pub mod runner;
pub mod signals;
pub mod status;
