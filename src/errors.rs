//! Error types for ec2-meta-env

use std::io;
use thiserror::Error;

use crate::metadata::FetchError;

/// Main error type for ec2-meta-env
#[derive(Error, Debug)]
pub enum Ec2MetaEnvError {
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("{program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed waiting for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Interrupted")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, Ec2MetaEnvError>;
