//! Instance metadata retrieval
//!
//! The environment builder only talks to a [`MetadataSource`]. The production
//! implementation is [`ImdsClient`], a blocking HTTP client pointed at the
//! link-local metadata service; tests substitute scripted sources.

pub mod client;

pub use client::{ImdsClient, DEFAULT_METADATA_URL};

use thiserror::Error;

/// Why a single metadata key could not be fetched
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Timed out after {seconds:.1} seconds fetching metadata key '{key}'")]
    Timeout { key: String, seconds: f64 },

    #[error("Failed to fetch metadata key '{key}': {source}")]
    Transport {
        key: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Metadata key '{key}' returned HTTP {status}")]
    Status { key: String, status: u16 },

    #[error("Failed to read metadata key '{key}': {source}")]
    Body {
        key: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The metadata key the failed request was for
    pub fn key(&self) -> &str {
        match self {
            FetchError::Timeout { key, .. }
            | FetchError::Transport { key, .. }
            | FetchError::Status { key, .. }
            | FetchError::Body { key, .. } => key,
        }
    }
}

/// Anything that can resolve a metadata key to its raw string value
pub trait MetadataSource {
    fn fetch(&self, key: &str) -> Result<String, FetchError>;
}

impl<S: MetadataSource + ?Sized> MetadataSource for &S {
    fn fetch(&self, key: &str) -> Result<String, FetchError> {
        (**self).fetch(key)
    }
}
