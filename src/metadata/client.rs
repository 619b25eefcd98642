//! Blocking HTTP client for the instance metadata service

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use super::{FetchError, MetadataSource};

/// Where EC2 serves instance metadata (IMDS)
pub const DEFAULT_METADATA_URL: &str = "http://169.254.169.254/latest/meta-data/";

/// Fetches metadata keys with one GET request each
#[derive(Debug, Clone)]
pub struct ImdsClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ImdsClient {
    /// Build a client whose requests all share `timeout`.
    ///
    /// The timeout covers the whole request (connect, headers and body). System
    /// proxy settings are ignored since the metadata service is link-local.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).no_proxy().build()?;

        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// The URL a key is fetched from; the key is appended verbatim
    pub fn url_for(&self, key: &str) -> String {
        format!("{}{}", self.base_url, key)
    }
}

impl MetadataSource for ImdsClient {
    fn fetch(&self, key: &str) -> Result<String, FetchError> {
        let url = self.url_for(key);
        debug!(%url, timeout = ?self.timeout, "Fetching metadata");

        let response = self.client.get(&url).send().map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    key: key.to_string(),
                    seconds: self.timeout.as_secs_f64(),
                }
            } else {
                FetchError::Transport {
                    key: key.to_string(),
                    source: e,
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                key: key.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    key: key.to_string(),
                    seconds: self.timeout.as_secs_f64(),
                }
            } else {
                FetchError::Body {
                    key: key.to_string(),
                    source: e,
                }
            }
        })
    }
}
