//! HTTP transport trait and structured fetch errors.
//!
//! The Transport trait abstracts over the single blocking GET the crawl
//! performs, so the loop can run against a recording mock in tests.

use crate::config::CrawlConfig;
use std::time::Duration;
use thiserror::Error;

/// Why a GET did not produce a body.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, or timeout failure; the reqwest error chain names which.
    #[error("network error")]
    Network(#[source] reqwest::Error),

    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("failed to read response body")]
    Body(#[source] reqwest::Error),

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

/// One blocking GET returning the raw response body.
///
/// Implementations must treat any non-2xx status as an error and must not
/// transform the body.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// `reqwest` blocking client with no custom headers and the default
/// redirect policy.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a client. `None` disables the timeout entirely; the blocking
    /// client's own 30 s default is always overridden.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    pub fn from_config(config: &CrawlConfig) -> Result<Self, FetchError> {
        Self::new(config.timeout())
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(FetchError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().map_err(FetchError::Body)?;
        Ok(body.to_vec())
    }
}
