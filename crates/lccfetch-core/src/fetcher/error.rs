//! Reasons a single fetch attempt failed. Only logged; every variant collapses
//! to `FetchOutcome::Failed` for the sweep.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// URL rejected by libcurl before any request was made.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl { url: String, source: curl::Error },
    /// Response status was not 200.
    #[error("HTTP {0}")]
    Http(u32),
    /// Curl reported an error (timeout, connection refused, aborted write, ...).
    #[error("transfer: {0}")]
    Transfer(#[from] curl::Error),
    /// Creating or writing the local file failed.
    #[error("storage: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Transfer(e) if e.is_operation_timedout())
    }
}
