use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced to the user by the intake client.
///
/// Transport problems (unreachable host, timeout, undecodable body) and
/// application failures (an unexpected status code) are both terminal for a
/// single user action; nothing is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build http client: {0}")]
    Setup(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("server returned {status}: {message}")]
    Status { status: StatusCode, message: String },
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport { .. })
    }
}
