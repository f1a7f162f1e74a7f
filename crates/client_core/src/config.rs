use std::time::Duration;

use url::Url;

use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Validates `base_url` and drops any trailing slash so routes can be
    /// appended verbatim.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let trimmed = base_url.trim();
        Url::parse(trimmed).map_err(|source| ClientError::InvalidUrl {
            url: trimmed.to_string(),
            source,
        })?;

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
