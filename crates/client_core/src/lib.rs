use reqwest::{Client, Response, StatusCode};
use shared::{
    error::ApiError,
    protocol::{health_route, requests_route, RequestFields},
};
use tracing::{debug, warn};

pub mod config;
pub mod error;
pub mod types;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::ClientError;
pub use types::RequestRecord;

pub type Result<T> = std::result::Result<T, ClientError>;

/// HTTP client for the service-request backend. One call per user action.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: Client,
    config: ClientConfig,
}

impl ServiceClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Setup)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submits one request. The created record is returned when the service
    /// echoes it; an empty 201 body yields `None`.
    pub async fn create_request(&self, fields: &RequestFields) -> Result<Option<RequestRecord>> {
        let url = self.config.endpoint(requests_route());
        let res = self
            .http
            .post(&url)
            .json(fields)
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        let res = expect_status(res, StatusCode::CREATED).await?;

        let body = res.bytes().await.map_err(|source| transport(&url, source))?;
        if body.is_empty() {
            return Ok(None);
        }
        match serde_json::from_slice::<RequestRecord>(&body) {
            Ok(record) => {
                debug!(request_id = record.id.map(|id| id.0), "service request created");
                Ok(Some(record))
            }
            Err(error) => {
                warn!(%error, "created response body is not a service request record");
                Ok(None)
            }
        }
    }

    /// Fetches every stored request in the order the service returns them.
    pub async fn list_requests(&self) -> Result<Vec<RequestRecord>> {
        let url = self.config.endpoint(requests_route());
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        let res = expect_status(res, StatusCode::OK).await?;
        res.json().await.map_err(|source| transport(&url, source))
    }

    pub async fn health(&self) -> Result<()> {
        let url = self.config.endpoint(health_route());
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        expect_status(res, StatusCode::OK).await?;
        Ok(())
    }
}

fn transport(url: &str, source: reqwest::Error) -> ClientError {
    ClientError::Transport {
        url: url.to_string(),
        source,
    }
}

async fn expect_status(res: Response, expected: StatusCode) -> Result<Response> {
    let status = res.status();
    if status == expected {
        return Ok(res);
    }

    let body = res.bytes().await.unwrap_or_default();
    let message = match serde_json::from_slice::<ApiError>(&body) {
        Ok(api_error) => api_error.message,
        Err(_) => {
            let text = String::from_utf8_lossy(&body).trim().to_string();
            if text.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            } else {
                text
            }
        }
    };
    Err(ClientError::Status { status, message })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
