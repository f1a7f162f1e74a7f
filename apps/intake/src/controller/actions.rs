//! One backend call per user action.

use async_trait::async_trait;
use client_core::{ClientError, RequestRecord, ServiceClient};
use shared::protocol::RequestFields;
use tracing::debug;

use crate::controller::events::{UiError, UiErrorContext, UiEvent};

#[async_trait]
pub trait IntakeBackend: Send + Sync {
    async fn submit(&self, fields: &RequestFields) -> Result<Option<RequestRecord>, ClientError>;
    async fn list(&self) -> Result<Vec<RequestRecord>, ClientError>;
}

#[async_trait]
impl IntakeBackend for ServiceClient {
    async fn submit(&self, fields: &RequestFields) -> Result<Option<RequestRecord>, ClientError> {
        self.create_request(fields).await
    }

    async fn list(&self) -> Result<Vec<RequestRecord>, ClientError> {
        self.list_requests().await
    }
}

pub async fn submit_request(backend: &dyn IntakeBackend, fields: &RequestFields) -> UiEvent {
    match backend.submit(fields).await {
        Ok(created) => {
            debug!(
                request_id = created.as_ref().and_then(|r| r.id).map(|id| id.0),
                "submit succeeded"
            );
            UiEvent::Submitted(created)
        }
        Err(err) => {
            debug!(error = %err, "submit failed");
            UiEvent::Error(UiError::from_client_error(UiErrorContext::SubmitRequest, &err))
        }
    }
}

pub async fn load_requests(backend: &dyn IntakeBackend) -> UiEvent {
    match backend.list().await {
        Ok(records) => UiEvent::RequestsLoaded(records),
        Err(err) => {
            debug!(error = %err, "list failed");
            UiEvent::Error(UiError::from_client_error(UiErrorContext::ListRequests, &err))
        }
    }
}
