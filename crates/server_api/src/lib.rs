use std::sync::Arc;

use shared::{
    error::{ApiError, ErrorCode},
    protocol::{RequestFields, ServiceRequest},
};
use storage::RequestStore;
use tracing::{error, info};

#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<dyn RequestStore>,
}

impl ApiContext {
    pub fn new(store: Arc<dyn RequestStore>) -> Self {
        Self { store }
    }
}

pub async fn create_request(
    ctx: &ApiContext,
    request: RequestFields,
) -> Result<ServiceRequest, ApiError> {
    let record = ctx.store.append(request).await.map_err(internal)?;
    info!(
        request_id = record.id.0,
        appliance = %record.fields.appliance,
        "service request created"
    );
    Ok(record)
}

pub async fn list_requests(ctx: &ApiContext) -> Result<Vec<ServiceRequest>, ApiError> {
    ctx.store.list_all().await.map_err(internal)
}

pub async fn health(ctx: &ApiContext) -> Result<(), ApiError> {
    ctx.store
        .health_check()
        .await
        .map_err(|e| ApiError::new(ErrorCode::Unavailable, e.to_string()))
}

fn internal(err: anyhow::Error) -> ApiError {
    error!(error = %format!("{err:#}"), "request store failure");
    ApiError::internal(err.to_string())
}
