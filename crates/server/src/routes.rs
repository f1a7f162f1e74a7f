use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use server_api::{create_request, health, list_requests};
use shared::{
    error::ApiError,
    protocol::{RequestFields, ServiceRequest},
};

use crate::app_state::AppState;

type HttpResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

pub(crate) async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match health(&state.api).await {
        Ok(()) => (StatusCode::OK, "ok").into_response(),
        Err(e) => (StatusCode::SERVICE_UNAVAILABLE, Json(e)).into_response(),
    }
}

pub(crate) async fn http_create_request(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RequestFields>,
) -> HttpResult<(StatusCode, Json<ServiceRequest>)> {
    let record = create_request(&state.api, req)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, Json(e)))?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub(crate) async fn http_list_requests(
    State(state): State<Arc<AppState>>,
) -> HttpResult<Json<Vec<ServiceRequest>>> {
    let records = list_requests(&state.api)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, Json(e)))?;
    Ok(Json(records))
}
