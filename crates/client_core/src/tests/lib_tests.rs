use super::*;
use std::{sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::StatusCode as AxumStatus,
    routing::{get, post},
    Json, Router,
};
use server_api::{create_request, list_requests, ApiContext};
use shared::{
    domain::Appliance,
    error::{ApiError, ErrorCode},
};
use storage::MemoryStore;
use tokio::net::TcpListener;

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

async fn spawn_backend() -> (String, ApiContext) {
    let ctx = ApiContext::new(Arc::new(MemoryStore::new()));
    let app = Router::new()
        .route(
            "/requests",
            get(|State(ctx): State<ApiContext>| async move {
                list_requests(&ctx)
                    .await
                    .map(Json)
                    .map_err(|e| (AxumStatus::INTERNAL_SERVER_ERROR, Json(e)))
            })
            .post(
                |State(ctx): State<ApiContext>, Json(fields): Json<RequestFields>| async move {
                    create_request(&ctx, fields)
                        .await
                        .map(|record| (AxumStatus::CREATED, Json(record)))
                        .map_err(|e| (AxumStatus::INTERNAL_SERVER_ERROR, Json(e)))
                },
            ),
        )
        .route("/healthz", get(|| async { "ok" }))
        .with_state(ctx.clone());
    (serve(app).await, ctx)
}

fn client_for(base_url: &str) -> ServiceClient {
    ServiceClient::new(ClientConfig::new(base_url).expect("config")).expect("client")
}

fn alice() -> RequestFields {
    RequestFields::new("Alice", "555-1234", Appliance::Refrigerator, "Not cooling")
}

#[tokio::test]
async fn submitted_request_appears_in_list() {
    let (base_url, _ctx) = spawn_backend().await;
    let client = client_for(&base_url);

    let created = client.create_request(&alice()).await.expect("create");
    assert_eq!(created.map(|r| r.fields), Some(alice()));

    let listed = client.list_requests().await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].fields, alice());
    assert_eq!(listed[0].hash.as_deref(), Some(alice().content_hash().as_str()));
    assert!(listed[0].id.is_some());
}

#[tokio::test]
async fn empty_backend_lists_no_requests() {
    let (base_url, _ctx) = spawn_backend().await;
    let listed = client_for(&base_url).list_requests().await.expect("list");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let (base_url, _ctx) = spawn_backend().await;
    let client = client_for(&format!("{base_url}/"));
    client.health().await.expect("health");
    assert_eq!(client.config().base_url(), base_url);
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = client_for(&format!("http://{addr}"));
    let err = client.create_request(&alice()).await.expect_err("should fail");
    assert!(err.is_transport(), "unexpected error: {err}");

    let err = client.list_requests().await.expect_err("should fail");
    assert!(err.is_transport(), "unexpected error: {err}");
}

#[tokio::test]
async fn non_created_status_is_reported_with_server_message() {
    let app = Router::new().route(
        "/requests",
        post(|| async {
            (
                AxumStatus::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(ErrorCode::Internal, "database is locked")),
            )
        })
        .get(|| async { (AxumStatus::SERVICE_UNAVAILABLE, "maintenance window") }),
    );
    let client = client_for(&serve(app).await);

    match client.create_request(&alice()).await {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(message, "database is locked");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    match client.list_requests().await {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(message, "maintenance window");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn ok_instead_of_created_counts_as_failure() {
    let app = Router::new().route("/requests", post(|| async { AxumStatus::OK }));
    let client = client_for(&serve(app).await);

    let err = client.create_request(&alice()).await.expect_err("should fail");
    assert!(matches!(err, ClientError::Status { status, .. } if status == StatusCode::OK));
}

#[tokio::test]
async fn empty_created_body_is_success_without_record() {
    let app = Router::new().route("/requests", post(|| async { AxumStatus::CREATED }));
    let client = client_for(&serve(app).await);

    let created = client.create_request(&alice()).await.expect("create");
    assert!(created.is_none());
}

#[tokio::test]
async fn list_accepts_records_with_only_the_four_fields() {
    let app = Router::new().route(
        "/requests",
        get(|| async {
            Json(serde_json::json!([
                { "name": "Alice", "contact": "555-1234", "appliance": "Refrigerator", "issue": "Not cooling" },
                { "name": "Bob", "contact": "555-9876", "appliance": "Other", "issue": "Rattles" },
            ]))
        }),
    );
    let listed = client_for(&serve(app).await)
        .list_requests()
        .await
        .expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], RequestRecord::from(alice()));
    assert_eq!(listed[1].fields.name, "Bob");
    assert!(listed[1].hash.is_none());
}

#[tokio::test]
async fn malformed_list_body_is_a_transport_error() {
    let app = Router::new().route("/requests", get(|| async { "not json" }));
    let err = client_for(&serve(app).await)
        .list_requests()
        .await
        .expect_err("should fail");
    assert!(err.is_transport(), "unexpected error: {err}");
}

#[tokio::test]
async fn slow_service_hits_the_client_timeout() {
    let app = Router::new().route(
        "/requests",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(Vec::<RequestFields>::new())
        }),
    );
    let config = ClientConfig::new(&serve(app).await)
        .expect("config")
        .with_timeout(Duration::from_millis(200));
    let client = ServiceClient::new(config).expect("client");

    let err = client.list_requests().await.expect_err("should time out");
    assert!(err.is_transport(), "unexpected error: {err}");
}

#[test]
fn rejects_invalid_base_url() {
    let err = ClientConfig::new("localhost 5000").expect_err("should fail");
    assert!(matches!(err, ClientError::InvalidUrl { .. }));
}

#[test]
fn default_config_points_at_local_service() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
}
