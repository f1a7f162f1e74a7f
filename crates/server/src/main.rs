use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{routing::get, Router};
use server_api::ApiContext;
use shared::protocol::{health_route, requests_route};
use storage::{MemoryStore, RequestStore, Storage};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;
mod routes;

use app_state::AppState;
use config::{load_settings, Settings, StorageBackend};
use routes::{healthz, http_create_request, http_list_requests};

const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let settings = load_settings()?;
    let store = open_store(&settings).await?;
    let state = AppState {
        api: ApiContext::new(store),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, backend = ?settings.storage_backend, "server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn open_store(settings: &Settings) -> anyhow::Result<Arc<dyn RequestStore>> {
    match settings.storage_backend {
        StorageBackend::Memory => {
            warn!("using in-memory storage; requests are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::Sqlite => {
            let database_url = &settings.database_url;
            let storage = Storage::new(database_url).await.map_err(|error| {
                error!(
                    %database_url,
                    %error,
                    "failed to open SQLite database; verify parent directory exists and permissions are correct"
                );
                error
            })?;
            Ok(Arc::new(storage))
        }
    }
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(health_route(), get(healthz))
        .route(
            requests_route(),
            get(http_list_requests).post(http_create_request),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
