use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Row, Sqlite,
};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use shared::{
    domain::ServiceRequestId,
    protocol::{RequestFields, ServiceRequest},
};

mod memory;

pub use memory::MemoryStore;

/// Append-only collection of service requests.
///
/// Implementations must keep every successful `append` visible to later
/// `list_all` calls and return records in creation order.
#[async_trait]
pub trait RequestStore: Send + Sync {
    async fn append(&self, request: RequestFields) -> Result<ServiceRequest>;
    async fn list_all(&self) -> Result<Vec<ServiceRequest>>;

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn new(database_url: &str) -> Result<Self> {
        ensure_sqlite_parent_dir_exists(database_url)?;

        let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_options)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl RequestStore for Storage {
    async fn append(&self, request: RequestFields) -> Result<ServiceRequest> {
        let created_at = Utc::now();
        let hash = request.content_hash();
        let rec = sqlx::query(
            "INSERT INTO service_requests (name, contact, appliance, issue, hash, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&request.name)
        .bind(&request.contact)
        .bind(&request.appliance)
        .bind(&request.issue)
        .bind(&hash)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .context("failed to insert service request")?;

        Ok(ServiceRequest {
            id: ServiceRequestId(rec.get::<i64, _>(0)),
            fields: request,
            created_at,
            hash,
        })
    }

    async fn list_all(&self) -> Result<Vec<ServiceRequest>> {
        let rows = sqlx::query(
            "SELECT id, name, contact, appliance, issue, hash, created_at
             FROM service_requests
             ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to list service requests")?;

        Ok(rows
            .into_iter()
            .map(|r| ServiceRequest {
                id: ServiceRequestId(r.get::<i64, _>(0)),
                fields: RequestFields {
                    name: r.get::<String, _>(1),
                    contact: r.get::<String, _>(2),
                    appliance: r.get::<String, _>(3),
                    issue: r.get::<String, _>(4),
                },
                hash: r.get::<String, _>(5),
                created_at: r.get::<DateTime<Utc>, _>(6),
            })
            .collect())
    }

    async fn health_check(&self) -> Result<()> {
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("sqlite ping failed")?;
        Ok(())
    }
}

fn ensure_sqlite_parent_dir_exists(database_url: &str) -> Result<()> {
    let Some(path) = sqlite_path(database_url) else {
        return Ok(());
    };

    let Some(parent) = path.parent() else {
        return Ok(());
    };

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for database url '{database_url}'",
            parent.display()
        )
    })?;

    Ok(())
}

fn sqlite_path(database_url: &str) -> Option<PathBuf> {
    if database_url.starts_with("sqlite::memory:") || !database_url.starts_with("sqlite:") {
        return None;
    }

    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() {
        return None;
    }

    Some(Path::new(path).to_path_buf())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
