use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use shared::{
    domain::ServiceRequestId,
    protocol::{RequestFields, ServiceRequest},
};
use tokio::sync::RwLock;

use crate::RequestStore;

/// Process-local store. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<ServiceRequest>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RequestStore for MemoryStore {
    async fn append(&self, request: RequestFields) -> Result<ServiceRequest> {
        // Id assignment and push share one write guard.
        let mut records = self.records.write().await;
        let id = ServiceRequestId(records.len() as i64 + 1);
        let record = ServiceRequest::new(id, request, Utc::now());
        records.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<ServiceRequest>> {
        Ok(self.records.read().await.clone())
    }
}
