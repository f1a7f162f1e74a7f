use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::{Appliance, ServiceRequestId};

/// The four user-supplied fields of a service request. This is the body of
/// `POST /requests`; absent keys decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub appliance: String,
    #[serde(default)]
    pub issue: String,
}

impl RequestFields {
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        appliance: Appliance,
        issue: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            appliance: appliance.label().to_string(),
            issue: issue.into(),
        }
    }

    /// Lowercase hex SHA-256 over the four fields, each prefixed with its
    /// byte length as a little-endian `u64`.
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        for field in [&self.name, &self.contact, &self.appliance, &self.issue] {
            hasher.update((field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }

        let digest = hasher.finalize();
        let mut out = String::with_capacity(digest.len() * 2);
        for byte in digest {
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}

/// A stored service request as returned by `GET /requests` and echoed by
/// `POST /requests`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: ServiceRequestId,
    #[serde(flatten)]
    pub fields: RequestFields,
    pub created_at: DateTime<Utc>,
    pub hash: String,
}

impl ServiceRequest {
    pub fn new(id: ServiceRequestId, fields: RequestFields, created_at: DateTime<Utc>) -> Self {
        let hash = fields.content_hash();
        Self {
            id,
            fields,
            created_at,
            hash,
        }
    }
}

pub fn requests_route() -> &'static str {
    "/requests"
}

pub fn health_route() -> &'static str {
    "/healthz"
}
