use serde::Deserialize;
use shared::{domain::ServiceRequestId, protocol::RequestFields};

/// A request as seen by the client. Only the four fields are required;
/// the service's `id` and `hash` are kept when it sends them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestRecord {
    #[serde(default)]
    pub id: Option<ServiceRequestId>,
    #[serde(flatten)]
    pub fields: RequestFields,
    #[serde(default)]
    pub hash: Option<String>,
}

impl From<RequestFields> for RequestRecord {
    fn from(fields: RequestFields) -> Self {
        Self {
            id: None,
            fields,
            hash: None,
        }
    }
}
