//! Outcomes of backend calls, as consumed by the renderer.

use client_core::{ClientError, RequestRecord};

pub enum UiEvent {
    Submitted(Option<RequestRecord>),
    RequestsLoaded(Vec<RequestRecord>),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Server,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    SubmitRequest,
    ListRequests,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_client_error(context: UiErrorContext, err: &ClientError) -> Self {
        let category = match err {
            ClientError::Status { .. } => UiErrorCategory::Server,
            ClientError::InvalidUrl { .. }
            | ClientError::Setup(_)
            | ClientError::Transport { .. } => UiErrorCategory::Transport,
        };

        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
