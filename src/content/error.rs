//! Content gateway errors

use std::sync::Arc;
use thiserror::Error;

/// Maximum length of an upstream error body kept in the error message
const MAX_BODY_LEN: usize = 500;

/// Failure taxonomy for content store queries
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("content store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("query rejected by the content store: {0}")]
    Query(String),

    #[error("failed to decode content: {0}")]
    Decode(String),

    /// The same failure observed by every caller of a coalesced fetch
    #[error("{0}")]
    Shared(Arc<GatewayError>),
}

impl GatewayError {
    /// Build an error from a non-success HTTP status and its body
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            body: truncate_body(body),
        }
    }
}

impl From<Arc<GatewayError>> for GatewayError {
    fn from(err: Arc<GatewayError>) -> Self {
        Self::Shared(err)
    }
}

fn truncate_body(body: &str) -> String {
    let body = body.trim();
    if body.chars().count() <= MAX_BODY_LEN {
        return body.to_string();
    }
    let mut truncated: String = body.chars().take(MAX_BODY_LEN).collect();
    truncated.push('…');
    truncated
}
