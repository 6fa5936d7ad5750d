use reqwest::StatusCode;
use std::fmt::{Debug, Formatter};

/// Every way a call issued by one of the clients can fail.
#[derive(thiserror::Error)]
pub enum ClientError {
    /// A status handler or an error decoder turned the response into a failure.
    #[error("{0}")]
    Remote(String),

    /// Non-2xx response that no handler claimed.
    #[error("Unexpected response status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("TimeOut")]
    Timeout,

    #[error("Failed to parse url: {0}")]
    InvalidUrl(String),

    #[error("Invalid default header {0}.")]
    InvalidHeader(String),

    #[error("Failed to send request.")]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl Debug for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}

impl ClientError {
    /// Status of the response that caused the failure, when there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::UnexpectedStatus { status, .. } => Some(*status),
            ClientError::Request(e) => e.status(),
            _ => None,
        }
    }
}
