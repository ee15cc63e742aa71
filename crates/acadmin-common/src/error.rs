use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Non-2xx answer from the records API, with whatever error body it sent.
    #[error("API error {status} {status_text}: {detail}")]
    Api {
        status: u16,
        status_text: String,
        detail: serde_json::Value,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AdminError {
    /// HTTP status of the upstream failure, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AdminError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
