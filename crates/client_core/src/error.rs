use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid api url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },
    #[error("{endpoint} answered with status {status}")]
    Status { endpoint: String, status: StatusCode },
    #[error("malformed payload from {endpoint}: {source}")]
    Malformed {
        endpoint: String,
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::InvalidUrl { .. } => None,
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Malformed { endpoint, .. } => Some(endpoint),
        }
    }
}
