//! Failure taxonomy for catalog calls.
//!
//! Two kinds only: the request never completed (`Transport`), or the catalog
//! answered with a non-success status (`RemoteStatus`). Both map to a single
//! display string at the controller boundary.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors returned by a [`super::CatalogClient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Connection failure, timeout, or an unreadable response body.
    #[error("catalog request failed: {message}")]
    Transport { message: String },

    /// The catalog responded with a non-2xx status code.
    #[error("catalog responded with HTTP {status}")]
    RemoteStatus { status: u16 },
}

impl CatalogError {
    pub fn transport(message: impl Into<String>) -> Self {
        CatalogError::Transport {
            message: message.into(),
        }
    }

    /// HTTP status code, if the catalog answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::RemoteStatus { status } => Some(*status),
            CatalogError::Transport { .. } => None,
        }
    }

    /// The string shown to the user for this failure.
    pub fn display_message(&self) -> String {
        match self {
            CatalogError::RemoteStatus { status } => format!("Failed: {status}"),
            CatalogError::Transport { message } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => CatalogError::RemoteStatus {
                status: status.as_u16(),
            },
            None => CatalogError::transport(err.to_string()),
        }
    }
}
