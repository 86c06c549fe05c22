use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by table backends.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("document not found: {id}")]
    NotFound { id: Uuid },

    #[error("unknown index: {index}")]
    UnknownIndex { index: String },

    #[error("backend error: {message}")]
    Backend { message: String },
}

impl StoreError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn unknown_index(index: impl Into<String>) -> Self {
        Self::UnknownIndex {
            index: index.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
