use thiserror::Error;
use uuid::Uuid;

use crate::contract::model::EntityKind;

/// Domain-specific errors using thiserror.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("unauthenticated caller")]
    Unauthenticated,

    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: Uuid },

    #[error("validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated
    }

    pub fn not_found(entity: EntityKind, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
