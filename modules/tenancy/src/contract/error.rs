use thiserror::Error;
use uuid::Uuid;

use crate::contract::model::EntityKind;

/// Errors that are safe to expose to other modules.
#[derive(Error, Debug, Clone)]
pub enum TenancyError {
    #[error("unauthenticated")]
    Unauthenticated,

    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: Uuid },

    #[error("validation error: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("internal error")]
    Internal,
}

impl TenancyError {
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

    pub fn internal() -> Self {
        Self::Internal
    }
}

impl From<crate::domain::error::DomainError> for TenancyError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            Unauthenticated => Self::unauthenticated(),
            NotFound { entity, id } => Self::not_found(entity, id),
            Validation { field, message } => Self::Validation { field, message },
            Database { .. } => Self::internal(),
        }
    }
}
