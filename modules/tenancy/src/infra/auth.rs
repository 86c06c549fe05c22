//! Fixed-identity auth adapter.
//!
//! For embedders that resolve identity upstream, and for tests. Real
//! deployments plug their own [`AuthPort`] implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::ports::AuthPort;

#[derive(Debug, Clone, Copy)]
pub struct StaticAuth {
    user_id: Option<Uuid>,
}

impl StaticAuth {
    /// Always authenticates as the given user.
    pub fn user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// Never authenticates; every call fails closed.
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }
}

#[async_trait]
impl AuthPort for StaticAuth {
    async fn current_user_id(&self) -> Result<Uuid, DomainError> {
        self.user_id.ok_or_else(DomainError::unauthenticated)
    }
}
