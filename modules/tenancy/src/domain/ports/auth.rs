use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Input port for caller identity.
///
/// The service calls this once per operation, before any store access, and
/// treats the returned id as opaque: presence is the whole authorization
/// model here.
#[async_trait]
pub trait AuthPort: Send + Sync {
    async fn current_user_id(&self) -> Result<Uuid, DomainError>;
}
