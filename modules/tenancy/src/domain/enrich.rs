//! Relational join resolution over weak foreign references.
//!
//! Records hold plain ids; resolution happens fresh on every listing call.
//! A deleted or never-existing reference degrades to `None`, never to an
//! error, so listings stay readable after a tenant is hard-deleted.

use docstore::Table;
use uuid::Uuid;

use crate::contract::model::{Lease, Tenant};
use crate::domain::error::DomainError;

pub(crate) async fn tenant_ref(
    tenants: &dyn Table<Tenant>,
    id: Uuid,
) -> Result<Option<Tenant>, DomainError> {
    tenants
        .get(id)
        .await
        .map_err(|e| DomainError::database(e.to_string()))
}

pub(crate) async fn lease_ref(
    leases: &dyn Table<Lease>,
    id: Uuid,
) -> Result<Option<Lease>, DomainError> {
    leases
        .get(id)
        .await
        .map_err(|e| DomainError::database(e.to_string()))
}
