//! Docstore bindings: document ids, index keys, and patch application for
//! each entity, plus an in-memory wiring of the four tables.

pub mod records;

use std::sync::Arc;

use docstore::memory::MemTable;

use crate::domain::repo::TenancyStores;

/// Index names, shared between document bindings and query sites.
pub mod index {
    pub const BY_TENANT: &str = "by_tenant";
    pub const BY_STATUS: &str = "by_status";
    pub const BY_LEASE: &str = "by_lease";
    pub const BY_DUE_DATE: &str = "by_due_date";
    pub const BY_PROPERTY: &str = "by_property";
    pub const BY_PRIORITY: &str = "by_priority";
    pub const BY_CATEGORY: &str = "by_category";
    pub const BY_EMAIL: &str = "by_email";
    pub const BY_STUDENT_ID: &str = "by_student_id";
}

/// Build the four tables on the in-memory backend, with the index sets each
/// entity declares. Used by tests and by embedders without a durable store.
pub fn memory_stores() -> TenancyStores {
    use index::*;

    TenancyStores {
        tenants: Arc::new(MemTable::new(&[BY_EMAIL, BY_STUDENT_ID, BY_STATUS])),
        leases: Arc::new(MemTable::new(&[BY_TENANT, BY_STATUS, BY_PROPERTY])),
        payments: Arc::new(MemTable::new(&[BY_TENANT, BY_LEASE, BY_STATUS, BY_DUE_DATE])),
        maintenance: Arc::new(MemTable::new(&[
            BY_TENANT,
            BY_STATUS,
            BY_PRIORITY,
            BY_CATEGORY,
        ])),
    }
}
