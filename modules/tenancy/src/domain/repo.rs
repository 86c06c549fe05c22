use std::sync::Arc;

use docstore::Table;

use crate::contract::model::{Lease, MaintenanceRequest, Payment, Tenant};

/// The four document tables the domain operates on.
///
/// Persistence ports for the service: object-safe [`Table`] handles so a
/// backend can be swapped without touching domain code. The store owns every
/// record; the service never caches entity state across calls.
#[derive(Clone)]
pub struct TenancyStores {
    pub tenants: Arc<dyn Table<Tenant>>,
    pub leases: Arc<dyn Table<Lease>>,
    pub payments: Arc<dyn Table<Payment>>,
    pub maintenance: Arc<dyn Table<MaintenanceRequest>>,
}
