use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::contract::model::MaintenanceStatus;
use crate::domain::ports::EventPublisher;

/// Transport-agnostic domain event. Published fire-and-forget after every
/// successful mutation; publishing cannot fail the mutation.
#[derive(Debug, Clone)]
pub enum TenancyEvent {
    TenantCreated { id: Uuid, at: DateTime<Utc> },
    TenantUpdated { id: Uuid, at: DateTime<Utc> },
    TenantDeleted { id: Uuid, at: DateTime<Utc> },
    LeaseCreated { id: Uuid, at: DateTime<Utc> },
    LeaseUpdated { id: Uuid, at: DateTime<Utc> },
    PaymentCreated { id: Uuid, at: DateTime<Utc> },
    PaymentMarkedPaid { id: Uuid, at: DateTime<Utc> },
    RequestCreated { id: Uuid, at: DateTime<Utc> },
    RequestStatusChanged {
        id: Uuid,
        status: MaintenanceStatus,
        at: DateTime<Utc>,
    },
}

/// Default publisher for embedders that do not consume events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEvents;

impl EventPublisher<TenancyEvent> for NoopEvents {
    fn publish(&self, _event: &TenancyEvent) {}
}
