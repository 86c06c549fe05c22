//! Domain service with business rules for tenancy management.
//!
//! Depends only on ports (store tables, auth, event publisher), not on
//! infra types. Every entry point authenticates first and fails closed;
//! every mutation is a single store call, so there are no partial writes.

mod leases;
mod maintenance;
mod payments;
mod tenants;

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use docstore::StoreError;
use uuid::Uuid;

use crate::contract::model::EntityKind;
use crate::domain::error::DomainError;
use crate::domain::events::TenancyEvent;
use crate::domain::ports::{AuthPort, EventPublisher};
use crate::domain::repo::TenancyStores;

/// Configuration for the domain service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_name_length: usize,
    pub max_title_length: usize,
    pub max_description_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_name_length: 100,
            max_title_length: 120,
            max_description_length: 4000,
        }
    }
}

#[derive(Clone)]
pub struct Service {
    stores: TenancyStores,
    auth: Arc<dyn AuthPort>,
    events: Arc<dyn EventPublisher<TenancyEvent>>,
    config: ServiceConfig,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(
        stores: TenancyStores,
        auth: Arc<dyn AuthPort>,
        events: Arc<dyn EventPublisher<TenancyEvent>>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            stores,
            auth,
            events,
            config,
        }
    }

    pub(crate) fn stores(&self) -> &TenancyStores {
        &self.stores
    }

    pub(crate) fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub(crate) fn publish(&self, event: TenancyEvent) {
        self.events.publish(&event);
    }

    /// Resolve the caller identity; runs before any store access.
    pub(crate) async fn authenticate(&self) -> Result<Uuid, DomainError> {
        self.auth.current_user_id().await
    }
}

/// Today's calendar date by the server clock, used for stamped fields.
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Map a store failure into the domain, attributing NotFound to `entity`.
pub(crate) fn store_err(entity: EntityKind) -> impl FnOnce(StoreError) -> DomainError {
    move |e| match e {
        StoreError::NotFound { id } => DomainError::not_found(entity, id),
        other => DomainError::database(other.to_string()),
    }
}
