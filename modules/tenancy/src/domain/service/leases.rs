use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::{store_err, Service};
use crate::contract::model::{
    EntityKind, Lease, LeasePatch, LeaseStats, LeaseStatus, LeaseWithTenant, NewLease,
};
use crate::domain::error::DomainError;
use crate::domain::events::TenancyEvent;
use crate::domain::{enrich, stats, validate};
use crate::infra::storage::index;

impl Service {
    /// All leases, each joined with its tenant. A dangling tenant reference
    /// yields `tenant: None`, not an error.
    #[instrument(name = "tenancy.service.list_leases", skip(self))]
    pub async fn list_leases(&self) -> Result<Vec<LeaseWithTenant>, DomainError> {
        self.authenticate().await?;
        let leases = self
            .stores()
            .leases
            .query_all()
            .await
            .map_err(store_err(EntityKind::Lease))?;

        let mut enriched = Vec::with_capacity(leases.len());
        for lease in leases {
            let tenant = enrich::tenant_ref(self.stores().tenants.as_ref(), lease.tenant_id).await?;
            enriched.push(LeaseWithTenant { lease, tenant });
        }
        debug!("Listed {} leases", enriched.len());
        Ok(enriched)
    }

    #[instrument(name = "tenancy.service.leases_by_tenant", skip(self), fields(tenant_id = %tenant_id))]
    pub async fn leases_by_tenant(&self, tenant_id: Uuid) -> Result<Vec<Lease>, DomainError> {
        self.authenticate().await?;
        self.stores()
            .leases
            .query_by_index(index::BY_TENANT, &tenant_id.to_string())
            .await
            .map_err(store_err(EntityKind::Lease))
    }

    #[instrument(
        name = "tenancy.service.create_lease",
        skip(self),
        fields(tenant_id = %new_lease.tenant_id)
    )]
    pub async fn create_lease(&self, new_lease: NewLease) -> Result<Lease, DomainError> {
        self.authenticate().await?;
        validate::new_lease(&new_lease)?;

        let lease = Lease {
            id: Uuid::new_v4(),
            tenant_id: new_lease.tenant_id,
            property_address: new_lease.property_address,
            room_number: new_lease.room_number,
            start_date: new_lease.start_date,
            end_date: new_lease.end_date,
            monthly_rent: new_lease.monthly_rent,
            security_deposit: new_lease.security_deposit,
            status: LeaseStatus::Active,
            lease_document: None,
        };

        self.stores()
            .leases
            .insert(lease.clone())
            .await
            .map_err(store_err(EntityKind::Lease))?;

        self.publish(TenancyEvent::LeaseCreated {
            id: lease.id,
            at: Utc::now(),
        });
        info!("Created lease {}", lease.id);
        Ok(lease)
    }

    /// Partial update; any status value may be set from any other (no
    /// transition policy is enforced here).
    #[instrument(name = "tenancy.service.update_lease", skip(self, patch), fields(lease_id = %id))]
    pub async fn update_lease(&self, id: Uuid, patch: LeasePatch) -> Result<Lease, DomainError> {
        self.authenticate().await?;
        validate::lease_patch(&patch)?;

        let lease = self
            .stores()
            .leases
            .patch(id, patch)
            .await
            .map_err(store_err(EntityKind::Lease))?;

        self.publish(TenancyEvent::LeaseUpdated { id, at: Utc::now() });
        info!("Updated lease {id}");
        Ok(lease)
    }

    #[instrument(name = "tenancy.service.lease_stats", skip(self))]
    pub async fn lease_stats(&self) -> Result<LeaseStats, DomainError> {
        self.authenticate().await?;
        let leases = self
            .stores()
            .leases
            .query_all()
            .await
            .map_err(store_err(EntityKind::Lease))?;
        Ok(stats::lease_stats(&leases))
    }
}
