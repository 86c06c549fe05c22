use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::{store_err, Service};
use crate::contract::model::{
    EntityKind, NewTenant, Tenant, TenantPatch, TenantStats, TenantStatus,
};
use crate::domain::error::DomainError;
use crate::domain::events::TenancyEvent;
use crate::domain::{stats, validate};

impl Service {
    #[instrument(name = "tenancy.service.list_tenants", skip(self))]
    pub async fn list_tenants(&self) -> Result<Vec<Tenant>, DomainError> {
        self.authenticate().await?;
        let tenants = self
            .stores()
            .tenants
            .query_all()
            .await
            .map_err(store_err(EntityKind::Tenant))?;
        debug!("Listed {} tenants", tenants.len());
        Ok(tenants)
    }

    #[instrument(name = "tenancy.service.get_tenant", skip(self), fields(tenant_id = %id))]
    pub async fn get_tenant(&self, id: Uuid) -> Result<Tenant, DomainError> {
        self.authenticate().await?;
        self.stores()
            .tenants
            .get(id)
            .await
            .map_err(store_err(EntityKind::Tenant))?
            .ok_or_else(|| DomainError::not_found(EntityKind::Tenant, id))
    }

    #[instrument(
        name = "tenancy.service.create_tenant",
        skip(self),
        fields(email = %new_tenant.email)
    )]
    pub async fn create_tenant(&self, new_tenant: NewTenant) -> Result<Tenant, DomainError> {
        self.authenticate().await?;
        validate::new_tenant(self.config(), &new_tenant)?;

        let tenant = Tenant {
            id: Uuid::new_v4(),
            name: new_tenant.name,
            email: new_tenant.email,
            phone: new_tenant.phone,
            student_id: new_tenant.student_id,
            university: new_tenant.university,
            emergency_contact: new_tenant.emergency_contact,
            move_in_date: new_tenant.move_in_date,
            status: TenantStatus::Pending,
            profile_image: None,
        };

        self.stores()
            .tenants
            .insert(tenant.clone())
            .await
            .map_err(store_err(EntityKind::Tenant))?;

        self.publish(TenancyEvent::TenantCreated {
            id: tenant.id,
            at: Utc::now(),
        });
        info!("Created tenant {}", tenant.id);
        Ok(tenant)
    }

    #[instrument(name = "tenancy.service.update_tenant", skip(self, patch), fields(tenant_id = %id))]
    pub async fn update_tenant(
        &self,
        id: Uuid,
        patch: TenantPatch,
    ) -> Result<Tenant, DomainError> {
        self.authenticate().await?;
        validate::tenant_patch(self.config(), &patch)?;

        let tenant = self
            .stores()
            .tenants
            .patch(id, patch)
            .await
            .map_err(store_err(EntityKind::Tenant))?;

        self.publish(TenancyEvent::TenantUpdated { id, at: Utc::now() });
        info!("Updated tenant {id}");
        Ok(tenant)
    }

    /// Hard delete. Dependent leases, payments, and requests are left in
    /// place; their tenant reference resolves to absent from now on.
    #[instrument(name = "tenancy.service.delete_tenant", skip(self), fields(tenant_id = %id))]
    pub async fn delete_tenant(&self, id: Uuid) -> Result<(), DomainError> {
        self.authenticate().await?;
        self.stores()
            .tenants
            .delete(id)
            .await
            .map_err(store_err(EntityKind::Tenant))?;

        self.publish(TenancyEvent::TenantDeleted { id, at: Utc::now() });
        info!("Deleted tenant {id}");
        Ok(())
    }

    #[instrument(name = "tenancy.service.tenant_stats", skip(self))]
    pub async fn tenant_stats(&self) -> Result<TenantStats, DomainError> {
        self.authenticate().await?;
        let tenants = self
            .stores()
            .tenants
            .query_all()
            .await
            .map_err(store_err(EntityKind::Tenant))?;
        Ok(stats::tenant_stats(&tenants))
    }
}
