use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::{store_err, today, Service};
use crate::contract::model::{
    EntityKind, MaintenanceRequest, MaintenanceRequestPatch, MaintenanceStats, MaintenanceStatus,
    NewMaintenanceRequest, RequestWithTenant,
};
use crate::domain::error::DomainError;
use crate::domain::events::TenancyEvent;
use crate::domain::{enrich, stats, validate};
use crate::infra::storage::index;

impl Service {
    /// All requests, each joined with its tenant (absent when dangling).
    #[instrument(name = "tenancy.service.list_requests", skip(self))]
    pub async fn list_requests(&self) -> Result<Vec<RequestWithTenant>, DomainError> {
        self.authenticate().await?;
        let requests = self
            .stores()
            .maintenance
            .query_all()
            .await
            .map_err(store_err(EntityKind::MaintenanceRequest))?;

        let mut enriched = Vec::with_capacity(requests.len());
        for request in requests {
            let tenant =
                enrich::tenant_ref(self.stores().tenants.as_ref(), request.tenant_id).await?;
            enriched.push(RequestWithTenant { request, tenant });
        }
        debug!("Listed {} maintenance requests", enriched.len());
        Ok(enriched)
    }

    #[instrument(name = "tenancy.service.requests_by_tenant", skip(self), fields(tenant_id = %tenant_id))]
    pub async fn requests_by_tenant(
        &self,
        tenant_id: Uuid,
    ) -> Result<Vec<MaintenanceRequest>, DomainError> {
        self.authenticate().await?;
        self.stores()
            .maintenance
            .query_by_index(index::BY_TENANT, &tenant_id.to_string())
            .await
            .map_err(store_err(EntityKind::MaintenanceRequest))
    }

    #[instrument(
        name = "tenancy.service.create_request",
        skip(self, new_request),
        fields(tenant_id = %new_request.tenant_id)
    )]
    pub async fn create_request(
        &self,
        new_request: NewMaintenanceRequest,
    ) -> Result<MaintenanceRequest, DomainError> {
        self.authenticate().await?;
        validate::new_request(self.config(), &new_request)?;

        let request = MaintenanceRequest {
            id: Uuid::new_v4(),
            tenant_id: new_request.tenant_id,
            title: new_request.title,
            description: new_request.description,
            category: new_request.category,
            priority: new_request.priority,
            status: MaintenanceStatus::Open,
            submitted_date: today(),
            completed_date: None,
            assigned_to: None,
            images: Vec::new(),
        };

        self.stores()
            .maintenance
            .insert(request.clone())
            .await
            .map_err(store_err(EntityKind::MaintenanceRequest))?;

        self.publish(TenancyEvent::RequestCreated {
            id: request.id,
            at: Utc::now(),
        });
        info!("Created maintenance request {}", request.id);
        Ok(request)
    }

    /// Status mutator. Any target status is accepted from any state.
    ///
    /// Completed stamps the completion date with today's server date; every
    /// other target leaves a previously stamped date untouched. The assignee
    /// changes only when `assigned_to` is supplied.
    #[instrument(
        name = "tenancy.service.update_request_status",
        skip(self),
        fields(request_id = %id, status = status.as_str())
    )]
    pub async fn update_request_status(
        &self,
        id: Uuid,
        status: MaintenanceStatus,
        assigned_to: Option<String>,
    ) -> Result<MaintenanceRequest, DomainError> {
        self.authenticate().await?;

        let patch = MaintenanceRequestPatch {
            status: Some(status),
            assigned_to,
            completed_date: (status == MaintenanceStatus::Completed).then(today),
        };
        let request = self
            .stores()
            .maintenance
            .patch(id, patch)
            .await
            .map_err(store_err(EntityKind::MaintenanceRequest))?;

        self.publish(TenancyEvent::RequestStatusChanged {
            id,
            status,
            at: Utc::now(),
        });
        info!("Maintenance request {id} moved to {}", status.as_str());
        Ok(request)
    }

    #[instrument(name = "tenancy.service.maintenance_stats", skip(self))]
    pub async fn maintenance_stats(&self) -> Result<MaintenanceStats, DomainError> {
        self.authenticate().await?;
        let requests = self
            .stores()
            .maintenance
            .query_all()
            .await
            .map_err(store_err(EntityKind::MaintenanceRequest))?;
        Ok(stats::maintenance_stats(&requests))
    }
}
