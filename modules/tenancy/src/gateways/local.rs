use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::TenancyApi,
    error::TenancyError,
    model::{
        Lease, LeasePatch, LeaseStats, LeaseWithTenant, MaintenanceRequest, MaintenanceStats,
        MaintenanceStatus, NewLease, NewMaintenanceRequest, NewPayment, NewTenant, Payment,
        PaymentStats, PaymentWithDetails, RequestWithTenant, Tenant, TenantPatch, TenantStats,
    },
};
use crate::domain::service::Service;

/// Local implementation of the TenancyApi trait that delegates to the
/// domain service.
pub struct TenancyLocalClient {
    service: Arc<Service>,
}

impl TenancyLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl TenancyApi for TenancyLocalClient {
    async fn list_tenants(&self) -> Result<Vec<Tenant>, TenancyError> {
        self.service.list_tenants().await.map_err(Into::into)
    }

    async fn get_tenant(&self, id: Uuid) -> Result<Tenant, TenancyError> {
        self.service.get_tenant(id).await.map_err(Into::into)
    }

    async fn create_tenant(&self, new_tenant: NewTenant) -> Result<Tenant, TenancyError> {
        self.service
            .create_tenant(new_tenant)
            .await
            .map_err(Into::into)
    }

    async fn update_tenant(&self, id: Uuid, patch: TenantPatch) -> Result<Tenant, TenancyError> {
        self.service
            .update_tenant(id, patch)
            .await
            .map_err(Into::into)
    }

    async fn delete_tenant(&self, id: Uuid) -> Result<(), TenancyError> {
        self.service.delete_tenant(id).await.map_err(Into::into)
    }

    async fn tenant_stats(&self) -> Result<TenantStats, TenancyError> {
        self.service.tenant_stats().await.map_err(Into::into)
    }

    async fn list_leases(&self) -> Result<Vec<LeaseWithTenant>, TenancyError> {
        self.service.list_leases().await.map_err(Into::into)
    }

    async fn leases_by_tenant(&self, tenant_id: Uuid) -> Result<Vec<Lease>, TenancyError> {
        self.service
            .leases_by_tenant(tenant_id)
            .await
            .map_err(Into::into)
    }

    async fn create_lease(&self, new_lease: NewLease) -> Result<Lease, TenancyError> {
        self.service
            .create_lease(new_lease)
            .await
            .map_err(Into::into)
    }

    async fn update_lease(&self, id: Uuid, patch: LeasePatch) -> Result<Lease, TenancyError> {
        self.service
            .update_lease(id, patch)
            .await
            .map_err(Into::into)
    }

    async fn lease_stats(&self) -> Result<LeaseStats, TenancyError> {
        self.service.lease_stats().await.map_err(Into::into)
    }

    async fn list_payments(&self) -> Result<Vec<PaymentWithDetails>, TenancyError> {
        self.service.list_payments().await.map_err(Into::into)
    }

    async fn payments_by_tenant(&self, tenant_id: Uuid) -> Result<Vec<Payment>, TenancyError> {
        self.service
            .payments_by_tenant(tenant_id)
            .await
            .map_err(Into::into)
    }

    async fn create_payment(&self, new_payment: NewPayment) -> Result<Payment, TenancyError> {
        self.service
            .create_payment(new_payment)
            .await
            .map_err(Into::into)
    }

    async fn mark_paid(
        &self,
        id: Uuid,
        payment_method: String,
        transaction_id: String,
    ) -> Result<Payment, TenancyError> {
        self.service
            .mark_paid(id, payment_method, transaction_id)
            .await
            .map_err(Into::into)
    }

    async fn payment_stats(&self) -> Result<PaymentStats, TenancyError> {
        self.service.payment_stats().await.map_err(Into::into)
    }

    async fn list_requests(&self) -> Result<Vec<RequestWithTenant>, TenancyError> {
        self.service.list_requests().await.map_err(Into::into)
    }

    async fn requests_by_tenant(
        &self,
        tenant_id: Uuid,
    ) -> Result<Vec<MaintenanceRequest>, TenancyError> {
        self.service
            .requests_by_tenant(tenant_id)
            .await
            .map_err(Into::into)
    }

    async fn create_request(
        &self,
        new_request: NewMaintenanceRequest,
    ) -> Result<MaintenanceRequest, TenancyError> {
        self.service
            .create_request(new_request)
            .await
            .map_err(Into::into)
    }

    async fn update_request_status(
        &self,
        id: Uuid,
        status: MaintenanceStatus,
        assigned_to: Option<String>,
    ) -> Result<MaintenanceRequest, TenancyError> {
        self.service
            .update_request_status(id, status, assigned_to)
            .await
            .map_err(Into::into)
    }

    async fn maintenance_stats(&self) -> Result<MaintenanceStats, TenancyError> {
        self.service.maintenance_stats().await.map_err(Into::into)
    }
}
