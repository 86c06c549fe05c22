use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    error::TenancyError,
    model::{
        Lease, LeasePatch, LeaseStats, LeaseWithTenant, MaintenanceRequest,
        MaintenanceStats, MaintenanceStatus, NewLease,
        NewMaintenanceRequest, NewPayment, NewTenant, Payment, PaymentStats, PaymentWithDetails,
        RequestWithTenant, Tenant, TenantPatch, TenantStats,
    },
};

/// Public API trait for the tenancy module that other modules can use.
///
/// Every call authenticates before touching the store and fails closed with
/// [`TenancyError::Unauthenticated`] when no caller identity resolves.
#[async_trait]
pub trait TenancyApi: Send + Sync {
    // --- tenants ---

    async fn list_tenants(&self) -> Result<Vec<Tenant>, TenancyError>;

    async fn get_tenant(&self, id: Uuid) -> Result<Tenant, TenancyError>;

    /// Create a tenant with server-assigned Pending status.
    async fn create_tenant(&self, new_tenant: NewTenant) -> Result<Tenant, TenancyError>;

    /// Apply a partial update; absent fields are left unchanged.
    async fn update_tenant(&self, id: Uuid, patch: TenantPatch) -> Result<Tenant, TenancyError>;

    /// Hard delete, no cascade: leases, payments, and requests that reference
    /// the tenant remain readable and resolve to an absent tenant on join.
    async fn delete_tenant(&self, id: Uuid) -> Result<(), TenancyError>;

    async fn tenant_stats(&self) -> Result<TenantStats, TenancyError>;

    // --- leases ---

    /// All leases, each enriched with its tenant (absent when dangling).
    async fn list_leases(&self) -> Result<Vec<LeaseWithTenant>, TenancyError>;

    async fn leases_by_tenant(&self, tenant_id: Uuid) -> Result<Vec<Lease>, TenancyError>;

    /// Create a lease with server-assigned Active status.
    async fn create_lease(&self, new_lease: NewLease) -> Result<Lease, TenancyError>;

    async fn update_lease(&self, id: Uuid, patch: LeasePatch) -> Result<Lease, TenancyError>;

    async fn lease_stats(&self) -> Result<LeaseStats, TenancyError>;

    // --- payments ---

    /// All payments, each enriched with its tenant and lease.
    async fn list_payments(&self) -> Result<Vec<PaymentWithDetails>, TenancyError>;

    async fn payments_by_tenant(&self, tenant_id: Uuid) -> Result<Vec<Payment>, TenancyError>;

    /// Create a payment with server-assigned Pending status.
    async fn create_payment(&self, new_payment: NewPayment) -> Result<Payment, TenancyError>;

    /// Transition to Paid, stamping paid date, method, and transaction id in
    /// one atomic patch. Re-marking overwrites all three.
    async fn mark_paid(
        &self,
        id: Uuid,
        payment_method: String,
        transaction_id: String,
    ) -> Result<Payment, TenancyError>;

    async fn payment_stats(&self) -> Result<PaymentStats, TenancyError>;

    // --- maintenance requests ---

    /// All requests, each enriched with its tenant.
    async fn list_requests(&self) -> Result<Vec<RequestWithTenant>, TenancyError>;

    async fn requests_by_tenant(
        &self,
        tenant_id: Uuid,
    ) -> Result<Vec<MaintenanceRequest>, TenancyError>;

    /// Submit a request with server-assigned Open status and submitted date.
    async fn create_request(
        &self,
        new_request: NewMaintenanceRequest,
    ) -> Result<MaintenanceRequest, TenancyError>;

    /// Status mutator: Completed stamps the completion date, any other
    /// target leaves it untouched; `assigned_to` is applied only when given.
    async fn update_request_status(
        &self,
        id: Uuid,
        status: MaintenanceStatus,
        assigned_to: Option<String>,
    ) -> Result<MaintenanceRequest, TenancyError>;

    async fn maintenance_stats(&self) -> Result<MaintenanceStats, TenancyError>;
}
