use chrono::NaiveDate;
use uuid::Uuid;

/// The four record kinds this module manages. Used in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Tenant,
    Lease,
    Payment,
    MaintenanceRequest,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::Lease => "lease",
            Self::Payment => "payment",
            Self::MaintenanceRequest => "maintenance_request",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- tenants ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantStatus {
    Active,
    Inactive,
    Pending,
}

impl TenantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }
}

/// Nested contact record; all three fields are required on create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// Pure tenant model for inter-module communication (no serde).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub student_id: String,
    pub university: String,
    pub emergency_contact: EmergencyContact,
    pub move_in_date: NaiveDate,
    pub status: TenantStatus,
    /// Opaque storage reference; never set by this module's mutations.
    pub profile_image: Option<Uuid>,
}

/// Data for creating a new tenant. Status is server-assigned (Pending).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTenant {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub student_id: String,
    pub university: String,
    pub emergency_contact: EmergencyContact,
    pub move_in_date: NaiveDate,
}

/// Partial update for a tenant; `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TenantPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub student_id: Option<String>,
    pub university: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
    pub move_in_date: Option<NaiveDate>,
    pub status: Option<TenantStatus>,
}

// --- leases ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaseStatus {
    Active,
    Expired,
    Terminated,
}

impl LeaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Terminated => "terminated",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lease {
    pub id: Uuid,
    /// Weak reference: the tenant may have been deleted since.
    pub tenant_id: Uuid,
    pub property_address: String,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_rent: f64,
    pub security_deposit: f64,
    pub status: LeaseStatus,
    pub lease_document: Option<Uuid>,
}

/// Data for creating a new lease. Status is server-assigned (Active).
#[derive(Debug, Clone, PartialEq)]
pub struct NewLease {
    pub tenant_id: Uuid,
    pub property_address: String,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_rent: f64,
    pub security_deposit: f64,
}

/// Partial update for a lease. The tenant reference is immutable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeasePatch {
    pub property_address: Option<String>,
    pub room_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub monthly_rent: Option<f64>,
    pub security_deposit: Option<f64>,
    pub status: Option<LeaseStatus>,
}

// --- payments ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Overdue,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKind {
    Rent,
    Deposit,
    Fee,
}

impl PaymentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rent => "rent",
            Self::Deposit => "deposit",
            Self::Fee => "fee",
        }
    }
}

/// paid_date / payment_method / transaction_id are stamped together by
/// `mark_paid`, never individually.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub lease_id: Uuid,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub status: PaymentStatus,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub kind: PaymentKind,
}

/// Data for creating a new payment. Status is server-assigned (Pending).
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub tenant_id: Uuid,
    pub lease_id: Uuid,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub kind: PaymentKind,
}

/// Partial update for a payment; only `mark_paid` builds one today.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaymentPatch {
    pub status: Option<PaymentStatus>,
    pub paid_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
}

// --- maintenance requests ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceCategory {
    Plumbing,
    Electrical,
    Heating,
    Appliances,
    Other,
}

impl MaintenanceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plumbing => "plumbing",
            Self::Electrical => "electrical",
            Self::Heating => "heating",
            Self::Appliances => "appliances",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenancePriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl MaintenancePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceRequest {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: MaintenanceCategory,
    pub priority: MaintenancePriority,
    pub status: MaintenanceStatus,
    /// Stamped with the server date at creation.
    pub submitted_date: NaiveDate,
    /// Stamped on transition to Completed; never cleared afterwards.
    pub completed_date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
    pub images: Vec<Uuid>,
}

/// Data for submitting a request. Status is server-assigned (Open).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMaintenanceRequest {
    pub tenant_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: MaintenanceCategory,
    pub priority: MaintenancePriority,
}

/// Partial update for a request; built by the status mutator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MaintenanceRequestPatch {
    pub status: Option<MaintenanceStatus>,
    pub assigned_to: Option<String>,
    pub completed_date: Option<NaiveDate>,
}

// --- enriched views ---
//
// Listing calls resolve foreign ids fresh against the store; a dangling
// reference degrades to `None` rather than failing the listing.

#[derive(Debug, Clone, PartialEq)]
pub struct LeaseWithTenant {
    pub lease: Lease,
    pub tenant: Option<Tenant>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentWithDetails {
    pub payment: Payment,
    pub tenant: Option<Tenant>,
    pub lease: Option<Lease>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestWithTenant {
    pub request: MaintenanceRequest,
    pub tenant: Option<Tenant>,
}

// --- aggregates ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TenantStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub inactive: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeaseStats {
    pub total: usize,
    pub active: usize,
    pub expired: usize,
    pub terminated: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaymentStats {
    pub total_payments: usize,
    pub paid: usize,
    pub pending: usize,
    pub overdue: usize,
    /// Sum of amounts over Paid payments.
    pub total_revenue: f64,
    /// Sum of amounts over Pending payments.
    pub pending_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaintenanceStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Urgent-priority requests that are not yet Completed.
    pub urgent: usize,
}
