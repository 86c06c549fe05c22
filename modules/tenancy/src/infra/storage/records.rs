//! `Document` implementations for the contract models.
//!
//! `apply_patch` merges only the fields a patch supplies; `index_entries`
//! is recomputed after every write so backends keep their indexes current.

use docstore::Document;
use uuid::Uuid;

use super::index;
use crate::contract::model::{
    Lease, LeasePatch, MaintenanceRequest, MaintenanceRequestPatch, Payment, PaymentPatch,
    Tenant, TenantPatch,
};

impl Document for Tenant {
    type Patch = TenantPatch;

    fn id(&self) -> Uuid {
        self.id
    }

    fn apply_patch(&mut self, patch: TenantPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(student_id) = patch.student_id {
            self.student_id = student_id;
        }
        if let Some(university) = patch.university {
            self.university = university;
        }
        if let Some(contact) = patch.emergency_contact {
            self.emergency_contact = contact;
        }
        if let Some(move_in_date) = patch.move_in_date {
            self.move_in_date = move_in_date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    fn index_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (index::BY_EMAIL, self.email.clone()),
            (index::BY_STUDENT_ID, self.student_id.clone()),
            (index::BY_STATUS, self.status.as_str().to_string()),
        ]
    }
}

impl Document for Lease {
    type Patch = LeasePatch;

    fn id(&self) -> Uuid {
        self.id
    }

    fn apply_patch(&mut self, patch: LeasePatch) {
        if let Some(address) = patch.property_address {
            self.property_address = address;
        }
        if let Some(room) = patch.room_number {
            self.room_number = room;
        }
        if let Some(start) = patch.start_date {
            self.start_date = start;
        }
        if let Some(end) = patch.end_date {
            self.end_date = end;
        }
        if let Some(rent) = patch.monthly_rent {
            self.monthly_rent = rent;
        }
        if let Some(deposit) = patch.security_deposit {
            self.security_deposit = deposit;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    fn index_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (index::BY_TENANT, self.tenant_id.to_string()),
            (index::BY_STATUS, self.status.as_str().to_string()),
            (index::BY_PROPERTY, self.property_address.clone()),
        ]
    }
}

impl Document for Payment {
    type Patch = PaymentPatch;

    fn id(&self) -> Uuid {
        self.id
    }

    fn apply_patch(&mut self, patch: PaymentPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(paid_date) = patch.paid_date {
            self.paid_date = Some(paid_date);
        }
        if let Some(method) = patch.payment_method {
            self.payment_method = Some(method);
        }
        if let Some(txn) = patch.transaction_id {
            self.transaction_id = Some(txn);
        }
    }

    fn index_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (index::BY_TENANT, self.tenant_id.to_string()),
            (index::BY_LEASE, self.lease_id.to_string()),
            (index::BY_STATUS, self.status.as_str().to_string()),
            (index::BY_DUE_DATE, self.due_date.to_string()),
        ]
    }
}

impl Document for MaintenanceRequest {
    type Patch = MaintenanceRequestPatch;

    fn id(&self) -> Uuid {
        self.id
    }

    fn apply_patch(&mut self, patch: MaintenanceRequestPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(assignee) = patch.assigned_to {
            self.assigned_to = Some(assignee);
        }
        // Only set on transition to Completed; never cleared here.
        if let Some(completed) = patch.completed_date {
            self.completed_date = Some(completed);
        }
    }

    fn index_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (index::BY_TENANT, self.tenant_id.to_string()),
            (index::BY_STATUS, self.status.as_str().to_string()),
            (index::BY_PRIORITY, self.priority.as_str().to_string()),
            (index::BY_CATEGORY, self.category.as_str().to_string()),
        ]
    }
}
