use chrono::NaiveDate;
use uuid::Uuid;

use tenancy::contract::{error::TenancyError, model::*};
use tenancy::domain::error::DomainError;
// Note: These internal module imports are only for testing
// External consumers should only use the `contract` module

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn test_contract_models() {
    let tenant = Tenant {
        id: Uuid::new_v4(),
        name: "Ada Lovelace".to_string(),
        email: "ada@uni.edu".to_string(),
        phone: "555-0100".to_string(),
        student_id: "S-100".to_string(),
        university: "State".to_string(),
        emergency_contact: EmergencyContact {
            name: "Grace".to_string(),
            phone: "555-0101".to_string(),
            relationship: "sister".to_string(),
        },
        move_in_date: date("2024-09-01"),
        status: TenantStatus::Pending,
        profile_image: None,
    };
    assert_eq!(tenant.email, "ada@uni.edu");
    assert_eq!(tenant.status, TenantStatus::Pending);

    let patch = TenantPatch {
        status: Some(TenantStatus::Active),
        ..TenantPatch::default()
    };
    assert_eq!(patch.status, Some(TenantStatus::Active));
    assert_eq!(patch.name, None);

    let lease_patch = LeasePatch::default();
    assert_eq!(lease_patch, LeasePatch::default());
}

#[test]
fn test_status_index_keys() {
    assert_eq!(TenantStatus::Active.as_str(), "active");
    assert_eq!(TenantStatus::Inactive.as_str(), "inactive");
    assert_eq!(LeaseStatus::Terminated.as_str(), "terminated");
    assert_eq!(PaymentStatus::Overdue.as_str(), "overdue");
    assert_eq!(PaymentKind::Deposit.as_str(), "deposit");
    assert_eq!(MaintenanceStatus::InProgress.as_str(), "in_progress");
    assert_eq!(MaintenancePriority::Urgent.as_str(), "urgent");
    assert_eq!(MaintenanceCategory::Appliances.as_str(), "appliances");
    assert_eq!(EntityKind::MaintenanceRequest.to_string(), "maintenance_request");
}

#[test]
fn test_contract_errors() {
    let id = Uuid::new_v4();
    let error = TenancyError::not_found(EntityKind::Lease, id);
    match error {
        TenancyError::NotFound { entity, id: got } => {
            assert_eq!(entity, EntityKind::Lease);
            assert_eq!(got, id);
        }
        _ => panic!("Expected NotFound error"),
    }

    let error = TenancyError::validation("amount", "must be non-negative");
    match error {
        TenancyError::Validation { field, message } => {
            assert_eq!(field, "amount");
            assert_eq!(message, "must be non-negative");
        }
        _ => panic!("Expected Validation error"),
    }

    match TenancyError::unauthenticated() {
        TenancyError::Unauthenticated => {}
        _ => panic!("Expected Unauthenticated error"),
    }

    match TenancyError::internal() {
        TenancyError::Internal => {}
        _ => panic!("Expected Internal error"),
    }
}

#[test]
fn test_domain_error_mapping() {
    let id = Uuid::new_v4();

    let mapped: TenancyError = DomainError::not_found(EntityKind::Payment, id).into();
    assert!(matches!(
        mapped,
        TenancyError::NotFound {
            entity: EntityKind::Payment,
            ..
        }
    ));

    let mapped: TenancyError = DomainError::unauthenticated().into();
    assert!(matches!(mapped, TenancyError::Unauthenticated));

    let mapped: TenancyError = DomainError::validation("email", "invalid email format").into();
    match mapped {
        TenancyError::Validation { field, .. } => assert_eq!(field, "email"),
        _ => panic!("Expected Validation error"),
    }

    // Store-level failures are not leaked beyond the module boundary.
    let mapped: TenancyError = DomainError::database("connection reset").into();
    assert!(matches!(mapped, TenancyError::Internal));
}
