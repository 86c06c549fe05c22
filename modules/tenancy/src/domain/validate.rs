//! Per-entity write validation.
//!
//! Create paths check every required field; patch paths check only the
//! fields present in the patch. Rejection is total: a failed check means
//! nothing reaches the store. Errors name the offending field.
//!
//! Monetary amounts (rent, deposit, payment amount) must be non-negative.
//! Date ranges are deliberately not cross-checked (start/end inversion is
//! permitted); see DESIGN.md for the policy call.

use crate::contract::model::{
    EmergencyContact, LeasePatch, NewLease, NewMaintenanceRequest, NewPayment, NewTenant,
    TenantPatch,
};
use crate::domain::error::DomainError;
use crate::domain::service::ServiceConfig;

fn require(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn require_max_len(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.len() > max {
        return Err(DomainError::validation(
            field,
            format!("too long: {} characters (max: {})", value.len(), max),
        ));
    }
    Ok(())
}

fn require_email(field: &str, value: &str) -> Result<(), DomainError> {
    require(field, value)?;
    if !value.contains('@') || !value.contains('.') {
        return Err(DomainError::validation(field, "invalid email format"));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::validation(field, "must be non-negative"));
    }
    Ok(())
}

fn require_contact(contact: &EmergencyContact) -> Result<(), DomainError> {
    require("emergency_contact.name", &contact.name)?;
    require("emergency_contact.phone", &contact.phone)?;
    require("emergency_contact.relationship", &contact.relationship)
}

pub(crate) fn new_tenant(config: &ServiceConfig, t: &NewTenant) -> Result<(), DomainError> {
    require("name", &t.name)?;
    require_max_len("name", &t.name, config.max_name_length)?;
    require_email("email", &t.email)?;
    require("phone", &t.phone)?;
    require("student_id", &t.student_id)?;
    require("university", &t.university)?;
    require_contact(&t.emergency_contact)
}

pub(crate) fn tenant_patch(config: &ServiceConfig, p: &TenantPatch) -> Result<(), DomainError> {
    if let Some(ref name) = p.name {
        require("name", name)?;
        require_max_len("name", name, config.max_name_length)?;
    }
    if let Some(ref email) = p.email {
        require_email("email", email)?;
    }
    if let Some(ref phone) = p.phone {
        require("phone", phone)?;
    }
    if let Some(ref student_id) = p.student_id {
        require("student_id", student_id)?;
    }
    if let Some(ref university) = p.university {
        require("university", university)?;
    }
    if let Some(ref contact) = p.emergency_contact {
        require_contact(contact)?;
    }
    Ok(())
}

pub(crate) fn new_lease(l: &NewLease) -> Result<(), DomainError> {
    require("property_address", &l.property_address)?;
    require("room_number", &l.room_number)?;
    require_non_negative("monthly_rent", l.monthly_rent)?;
    require_non_negative("security_deposit", l.security_deposit)
}

pub(crate) fn lease_patch(p: &LeasePatch) -> Result<(), DomainError> {
    if let Some(ref address) = p.property_address {
        require("property_address", address)?;
    }
    if let Some(ref room) = p.room_number {
        require("room_number", room)?;
    }
    if let Some(rent) = p.monthly_rent {
        require_non_negative("monthly_rent", rent)?;
    }
    if let Some(deposit) = p.security_deposit {
        require_non_negative("security_deposit", deposit)?;
    }
    Ok(())
}

pub(crate) fn new_payment(p: &NewPayment) -> Result<(), DomainError> {
    require_non_negative("amount", p.amount)
}

pub(crate) fn new_request(
    config: &ServiceConfig,
    r: &NewMaintenanceRequest,
) -> Result<(), DomainError> {
    require("title", &r.title)?;
    require_max_len("title", &r.title, config.max_title_length)?;
    require("description", &r.description)?;
    require_max_len("description", &r.description, config.max_description_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn config() -> ServiceConfig {
        ServiceConfig::default()
    }

    fn valid_tenant() -> NewTenant {
        NewTenant {
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
            move_in_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
        }
    }

    #[test]
    fn accepts_a_complete_tenant() {
        assert!(new_tenant(&config(), &valid_tenant()).is_ok());
    }

    #[test]
    fn rejects_missing_required_field_by_name() {
        let mut t = valid_tenant();
        t.phone = String::new();
        let err = new_tenant(&config(), &t).unwrap_err();
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, "phone"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_incomplete_emergency_contact() {
        let mut t = valid_tenant();
        t.emergency_contact.relationship = "  ".to_string();
        let err = new_tenant(&config(), &t).unwrap_err();
        match err {
            DomainError::Validation { field, .. } => {
                assert_eq!(field, "emergency_contact.relationship");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_email() {
        let mut t = valid_tenant();
        t.email = "not-an-email".to_string();
        assert!(new_tenant(&config(), &t).is_err());
    }

    #[test]
    fn patch_checks_only_supplied_fields() {
        let p = TenantPatch {
            phone: Some("555-0199".to_string()),
            ..TenantPatch::default()
        };
        assert!(tenant_patch(&config(), &p).is_ok());

        let p = TenantPatch {
            email: Some("broken".to_string()),
            ..TenantPatch::default()
        };
        assert!(tenant_patch(&config(), &p).is_err());
    }

    #[test]
    fn rejects_negative_amounts() {
        let lease = NewLease {
            tenant_id: Uuid::new_v4(),
            property_address: "12 College Row".to_string(),
            room_number: "4B".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            monthly_rent: -1.0,
            security_deposit: 500.0,
        };
        let err = new_lease(&lease).unwrap_err();
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, "monthly_rent"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn permits_inverted_date_ranges() {
        let lease = NewLease {
            tenant_id: Uuid::new_v4(),
            property_address: "12 College Row".to_string(),
            room_number: "4B".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            monthly_rent: 1000.0,
            security_deposit: 500.0,
        };
        assert!(new_lease(&lease).is_ok());
    }
}
