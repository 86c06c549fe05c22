//! Aggregation over the full current record set of one kind.
//!
//! Counts are accumulated by exhaustive match over the closed status enums,
//! one accumulator per variant, so adding a status variant is a compile
//! error here instead of a silently misattributed count. Inputs are
//! unordered; every result is order-independent.

use crate::contract::model::{
    Lease, LeaseStats, LeaseStatus, MaintenancePriority, MaintenanceRequest, MaintenanceStats,
    MaintenanceStatus, Payment, PaymentStats, PaymentStatus, Tenant, TenantStats, TenantStatus,
};

pub fn tenant_stats(tenants: &[Tenant]) -> TenantStats {
    let mut stats = TenantStats {
        total: tenants.len(),
        ..TenantStats::default()
    };
    for tenant in tenants {
        match tenant.status {
            TenantStatus::Active => stats.active += 1,
            TenantStatus::Pending => stats.pending += 1,
            TenantStatus::Inactive => stats.inactive += 1,
        }
    }
    stats
}

pub fn lease_stats(leases: &[Lease]) -> LeaseStats {
    let mut stats = LeaseStats {
        total: leases.len(),
        ..LeaseStats::default()
    };
    for lease in leases {
        match lease.status {
            LeaseStatus::Active => stats.active += 1,
            LeaseStatus::Expired => stats.expired += 1,
            LeaseStatus::Terminated => stats.terminated += 1,
        }
    }
    stats
}

pub fn payment_stats(payments: &[Payment]) -> PaymentStats {
    let mut stats = PaymentStats {
        total_payments: payments.len(),
        ..PaymentStats::default()
    };
    for payment in payments {
        match payment.status {
            PaymentStatus::Paid => {
                stats.paid += 1;
                stats.total_revenue += payment.amount;
            }
            PaymentStatus::Pending => {
                stats.pending += 1;
                stats.pending_amount += payment.amount;
            }
            PaymentStatus::Overdue => stats.overdue += 1,
        }
    }
    stats
}

pub fn maintenance_stats(requests: &[MaintenanceRequest]) -> MaintenanceStats {
    let mut stats = MaintenanceStats {
        total: requests.len(),
        ..MaintenanceStats::default()
    };
    for request in requests {
        match request.status {
            MaintenanceStatus::Open => stats.open += 1,
            MaintenanceStatus::InProgress => stats.in_progress += 1,
            MaintenanceStatus::Completed => stats.completed += 1,
            MaintenanceStatus::Cancelled => {}
        }
        // Urgent excludes anything already completed.
        if request.priority == MaintenancePriority::Urgent
            && request.status != MaintenanceStatus::Completed
        {
            stats.urgent += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::model::{EmergencyContact, MaintenanceCategory, PaymentKind};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn tenant(status: TenantStatus) -> Tenant {
        Tenant {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@uni.edu".to_string(),
            phone: "555-0100".to_string(),
            student_id: "S-1".to_string(),
            university: "State".to_string(),
            emergency_contact: EmergencyContact {
                name: "Grace".to_string(),
                phone: "555-0101".to_string(),
                relationship: "sister".to_string(),
            },
            move_in_date: date("2024-09-01"),
            status,
            profile_image: None,
        }
    }

    fn payment(status: PaymentStatus, amount: f64) -> Payment {
        Payment {
            id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            lease_id: Uuid::new_v4(),
            amount,
            due_date: date("2025-01-01"),
            paid_date: None,
            status,
            payment_method: None,
            transaction_id: None,
            kind: PaymentKind::Rent,
        }
    }

    fn request(priority: MaintenancePriority, status: MaintenanceStatus) -> MaintenanceRequest {
        MaintenanceRequest {
            id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            title: "Leaky tap".to_string(),
            description: "Drips all night".to_string(),
            category: MaintenanceCategory::Plumbing,
            priority,
            status,
            submitted_date: date("2025-02-01"),
            completed_date: None,
            assigned_to: None,
            images: Vec::new(),
        }
    }

    #[test]
    fn tenant_counts_cover_every_status() {
        let tenants = vec![
            tenant(TenantStatus::Active),
            tenant(TenantStatus::Active),
            tenant(TenantStatus::Pending),
            tenant(TenantStatus::Inactive),
        ];
        let stats = tenant_stats(&tenants);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.total, stats.active + stats.pending + stats.inactive);
    }

    #[test]
    fn counts_are_order_independent() {
        let mut tenants = vec![
            tenant(TenantStatus::Inactive),
            tenant(TenantStatus::Active),
            tenant(TenantStatus::Pending),
            tenant(TenantStatus::Active),
        ];
        let forward = tenant_stats(&tenants);
        tenants.reverse();
        assert_eq!(tenant_stats(&tenants), forward);
    }

    #[test]
    fn payment_totals_split_by_status() {
        let payments = vec![
            payment(PaymentStatus::Paid, 750.0),
            payment(PaymentStatus::Paid, 250.0),
            payment(PaymentStatus::Pending, 100.0),
            payment(PaymentStatus::Overdue, 40.0),
        ];
        let stats = payment_stats(&payments);
        assert_eq!(stats.total_payments, 4);
        assert_eq!(stats.paid, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.total_revenue, 1000.0);
        assert_eq!(stats.pending_amount, 100.0);
        assert_eq!(
            stats.total_payments,
            stats.paid + stats.pending + stats.overdue
        );
    }

    #[test]
    fn urgent_excludes_completed_requests() {
        let requests = vec![
            request(MaintenancePriority::Urgent, MaintenanceStatus::Open),
            request(MaintenancePriority::Urgent, MaintenanceStatus::InProgress),
            request(MaintenancePriority::Urgent, MaintenanceStatus::Completed),
            request(MaintenancePriority::Low, MaintenanceStatus::Open),
        ];
        let stats = maintenance_stats(&requests);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.open, 2);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.urgent, 2);
    }

    #[test]
    fn cancelled_requests_count_toward_total_only() {
        let requests = vec![request(MaintenancePriority::Urgent, MaintenanceStatus::Cancelled)];
        let stats = maintenance_stats(&requests);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.open + stats.in_progress + stats.completed, 0);
        // Cancelled is not completed, so it still counts as urgent.
        assert_eq!(stats.urgent, 1);
    }

    #[test]
    fn empty_sets_produce_zeroed_stats() {
        assert_eq!(tenant_stats(&[]), TenantStats::default());
        assert_eq!(lease_stats(&[]), LeaseStats::default());
        assert_eq!(payment_stats(&[]), PaymentStats::default());
        assert_eq!(maintenance_stats(&[]), MaintenanceStats::default());
    }
}
