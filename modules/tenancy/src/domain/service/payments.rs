use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::{store_err, today, Service};
use crate::contract::model::{
    EntityKind, NewPayment, Payment, PaymentPatch, PaymentStats, PaymentStatus,
    PaymentWithDetails,
};
use crate::domain::error::DomainError;
use crate::domain::events::TenancyEvent;
use crate::domain::{enrich, stats, validate};
use crate::infra::storage::index;

impl Service {
    /// All payments, each joined with its tenant and lease; dangling
    /// references degrade to `None`.
    #[instrument(name = "tenancy.service.list_payments", skip(self))]
    pub async fn list_payments(&self) -> Result<Vec<PaymentWithDetails>, DomainError> {
        self.authenticate().await?;
        let payments = self
            .stores()
            .payments
            .query_all()
            .await
            .map_err(store_err(EntityKind::Payment))?;

        let mut enriched = Vec::with_capacity(payments.len());
        for payment in payments {
            let tenant =
                enrich::tenant_ref(self.stores().tenants.as_ref(), payment.tenant_id).await?;
            let lease = enrich::lease_ref(self.stores().leases.as_ref(), payment.lease_id).await?;
            enriched.push(PaymentWithDetails {
                payment,
                tenant,
                lease,
            });
        }
        debug!("Listed {} payments", enriched.len());
        Ok(enriched)
    }

    #[instrument(name = "tenancy.service.payments_by_tenant", skip(self), fields(tenant_id = %tenant_id))]
    pub async fn payments_by_tenant(&self, tenant_id: Uuid) -> Result<Vec<Payment>, DomainError> {
        self.authenticate().await?;
        self.stores()
            .payments
            .query_by_index(index::BY_TENANT, &tenant_id.to_string())
            .await
            .map_err(store_err(EntityKind::Payment))
    }

    #[instrument(
        name = "tenancy.service.create_payment",
        skip(self),
        fields(tenant_id = %new_payment.tenant_id, amount = new_payment.amount)
    )]
    pub async fn create_payment(&self, new_payment: NewPayment) -> Result<Payment, DomainError> {
        self.authenticate().await?;
        validate::new_payment(&new_payment)?;

        let payment = Payment {
            id: Uuid::new_v4(),
            tenant_id: new_payment.tenant_id,
            lease_id: new_payment.lease_id,
            amount: new_payment.amount,
            due_date: new_payment.due_date,
            paid_date: None,
            status: PaymentStatus::Pending,
            payment_method: None,
            transaction_id: None,
            kind: new_payment.kind,
        };

        self.stores()
            .payments
            .insert(payment.clone())
            .await
            .map_err(store_err(EntityKind::Payment))?;

        self.publish(TenancyEvent::PaymentCreated {
            id: payment.id,
            at: Utc::now(),
        });
        info!("Created payment {}", payment.id);
        Ok(payment)
    }

    /// Transition a payment to Paid, stamping paid date, method, and
    /// transaction id in one atomic patch.
    ///
    /// There is no double-mark guard: re-marking an already-paid payment
    /// overwrites all three stamped fields with this call's values.
    #[instrument(name = "tenancy.service.mark_paid", skip(self), fields(payment_id = %id))]
    pub async fn mark_paid(
        &self,
        id: Uuid,
        payment_method: String,
        transaction_id: String,
    ) -> Result<Payment, DomainError> {
        self.authenticate().await?;

        let patch = PaymentPatch {
            status: Some(PaymentStatus::Paid),
            paid_date: Some(today()),
            payment_method: Some(payment_method),
            transaction_id: Some(transaction_id),
        };
        let payment = self
            .stores()
            .payments
            .patch(id, patch)
            .await
            .map_err(store_err(EntityKind::Payment))?;

        self.publish(TenancyEvent::PaymentMarkedPaid { id, at: Utc::now() });
        info!("Marked payment {id} paid");
        Ok(payment)
    }

    #[instrument(name = "tenancy.service.payment_stats", skip(self))]
    pub async fn payment_stats(&self) -> Result<PaymentStats, DomainError> {
        self.authenticate().await?;
        let payments = self
            .stores()
            .payments
            .query_all()
            .await
            .map_err(store_err(EntityKind::Payment))?;
        Ok(stats::payment_stats(&payments))
    }
}
