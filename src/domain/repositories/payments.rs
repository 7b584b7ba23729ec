use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::payments::{InsertPaymentEntity, PaymentEntity};

#[automock]
#[async_trait]
pub trait PaymentRepository {
    async fn record_payment(&self, payment: InsertPaymentEntity) -> Result<Uuid>;
    async fn list_by_reservation(&self, reservation_id: Uuid) -> Result<Vec<PaymentEntity>>;
}
