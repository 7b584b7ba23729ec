use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::payment_methods::{
    InsertPaymentMethodEntity, PaymentMethodEntity, UpdatePaymentMethodEntity,
};

#[automock]
#[async_trait]
pub trait PaymentMethodRepository {
    async fn create(
        &self,
        payment_method: InsertPaymentMethodEntity,
    ) -> Result<PaymentMethodEntity>;
    async fn list(&self) -> Result<Vec<PaymentMethodEntity>>;
    async fn find_by_id(&self, payment_method_id: Uuid) -> Result<Option<PaymentMethodEntity>>;
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<PaymentMethodEntity>>;
    async fn update(
        &self,
        payment_method_id: Uuid,
        payment_method: UpdatePaymentMethodEntity,
    ) -> Result<Option<PaymentMethodEntity>>;
    async fn delete(&self, payment_method_id: Uuid) -> Result<usize>;
}
