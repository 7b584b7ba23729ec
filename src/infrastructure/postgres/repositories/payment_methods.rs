use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::payment_methods::{
            InsertPaymentMethodEntity, PaymentMethodEntity, UpdatePaymentMethodEntity,
        },
        repositories::payment_methods::PaymentMethodRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPool, schema::payment_methods},
};

pub struct PaymentMethodPostgres {
    db_pool: Arc<PgPool>,
}

impl PaymentMethodPostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PaymentMethodRepository for PaymentMethodPostgres {
    async fn create(
        &self,
        payment_method: InsertPaymentMethodEntity,
    ) -> Result<PaymentMethodEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(payment_methods::table)
            .values(&payment_method)
            .returning(PaymentMethodEntity::as_returning())
            .get_result::<PaymentMethodEntity>(&mut conn)?;

        Ok(result)
    }

    async fn list(&self) -> Result<Vec<PaymentMethodEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = payment_methods::table
            .select(PaymentMethodEntity::as_select())
            .order(payment_methods::created_at.desc())
            .load::<PaymentMethodEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_by_id(&self, payment_method_id: Uuid) -> Result<Option<PaymentMethodEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = payment_methods::table
            .find(payment_method_id)
            .select(PaymentMethodEntity::as_select())
            .first::<PaymentMethodEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<PaymentMethodEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = payment_methods::table
            .filter(payment_methods::user_id.eq(user_id))
            .select(PaymentMethodEntity::as_select())
            .order(payment_methods::created_at.desc())
            .load::<PaymentMethodEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        payment_method_id: Uuid,
        payment_method: UpdatePaymentMethodEntity,
    ) -> Result<Option<PaymentMethodEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(payment_methods::table.find(payment_method_id))
            .set(&payment_method)
            .returning(PaymentMethodEntity::as_returning())
            .get_result::<PaymentMethodEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, payment_method_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted =
            delete(payment_methods::table.find(payment_method_id)).execute(&mut conn)?;

        Ok(deleted)
    }
}
