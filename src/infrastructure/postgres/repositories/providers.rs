use anyhow::Result;
use async_trait::async_trait;
use diesel::{Connection, RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::providers::{InsertProviderEntity, ProviderEntity, UpdateProviderEntity},
        repositories::providers::ProviderRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPool, schema::providers},
};

pub struct ProviderPostgres {
    db_pool: Arc<PgPool>,
}

impl ProviderPostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ProviderRepository for ProviderPostgres {
    async fn create(&self, provider: InsertProviderEntity) -> Result<ProviderEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(providers::table)
            .values(&provider)
            .returning(ProviderEntity::as_returning())
            .get_result::<ProviderEntity>(&mut conn)?;

        Ok(result)
    }

    async fn bulk_create(
        &self,
        providers: Vec<InsertProviderEntity>,
    ) -> Result<Vec<ProviderEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = conn.transaction(|conn| {
            insert_into(providers::table)
                .values(&providers)
                .returning(ProviderEntity::as_returning())
                .get_results::<ProviderEntity>(conn)
        })?;

        Ok(results)
    }

    async fn list(&self) -> Result<Vec<ProviderEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = providers::table
            .select(ProviderEntity::as_select())
            .order(providers::created_at.desc())
            .load::<ProviderEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_by_id(&self, provider_id: Uuid) -> Result<Option<ProviderEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = providers::table
            .find(provider_id)
            .select(ProviderEntity::as_select())
            .first::<ProviderEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn find_by_email(&self, email: String) -> Result<Option<ProviderEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = providers::table
            .filter(providers::email.eq(email))
            .select(ProviderEntity::as_select())
            .first::<ProviderEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn emails_in_use(&self, emails: Vec<String>) -> Result<Vec<String>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = providers::table
            .filter(providers::email.eq_any(emails))
            .select(providers::email)
            .load::<String>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        provider_id: Uuid,
        provider: UpdateProviderEntity,
    ) -> Result<Option<ProviderEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(providers::table.find(provider_id))
            .set(&provider)
            .returning(ProviderEntity::as_returning())
            .get_result::<ProviderEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, provider_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(providers::table.find(provider_id)).execute(&mut conn)?;

        Ok(deleted)
    }
}
