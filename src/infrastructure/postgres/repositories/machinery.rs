use anyhow::Result;
use async_trait::async_trait;
use diesel::{Connection, RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::{
            machinery::{InsertMachineryEntity, MachineryEntity, UpdateMachineryEntity},
            providers::ProviderEntity,
        },
        repositories::machinery::MachineryRepository,
    },
    infrastructure::postgres::{
        postgres_connection::PgPool,
        schema::{machinery, providers},
    },
};

pub struct MachineryPostgres {
    db_pool: Arc<PgPool>,
}

impl MachineryPostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl MachineryRepository for MachineryPostgres {
    async fn create(&self, entity: InsertMachineryEntity) -> Result<MachineryEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(machinery::table)
            .values(&entity)
            .returning(MachineryEntity::as_returning())
            .get_result::<MachineryEntity>(&mut conn)?;

        Ok(result)
    }

    async fn bulk_create(
        &self,
        entities: Vec<InsertMachineryEntity>,
    ) -> Result<Vec<MachineryEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = conn.transaction(|conn| {
            insert_into(machinery::table)
                .values(&entities)
                .returning(MachineryEntity::as_returning())
                .get_results::<MachineryEntity>(conn)
        })?;

        Ok(results)
    }

    async fn list(&self) -> Result<Vec<MachineryEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = machinery::table
            .select(MachineryEntity::as_select())
            .order(machinery::created_at.desc())
            .load::<MachineryEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_by_id(&self, machinery_id: Uuid) -> Result<Option<MachineryEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = machinery::table
            .find(machinery_id)
            .select(MachineryEntity::as_select())
            .first::<MachineryEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list_by_provider(&self, provider_id: Uuid) -> Result<Vec<MachineryEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = machinery::table
            .filter(machinery::provider_id.eq(provider_id))
            .select(MachineryEntity::as_select())
            .order(machinery::created_at.desc())
            .load::<MachineryEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_with_provider(&self) -> Result<Vec<(MachineryEntity, ProviderEntity)>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = machinery::table
            .inner_join(providers::table)
            .select((MachineryEntity::as_select(), ProviderEntity::as_select()))
            .order(machinery::created_at.desc())
            .load::<(MachineryEntity, ProviderEntity)>(&mut conn)?;

        Ok(results)
    }

    async fn count(&self) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let total = machinery::table.count().get_result::<i64>(&mut conn)?;

        Ok(total)
    }

    async fn update(
        &self,
        machinery_id: Uuid,
        entity: UpdateMachineryEntity,
    ) -> Result<Option<MachineryEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(machinery::table.find(machinery_id))
            .set(&entity)
            .returning(MachineryEntity::as_returning())
            .get_result::<MachineryEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, machinery_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(machinery::table.find(machinery_id)).execute(&mut conn)?;

        Ok(deleted)
    }
}
