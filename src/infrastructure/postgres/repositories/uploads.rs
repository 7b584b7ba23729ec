use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*};
use std::sync::Arc;

use crate::{
    domain::{
        entities::uploads::{InsertUploadEntity, UploadEntity},
        repositories::uploads::UploadRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPool, schema::uploads},
};

pub struct UploadPostgres {
    db_pool: Arc<PgPool>,
}

impl UploadPostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl UploadRepository for UploadPostgres {
    async fn create(&self, upload: InsertUploadEntity) -> Result<UploadEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(uploads::table)
            .values(&upload)
            .returning(UploadEntity::as_returning())
            .get_result::<UploadEntity>(&mut conn)?;

        Ok(result)
    }

    async fn list(&self) -> Result<Vec<UploadEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = uploads::table
            .select(UploadEntity::as_select())
            .order(uploads::created_at.desc())
            .load::<UploadEntity>(&mut conn)?;

        Ok(results)
    }
}
