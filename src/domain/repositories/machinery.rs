use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::{
    machinery::{InsertMachineryEntity, MachineryEntity, UpdateMachineryEntity},
    providers::ProviderEntity,
};

#[automock]
#[async_trait]
pub trait MachineryRepository {
    async fn create(&self, machinery: InsertMachineryEntity) -> Result<MachineryEntity>;
    /// Inserts all rows in one transaction; nothing persists on failure.
    async fn bulk_create(
        &self,
        machinery: Vec<InsertMachineryEntity>,
    ) -> Result<Vec<MachineryEntity>>;
    async fn list(&self) -> Result<Vec<MachineryEntity>>;
    async fn find_by_id(&self, machinery_id: Uuid) -> Result<Option<MachineryEntity>>;
    async fn list_by_provider(&self, provider_id: Uuid) -> Result<Vec<MachineryEntity>>;
    async fn list_with_provider(&self) -> Result<Vec<(MachineryEntity, ProviderEntity)>>;
    async fn count(&self) -> Result<i64>;
    async fn update(
        &self,
        machinery_id: Uuid,
        machinery: UpdateMachineryEntity,
    ) -> Result<Option<MachineryEntity>>;
    async fn delete(&self, machinery_id: Uuid) -> Result<usize>;
}
