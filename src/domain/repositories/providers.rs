use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::providers::{
    InsertProviderEntity, ProviderEntity, UpdateProviderEntity,
};

#[automock]
#[async_trait]
pub trait ProviderRepository {
    async fn create(&self, provider: InsertProviderEntity) -> Result<ProviderEntity>;
    /// Inserts all rows in one transaction; nothing persists on failure.
    async fn bulk_create(
        &self,
        providers: Vec<InsertProviderEntity>,
    ) -> Result<Vec<ProviderEntity>>;
    async fn list(&self) -> Result<Vec<ProviderEntity>>;
    async fn find_by_id(&self, provider_id: Uuid) -> Result<Option<ProviderEntity>>;
    async fn find_by_email(&self, email: String) -> Result<Option<ProviderEntity>>;
    /// Returns the subset of the given emails that already exist.
    async fn emails_in_use(&self, emails: Vec<String>) -> Result<Vec<String>>;
    async fn update(
        &self,
        provider_id: Uuid,
        provider: UpdateProviderEntity,
    ) -> Result<Option<ProviderEntity>>;
    async fn delete(&self, provider_id: Uuid) -> Result<usize>;
}
