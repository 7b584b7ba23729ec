use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::uploads::{InsertUploadEntity, UploadEntity};

#[automock]
#[async_trait]
pub trait UploadRepository {
    async fn create(&self, upload: InsertUploadEntity) -> Result<UploadEntity>;
    async fn list(&self) -> Result<Vec<UploadEntity>>;
}
