use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::users::{InsertUserEntity, UpdateUserEntity, UserEntity};

#[automock]
#[async_trait]
pub trait UserRepository {
    async fn create(&self, user: InsertUserEntity) -> Result<UserEntity>;
    async fn list(&self) -> Result<Vec<UserEntity>>;
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserEntity>>;
    async fn find_by_email(&self, email: String) -> Result<Option<UserEntity>>;
    async fn update(&self, user_id: Uuid, user: UpdateUserEntity) -> Result<Option<UserEntity>>;
    async fn delete(&self, user_id: Uuid) -> Result<usize>;
}
