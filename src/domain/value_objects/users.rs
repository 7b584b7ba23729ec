use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::users::UserEntity;

#[derive(Debug, Clone, Deserialize)]
pub struct InsertUserModel {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

impl InsertUserModel {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.phone_number.trim().is_empty()
        {
            return Err("Faltan campos obligatorios".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserModel {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginModel {
    pub email: String,
    pub password: String,
}

/// Public view of a user row. The password hash never leaves the process.
#[derive(Debug, Clone, Serialize)]
pub struct UserModel {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserEntity> for UserModel {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone_number: entity.phone_number,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
