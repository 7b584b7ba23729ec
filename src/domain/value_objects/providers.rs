use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::providers::ProviderEntity;

#[derive(Debug, Clone, Deserialize)]
pub struct InsertProviderModel {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub rating: Option<f64>,
}

impl InsertProviderModel {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.phone_number.trim().is_empty()
        {
            return Err("Faltan campos obligatorios".to_string());
        }
        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err("La calificación debe estar entre 0 y 5".to_string());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProviderModel {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderModel {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProviderEntity> for ProviderModel {
    fn from(entity: ProviderEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone_number: entity.phone_number,
            rating: entity.rating,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
