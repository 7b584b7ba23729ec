use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::machinery::MachineryEntity;

fn default_state() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct InsertMachineryModel {
    pub name: String,
    pub location: String,
    pub description: String,
    pub rental_price: f64,
    pub image_code: Option<String>,
    #[serde(default = "default_state")]
    pub state: bool,
    pub provider_id: Uuid,
}

impl InsertMachineryModel {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty()
            || self.location.trim().is_empty()
            || self.description.trim().is_empty()
        {
            return Err("Faltan campos obligatorios".to_string());
        }
        if self.rental_price < 0.0 {
            return Err("El precio de renta no puede ser negativo".to_string());
        }
        Ok(())
    }
}

/// Multipart variant: the image arrives as a file part and `provider_id` comes
/// from the path, so neither is a body field.
#[derive(Debug, Clone, Default)]
pub struct InsertMachineryForm {
    pub name: String,
    pub location: String,
    pub description: String,
    pub rental_price: f64,
    pub state: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMachineryModel {
    pub name: String,
    pub location: String,
    pub description: String,
    pub rental_price: f64,
    pub image_code: Option<String>,
    #[serde(default = "default_state")]
    pub state: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MachineryModel {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub description: String,
    pub rental_price: f64,
    pub image_code: Option<String>,
    pub state: bool,
    pub provider_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MachineryEntity> for MachineryModel {
    fn from(entity: MachineryEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            description: entity.description,
            rental_price: entity.rental_price,
            image_code: entity.image_code,
            state: entity.state,
            provider_id: entity.provider_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MachineryWithProviderModel {
    #[serde(flatten)]
    pub machinery: MachineryModel,
    pub provider_name: String,
    pub provider_email: String,
    pub provider_rating: Option<f64>,
}
