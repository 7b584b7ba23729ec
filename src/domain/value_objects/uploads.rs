use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::uploads::UploadEntity;

#[derive(Debug, Clone, Serialize)]
pub struct UploadModel {
    pub id: Uuid,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "nombre_maquina")]
    pub machine_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<UploadEntity> for UploadModel {
    fn from(entity: UploadEntity) -> Self {
        Self {
            id: entity.id,
            image_url: entity.image_url,
            machine_name: entity.machine_name,
            created_at: entity.created_at,
        }
    }
}
