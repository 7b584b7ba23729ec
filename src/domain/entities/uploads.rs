use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::uploads;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = uploads)]
pub struct UploadEntity {
    pub id: Uuid,
    pub image_url: String,
    pub machine_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = uploads)]
pub struct InsertUploadEntity {
    pub image_url: String,
    pub machine_name: Option<String>,
}
