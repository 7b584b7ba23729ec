use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::machinery;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = machinery)]
pub struct MachineryEntity {
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

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = machinery)]
pub struct InsertMachineryEntity {
    pub name: String,
    pub location: String,
    pub description: String,
    pub rental_price: f64,
    pub image_code: Option<String>,
    pub state: bool,
    pub provider_id: Uuid,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = machinery)]
pub struct UpdateMachineryEntity {
    pub name: String,
    pub location: String,
    pub description: String,
    pub rental_price: f64,
    pub image_code: Option<String>,
    pub state: bool,
    pub updated_at: DateTime<Utc>,
}
