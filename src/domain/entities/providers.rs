use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::providers;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = providers)]
pub struct ProviderEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: String,
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = providers)]
pub struct InsertProviderEntity {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: String,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = providers)]
pub struct UpdateProviderEntity {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub phone_number: String,
    pub rating: Option<f64>,
    pub updated_at: DateTime<Utc>,
}
