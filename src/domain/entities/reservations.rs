use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::reservations;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = reservations)]
pub struct ReservationEntity {
    pub id: Uuid,
    pub rental_start: DateTime<Utc>,
    pub rental_end: DateTime<Utc>,
    pub delivery_address: String,
    pub price: f64,
    pub payment_status: String,
    pub delivery_status: String,
    pub user_id: Uuid,
    pub machinery_id: Uuid,
    pub provider_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reservations)]
pub struct InsertReservationEntity {
    pub rental_start: DateTime<Utc>,
    pub rental_end: DateTime<Utc>,
    pub delivery_address: String,
    pub price: f64,
    pub payment_status: String,
    pub delivery_status: String,
    pub user_id: Uuid,
    pub machinery_id: Uuid,
    // Always derived from the referenced machinery row, never client-supplied.
    pub provider_id: Uuid,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = reservations)]
pub struct UpdateReservationEntity {
    pub rental_start: DateTime<Utc>,
    pub rental_end: DateTime<Utc>,
    pub delivery_address: String,
    pub price: f64,
    pub payment_status: String,
    pub delivery_status: String,
    pub user_id: Uuid,
    pub machinery_id: Uuid,
    pub provider_id: Uuid,
    pub updated_at: DateTime<Utc>,
}
