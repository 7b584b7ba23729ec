use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::reservations::ReservationEntity,
    value_objects::enums::{delivery_statuses::DeliveryStatus, payment_statuses::PaymentStatus},
};

#[derive(Debug, Clone, Deserialize)]
pub struct InsertReservationModel {
    pub rental_start: DateTime<Utc>,
    pub rental_end: DateTime<Utc>,
    #[serde(rename = "address_entrega")]
    pub delivery_address: String,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "machineryId")]
    pub machinery_id: Uuid,
    pub price: f64,
    pub payment_status: PaymentStatus,
    pub delivery_status: DeliveryStatus,
}

impl InsertReservationModel {
    pub fn validate(&self) -> Result<(), String> {
        if self.delivery_address.trim().is_empty() {
            return Err("Faltan campos obligatorios".to_string());
        }
        if self.rental_end <= self.rental_start {
            return Err(
                "La fecha de finalización debe ser posterior a la de inicio".to_string(),
            );
        }
        if self.price < 0.0 {
            return Err("El precio no puede ser negativo".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReservationModel {
    pub rental_start: DateTime<Utc>,
    pub rental_end: DateTime<Utc>,
    #[serde(rename = "address_entrega")]
    pub delivery_address: String,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "machineryId")]
    pub machinery_id: Uuid,
    pub price: f64,
    pub payment_status: PaymentStatus,
    pub delivery_status: DeliveryStatus,
}

impl UpdateReservationModel {
    pub fn validate(&self) -> Result<(), String> {
        if self.delivery_address.trim().is_empty() {
            return Err("Faltan campos obligatorios".to_string());
        }
        if self.rental_end <= self.rental_start {
            return Err(
                "La fecha de finalización debe ser posterior a la de inicio".to_string(),
            );
        }
        if self.price < 0.0 {
            return Err("El precio no puede ser negativo".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReservationModel {
    pub id: Uuid,
    pub rental_start: DateTime<Utc>,
    pub rental_end: DateTime<Utc>,
    #[serde(rename = "address_entrega")]
    pub delivery_address: String,
    pub price: f64,
    pub payment_status: String,
    pub delivery_status: String,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "machineryId")]
    pub machinery_id: Uuid,
    pub provider_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReservationEntity> for ReservationModel {
    fn from(entity: ReservationEntity) -> Self {
        Self {
            id: entity.id,
            rental_start: entity.rental_start,
            rental_end: entity.rental_end,
            delivery_address: entity.delivery_address,
            price: entity.price,
            payment_status: entity.payment_status,
            delivery_status: entity.delivery_status,
            user_id: entity.user_id,
            machinery_id: entity.machinery_id,
            provider_id: entity.provider_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl ReservationModel {
    /// Text embedded in the QR receipt.
    pub fn qr_text(&self) -> String {
        format!("ID: {} | Total: ${:.2}", self.id, self.price)
    }
}

/// Reservation joined with the renter and the machinery, used to build the
/// confirmation email after a payment settles.
#[derive(Debug, Clone)]
pub struct ReservationDetails {
    pub reservation: ReservationEntity,
    pub user_name: String,
    pub user_email: String,
    pub machinery_name: String,
    pub machinery_description: String,
}
