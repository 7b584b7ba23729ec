use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::reservations::{
        InsertReservationEntity, ReservationEntity, UpdateReservationEntity,
    },
    value_objects::{enums::payment_statuses::PaymentStatus, reservations::ReservationDetails},
};

#[automock]
#[async_trait]
pub trait ReservationRepository {
    async fn create(&self, reservation: InsertReservationEntity) -> Result<ReservationEntity>;
    async fn list(&self) -> Result<Vec<ReservationEntity>>;
    async fn find_by_id(&self, reservation_id: Uuid) -> Result<Option<ReservationEntity>>;
    /// Reservation joined with its renter and machinery, for notifications.
    async fn find_details(&self, reservation_id: Uuid) -> Result<Option<ReservationDetails>>;
    async fn update(
        &self,
        reservation_id: Uuid,
        reservation: UpdateReservationEntity,
    ) -> Result<Option<ReservationEntity>>;
    async fn set_payment_status(
        &self,
        reservation_id: Uuid,
        status: PaymentStatus,
    ) -> Result<usize>;
    async fn delete(&self, reservation_id: Uuid) -> Result<usize>;
}
