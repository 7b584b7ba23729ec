use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::reservations::{
            InsertReservationEntity, ReservationEntity, UpdateReservationEntity,
        },
        repositories::reservations::ReservationRepository,
        value_objects::{
            enums::payment_statuses::PaymentStatus, reservations::ReservationDetails,
        },
    },
    infrastructure::postgres::{
        postgres_connection::PgPool,
        schema::{machinery, reservations, users},
    },
};

pub struct ReservationPostgres {
    db_pool: Arc<PgPool>,
}

impl ReservationPostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ReservationRepository for ReservationPostgres {
    async fn create(&self, reservation: InsertReservationEntity) -> Result<ReservationEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(reservations::table)
            .values(&reservation)
            .returning(ReservationEntity::as_returning())
            .get_result::<ReservationEntity>(&mut conn)?;

        Ok(result)
    }

    async fn list(&self) -> Result<Vec<ReservationEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = reservations::table
            .select(ReservationEntity::as_select())
            .order(reservations::created_at.desc())
            .load::<ReservationEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_by_id(&self, reservation_id: Uuid) -> Result<Option<ReservationEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = reservations::table
            .find(reservation_id)
            .select(ReservationEntity::as_select())
            .first::<ReservationEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn find_details(&self, reservation_id: Uuid) -> Result<Option<ReservationDetails>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = reservations::table
            .inner_join(users::table)
            .inner_join(machinery::table)
            .filter(reservations::id.eq(reservation_id))
            .select((
                ReservationEntity::as_select(),
                users::name,
                users::email,
                machinery::name,
                machinery::description,
            ))
            .first::<(ReservationEntity, String, String, String, String)>(&mut conn)
            .optional()?;

        Ok(row.map(
            |(reservation, user_name, user_email, machinery_name, machinery_description)| {
                ReservationDetails {
                    reservation,
                    user_name,
                    user_email,
                    machinery_name,
                    machinery_description,
                }
            },
        ))
    }

    async fn update(
        &self,
        reservation_id: Uuid,
        reservation: UpdateReservationEntity,
    ) -> Result<Option<ReservationEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(reservations::table.find(reservation_id))
            .set(&reservation)
            .returning(ReservationEntity::as_returning())
            .get_result::<ReservationEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn set_payment_status(
        &self,
        reservation_id: Uuid,
        status: PaymentStatus,
    ) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let updated = update(reservations::table.find(reservation_id))
            .set((
                reservations::payment_status.eq(status.to_string()),
                reservations::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(updated)
    }

    async fn delete(&self, reservation_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(reservations::table.find(reservation_id)).execute(&mut conn)?;

        Ok(deleted)
    }
}
