use std::io::Cursor;
use std::sync::Arc;

use anyhow::Result;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use uuid::Uuid;

use crate::{
    domain::{
        entities::reservations::{InsertReservationEntity, UpdateReservationEntity},
        repositories::{
            machinery::MachineryRepository, reservations::ReservationRepository,
            users::UserRepository,
        },
        value_objects::reservations::{
            InsertReservationModel, ReservationModel, UpdateReservationModel,
        },
    },
    infrastructure::axum_http::error_responses::AppError,
};

pub struct ReservationUseCase<R, U, M>
where
    R: ReservationRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    M: MachineryRepository + Send + Sync,
{
    reservation_repository: Arc<R>,
    user_repository: Arc<U>,
    machinery_repository: Arc<M>,
}

impl<R, U, M> ReservationUseCase<R, U, M>
where
    R: ReservationRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    M: MachineryRepository + Send + Sync,
{
    pub fn new(
        reservation_repository: Arc<R>,
        user_repository: Arc<U>,
        machinery_repository: Arc<M>,
    ) -> Self {
        Self {
            reservation_repository,
            user_repository,
            machinery_repository,
        }
    }

    pub async fn create(
        &self,
        model: InsertReservationModel,
    ) -> Result<ReservationModel, AppError> {
        model.validate().map_err(AppError::Validation)?;

        let user = self.user_repository.find_by_id(model.user_id).await?;
        let machinery = self
            .machinery_repository
            .find_by_id(model.machinery_id)
            .await?;
        let (Some(_), Some(machinery)) = (user, machinery) else {
            return Err(AppError::Validation(
                "Usuario o maquinaria no encontrados".to_string(),
            ));
        };

        // provider attribution comes from the machinery row, never the client
        let created = self
            .reservation_repository
            .create(InsertReservationEntity {
                rental_start: model.rental_start,
                rental_end: model.rental_end,
                delivery_address: model.delivery_address,
                price: model.price,
                payment_status: model.payment_status.to_string(),
                delivery_status: model.delivery_status.to_string(),
                user_id: model.user_id,
                machinery_id: model.machinery_id,
                provider_id: machinery.provider_id,
            })
            .await?;

        Ok(created.into())
    }

    pub async fn list(&self) -> Result<Vec<ReservationModel>, AppError> {
        let reservations = self.reservation_repository.list().await?;
        Ok(reservations
            .into_iter()
            .map(ReservationModel::from)
            .collect())
    }

    pub async fn get(&self, reservation_id: Uuid) -> Result<ReservationModel, AppError> {
        let reservation = self
            .reservation_repository
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        Ok(reservation.into())
    }

    pub async fn update(
        &self,
        reservation_id: Uuid,
        model: UpdateReservationModel,
    ) -> Result<ReservationModel, AppError> {
        model.validate().map_err(AppError::Validation)?;

        let user = self.user_repository.find_by_id(model.user_id).await?;
        let machinery = self
            .machinery_repository
            .find_by_id(model.machinery_id)
            .await?;
        let (Some(_), Some(machinery)) = (user, machinery) else {
            return Err(AppError::Validation(
                "Usuario o maquinaria no encontrados".to_string(),
            ));
        };

        let updated = self
            .reservation_repository
            .update(
                reservation_id,
                UpdateReservationEntity {
                    rental_start: model.rental_start,
                    rental_end: model.rental_end,
                    delivery_address: model.delivery_address,
                    price: model.price,
                    payment_status: model.payment_status.to_string(),
                    delivery_status: model.delivery_status.to_string(),
                    user_id: model.user_id,
                    machinery_id: model.machinery_id,
                    provider_id: machinery.provider_id,
                    updated_at: chrono::Utc::now(),
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        Ok(updated.into())
    }

    pub async fn delete(&self, reservation_id: Uuid) -> Result<(), AppError> {
        let deleted = self.reservation_repository.delete(reservation_id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Reserva no encontrada".to_string()));
        }
        Ok(())
    }

    /// PNG receipt encoding `ID: <id> | Total: $<price>` as a QR code.
    pub async fn render_qrcode(&self, reservation_id: Uuid) -> Result<Vec<u8>, AppError> {
        let reservation: ReservationModel = self
            .reservation_repository
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?
            .into();

        Ok(render_qr_png(&reservation.qr_text())?)
    }
}

fn render_qr_png(text: &str) -> Result<Vec<u8>> {
    let code = QrCode::new(text.as_bytes())?;
    let luma = code.render::<Luma<u8>>().build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(luma).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{machinery::MachineryEntity, reservations::ReservationEntity, users::UserEntity},
        repositories::{
            machinery::MockMachineryRepository, reservations::MockReservationRepository,
            users::MockUserRepository,
        },
        value_objects::enums::{
            delivery_statuses::DeliveryStatus, payment_statuses::PaymentStatus,
        },
    };
    use chrono::{Duration, Utc};

    fn user_entity(id: Uuid) -> UserEntity {
        UserEntity {
            id,
            name: "Juan Pérez".to_string(),
            email: "juan@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            phone_number: "5512345678".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn machinery_entity(id: Uuid, provider_id: Uuid) -> MachineryEntity {
        MachineryEntity {
            id,
            name: "Excavadora CAT 320".to_string(),
            location: "Monterrey".to_string(),
            description: "Excavadora hidráulica".to_string(),
            rental_price: 1500.0,
            image_code: None,
            state: true,
            provider_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn insert_model(user_id: Uuid, machinery_id: Uuid) -> InsertReservationModel {
        let start = Utc::now();
        InsertReservationModel {
            rental_start: start,
            rental_end: start + Duration::days(5),
            delivery_address: "Av. Constitución 100".to_string(),
            user_id,
            machinery_id,
            price: 100.0,
            payment_status: PaymentStatus::Pendiente,
            delivery_status: DeliveryStatus::Pendiente,
        }
    }

    fn stored_entity(entity: InsertReservationEntity) -> ReservationEntity {
        ReservationEntity {
            id: Uuid::new_v4(),
            rental_start: entity.rental_start,
            rental_end: entity.rental_end,
            delivery_address: entity.delivery_address,
            price: entity.price,
            payment_status: entity.payment_status,
            delivery_status: entity.delivery_status,
            user_id: entity.user_id,
            machinery_id: entity.machinery_id,
            provider_id: entity.provider_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_derives_provider_from_machinery() {
        let user_id = Uuid::new_v4();
        let machinery_id = Uuid::new_v4();
        let provider_id = Uuid::new_v4();

        let mut reservation_repo = MockReservationRepository::new();
        reservation_repo
            .expect_create()
            .returning(|entity| Ok(stored_entity(entity)));
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(user_entity(id))));
        let mut machinery_repo = MockMachineryRepository::new();
        machinery_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(machinery_entity(id, provider_id))));

        let usecase = ReservationUseCase::new(
            Arc::new(reservation_repo),
            Arc::new(user_repo),
            Arc::new(machinery_repo),
        );
        let created = usecase
            .create(insert_model(user_id, machinery_id))
            .await
            .unwrap();

        assert_eq!(created.provider_id, provider_id);
        assert_eq!(created.payment_status, "pendiente");
        assert_eq!(created.delivery_status, "pendiente");
    }

    #[tokio::test]
    async fn create_rejects_inverted_rental_range() {
        let mut reservation_repo = MockReservationRepository::new();
        reservation_repo.expect_create().never();

        let usecase = ReservationUseCase::new(
            Arc::new(reservation_repo),
            Arc::new(MockUserRepository::new()),
            Arc::new(MockMachineryRepository::new()),
        );
        let mut model = insert_model(Uuid::new_v4(), Uuid::new_v4());
        model.rental_end = model.rental_start - Duration::hours(1);
        let result = usecase.create(model).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn create_rejects_equal_rental_bounds() {
        let mut reservation_repo = MockReservationRepository::new();
        reservation_repo.expect_create().never();

        let usecase = ReservationUseCase::new(
            Arc::new(reservation_repo),
            Arc::new(MockUserRepository::new()),
            Arc::new(MockMachineryRepository::new()),
        );
        let mut model = insert_model(Uuid::new_v4(), Uuid::new_v4());
        model.rental_end = model.rental_start;
        let result = usecase.create(model).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn create_rejects_unknown_user_or_machinery() {
        let mut reservation_repo = MockReservationRepository::new();
        reservation_repo.expect_create().never();
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_id().returning(|_| Ok(None));
        let mut machinery_repo = MockMachineryRepository::new();
        machinery_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(machinery_entity(id, Uuid::new_v4()))));

        let usecase = ReservationUseCase::new(
            Arc::new(reservation_repo),
            Arc::new(user_repo),
            Arc::new(machinery_repo),
        );
        let result = usecase
            .create(insert_model(Uuid::new_v4(), Uuid::new_v4()))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_missing_reservation_is_not_found() {
        let mut reservation_repo = MockReservationRepository::new();
        reservation_repo.expect_delete().returning(|_| Ok(0));

        let usecase = ReservationUseCase::new(
            Arc::new(reservation_repo),
            Arc::new(MockUserRepository::new()),
            Arc::new(MockMachineryRepository::new()),
        );
        let result = usecase.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn qrcode_returns_png_bytes() {
        let mut reservation_repo = MockReservationRepository::new();
        reservation_repo.expect_find_by_id().returning(|id| {
            let mut entity = stored_entity(InsertReservationEntity {
                rental_start: Utc::now(),
                rental_end: Utc::now() + Duration::days(2),
                delivery_address: "Av. Constitución 100".to_string(),
                price: 100.0,
                payment_status: "pendiente".to_string(),
                delivery_status: "pendiente".to_string(),
                user_id: Uuid::new_v4(),
                machinery_id: Uuid::new_v4(),
                provider_id: Uuid::new_v4(),
            });
            entity.id = id;
            Ok(Some(entity))
        });

        let usecase = ReservationUseCase::new(
            Arc::new(reservation_repo),
            Arc::new(MockUserRepository::new()),
            Arc::new(MockMachineryRepository::new()),
        );
        let png = usecase.render_qrcode(Uuid::new_v4()).await.unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn qr_text_formats_price_to_two_decimals() {
        let entity = stored_entity(InsertReservationEntity {
            rental_start: Utc::now(),
            rental_end: Utc::now() + Duration::days(2),
            delivery_address: "Av. Constitución 100".to_string(),
            price: 100.0,
            payment_status: "pendiente".to_string(),
            delivery_status: "pendiente".to_string(),
            user_id: Uuid::new_v4(),
            machinery_id: Uuid::new_v4(),
            provider_id: Uuid::new_v4(),
        });
        let model = ReservationModel::from(entity);
        assert_eq!(
            model.qr_text(),
            format!("ID: {} | Total: $100.00", model.id)
        );
    }
}
