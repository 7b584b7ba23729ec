use std::sync::Arc;

use tracing::warn;

use crate::{
    domain::{
        repositories::mailer::Mailer, value_objects::email::ReservationConfirmationModel,
    },
    infrastructure::axum_http::error_responses::AppError,
};

pub struct EmailUseCase<M>
where
    M: Mailer + Send + Sync,
{
    mailer: Arc<M>,
}

impl<M> EmailUseCase<M>
where
    M: Mailer + Send + Sync,
{
    pub fn new(mailer: Arc<M>) -> Self {
        Self { mailer }
    }

    pub async fn send_reservation_confirmation(
        &self,
        model: ReservationConfirmationModel,
    ) -> Result<(), AppError> {
        model.validate().map_err(AppError::Validation)?;

        self.mailer
            .send_reservation_confirmation(model)
            .await
            .map_err(|cause| {
                warn!("confirmation email failed: {:#}", cause);
                AppError::Upstream("Error al enviar el correo".to_string())
            })
    }
}
