use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::email::ReservationConfirmationModel;

#[automock]
#[async_trait]
pub trait Mailer {
    async fn send_reservation_confirmation(
        &self,
        confirmation: ReservationConfirmationModel,
    ) -> Result<()>;
}
