use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use crate::{
    config::config_model::Smtp,
    domain::{repositories::mailer::Mailer, value_objects::email::ReservationConfirmationModel},
};

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &Smtp) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .context("invalid smtp relay host")?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let from = config
            .from
            .parse::<Mailbox>()
            .context("invalid smtp sender address")?;

        Ok(Self { transport, from })
    }
}

fn confirmation_body(confirmation: &ReservationConfirmationModel) -> String {
    format!(
        "<h2>¡Hola {name}!</h2>\
         <p>Tu reserva ha sido confirmada. Estos son los detalles:</p>\
         <ul>\
           <li><strong>Maquinaria:</strong> {machinery_name}</li>\
           <li><strong>Detalles:</strong> {machinery_details}</li>\
           <li><strong>Fecha de entrega:</strong> {delivery_date}</li>\
           <li><strong>Días de renta:</strong> {rental_days}</li>\
           <li><strong>Monto pagado:</strong> ${amount:.2} MXN</li>\
         </ul>\
         <p>Gracias por rentar con Rentek.</p>",
        name = confirmation.name,
        machinery_name = confirmation.machinery_name,
        machinery_details = confirmation.machinery_details,
        delivery_date = confirmation.delivery_date,
        rental_days = confirmation.rental_days,
        amount = confirmation.amount,
    )
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_reservation_confirmation(
        &self,
        confirmation: ReservationConfirmationModel,
    ) -> Result<()> {
        let to = confirmation
            .email
            .parse::<Mailbox>()
            .context("invalid recipient address")?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Confirmación de Reserva - Rentek")
            .header(ContentType::TEXT_HTML)
            .body(confirmation_body(&confirmation))?;

        self.transport
            .send(message)
            .await
            .context("failed to send confirmation email")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_body_includes_reservation_details() {
        let body = confirmation_body(&ReservationConfirmationModel {
            email: "cliente@example.com".to_string(),
            name: "Laura".to_string(),
            amount: 1500.0,
            delivery_date: "2025-03-01".to_string(),
            machinery_name: "Excavadora CAT 320".to_string(),
            machinery_details: "Excavadora hidráulica de 20 toneladas".to_string(),
            rental_days: 5,
        });

        assert!(body.contains("¡Hola Laura!"));
        assert!(body.contains("Excavadora CAT 320"));
        assert!(body.contains("$1500.00 MXN"));
        assert!(body.contains("Días de renta:</strong> 5"));
    }
}
