use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    domain::{
        entities::payments::InsertPaymentEntity,
        repositories::{
            mailer::Mailer, payment_gateway::PaymentGateway, payments::PaymentRepository,
            reservations::ReservationRepository,
        },
        value_objects::{
            email::ReservationConfirmationModel,
            enums::payment_statuses::PaymentStatus,
            payments::{CreatePreferenceModel, GatewayPayment, PaymentModel, WebhookModel},
        },
    },
    infrastructure::axum_http::error_responses::AppError,
};

/// Bridges reservations to the external payment gateway: preference creation,
/// redirect confirmation, and the webhook that settles `payment_status`.
pub struct PaymentProcessingUseCase<G, R, P, M>
where
    G: PaymentGateway + Send + Sync,
    R: ReservationRepository + Send + Sync,
    P: PaymentRepository + Send + Sync,
    M: Mailer + Send + Sync,
{
    payment_gateway: Arc<G>,
    reservation_repository: Arc<R>,
    payment_repository: Arc<P>,
    mailer: Arc<M>,
    deep_link_base: String,
}

impl<G, R, P, M> PaymentProcessingUseCase<G, R, P, M>
where
    G: PaymentGateway + Send + Sync,
    R: ReservationRepository + Send + Sync,
    P: PaymentRepository + Send + Sync,
    M: Mailer + Send + Sync,
{
    pub fn new(
        payment_gateway: Arc<G>,
        reservation_repository: Arc<R>,
        payment_repository: Arc<P>,
        mailer: Arc<M>,
        deep_link_base: String,
    ) -> Self {
        Self {
            payment_gateway,
            reservation_repository,
            payment_repository,
            mailer,
            deep_link_base,
        }
    }

    pub async fn create_preference(
        &self,
        model: CreatePreferenceModel,
    ) -> Result<serde_json::Value, AppError> {
        let amount = match model.precio {
            Some(amount) if amount > 0.0 && amount.is_finite() => amount,
            _ => {
                return Err(AppError::Validation(
                    "El precio debe ser un número válido mayor a 0".to_string(),
                ));
            }
        };

        self.payment_gateway
            .create_preference(amount, model.reservation_id)
            .await
            .map_err(|cause| {
                warn!("preference creation failed: {:#}", cause);
                AppError::Upstream("Error al crear la preferencia".to_string())
            })
    }

    /// Settled payments recorded for a reservation, newest first.
    pub async fn list_reservation_payments(
        &self,
        reservation_id: Uuid,
    ) -> Result<Vec<PaymentModel>, AppError> {
        if self
            .reservation_repository
            .find_by_id(reservation_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Reserva no encontrada".to_string()));
        }

        let payments = self
            .payment_repository
            .list_by_reservation(reservation_id)
            .await?;
        Ok(payments.into_iter().map(PaymentModel::from).collect())
    }

    pub async fn verify_payment(&self, payment_id: String) -> Result<GatewayPayment, AppError> {
        self.payment_gateway
            .get_payment(payment_id)
            .await
            .map_err(|cause| {
                warn!("payment verification failed: {:#}", cause);
                AppError::Upstream("Error al verificar el pago".to_string())
            })
    }

    /// Deep link for the gateway redirect pages. The success leg re-fetches the
    /// payment so the confirmation seen by the app is the gateway's, not the
    /// query string's.
    pub async fn redirect_target(&self, outcome: &str, payment_id: Option<String>) -> String {
        if outcome == "success" {
            if let Some(payment_id) = payment_id {
                match self.payment_gateway.get_payment(payment_id).await {
                    Ok(payment) => info!(
                        payment_id = %payment.id_as_string(),
                        status = %payment.status,
                        "payment confirmed on redirect"
                    ),
                    Err(cause) => {
                        warn!("redirect confirmation failed: {:#}", cause);
                        return format!("{}/error", self.deep_link_base);
                    }
                }
            }
        }
        format!("{}/{}", self.deep_link_base, outcome)
    }

    /// Webhook settlement. The notification only carries a payment id; the
    /// authoritative status is always re-fetched from the gateway.
    pub async fn handle_webhook(&self, model: WebhookModel) -> Result<(), AppError> {
        if model.notification_type != "payment" {
            info!(
                notification_type = %model.notification_type,
                "ignoring non-payment gateway notification"
            );
            return Ok(());
        }

        let Some(payment_id) = model.data.as_ref().and_then(|data| data.id_as_string()) else {
            warn!("payment notification without a payment id");
            return Ok(());
        };

        let payment = self
            .payment_gateway
            .get_payment(payment_id)
            .await
            .map_err(|cause| {
                warn!("webhook payment fetch failed: {:#}", cause);
                AppError::Upstream("Error al consultar el pago".to_string())
            })?;

        let Some(status) = map_gateway_status(&payment.status) else {
            warn!(status = %payment.status, "unhandled gateway payment status");
            return Ok(());
        };

        let Some(reservation_id) = payment
            .external_reference
            .as_deref()
            .and_then(|reference| Uuid::parse_str(reference).ok())
        else {
            warn!(
                payment_id = %payment.id_as_string(),
                "payment notification without a reservation reference"
            );
            return Ok(());
        };

        let updated = self
            .reservation_repository
            .set_payment_status(reservation_id, status)
            .await?;
        if updated == 0 {
            warn!(%reservation_id, "webhook references an unknown reservation");
            return Ok(());
        }
        info!(%reservation_id, status = %status, "reservation payment status settled");

        if status == PaymentStatus::Pagado {
            self.record_and_notify(reservation_id, &payment).await;
        }

        Ok(())
    }

    async fn record_and_notify(&self, reservation_id: Uuid, payment: &GatewayPayment) {
        let record = self
            .payment_repository
            .record_payment(InsertPaymentEntity {
                amount: payment.transaction_amount.unwrap_or(0.0),
                reservation_id,
                payment_method: payment
                    .payment_method_id
                    .clone()
                    .unwrap_or_else(|| "mercado_pago".to_string()),
                gateway_payment_id: Some(payment.id_as_string()),
            })
            .await;
        if let Err(cause) = record {
            warn!(%reservation_id, "failed to record settled payment: {:#}", cause);
        }

        // The confirmation email is best-effort; the webhook must still ack.
        match self.reservation_repository.find_details(reservation_id).await {
            Ok(Some(details)) => {
                let rental_days = (details.reservation.rental_end
                    - details.reservation.rental_start)
                    .num_days()
                    .max(1);
                let confirmation = ReservationConfirmationModel {
                    email: details.user_email,
                    name: details.user_name,
                    amount: details.reservation.price,
                    delivery_date: details
                        .reservation
                        .rental_start
                        .format("%Y-%m-%d")
                        .to_string(),
                    machinery_name: details.machinery_name,
                    machinery_details: details.machinery_description,
                    rental_days,
                };
                if let Err(cause) = self.mailer.send_reservation_confirmation(confirmation).await
                {
                    warn!(%reservation_id, "confirmation email failed: {:#}", cause);
                }
            }
            Ok(None) => warn!(%reservation_id, "settled reservation vanished before email"),
            Err(cause) => warn!(%reservation_id, "reservation detail lookup failed: {:#}", cause),
        }
    }
}

fn map_gateway_status(status: &str) -> Option<PaymentStatus> {
    match status {
        "approved" => Some(PaymentStatus::Pagado),
        "rejected" | "cancelled" => Some(PaymentStatus::Rechazado),
        "pending" | "in_process" => Some(PaymentStatus::Pendiente),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{payments::PaymentEntity, reservations::ReservationEntity},
        repositories::{
            mailer::MockMailer, payment_gateway::MockPaymentGateway,
            payments::MockPaymentRepository, reservations::MockReservationRepository,
        },
        value_objects::{payments::WebhookData, reservations::ReservationDetails},
    };
    use chrono::{Duration, Utc};

    fn gateway_payment(status: &str, reference: Option<Uuid>) -> GatewayPayment {
        GatewayPayment {
            id: serde_json::json!(123456),
            status: status.to_string(),
            external_reference: reference.map(|id| id.to_string()),
            transaction_amount: Some(100.0),
            payment_method_id: Some("visa".to_string()),
        }
    }

    fn webhook(payment_id: serde_json::Value) -> WebhookModel {
        WebhookModel {
            notification_type: "payment".to_string(),
            data: Some(WebhookData { id: payment_id }),
        }
    }

    fn reservation_details(reservation_id: Uuid) -> ReservationDetails {
        let start = Utc::now();
        ReservationDetails {
            reservation: ReservationEntity {
                id: reservation_id,
                rental_start: start,
                rental_end: start + Duration::days(5),
                delivery_address: "Av. Constitución 100".to_string(),
                price: 100.0,
                payment_status: "pagado".to_string(),
                delivery_status: "pendiente".to_string(),
                user_id: Uuid::new_v4(),
                machinery_id: Uuid::new_v4(),
                provider_id: Uuid::new_v4(),
                created_at: start,
                updated_at: start,
            },
            user_name: "Juan Pérez".to_string(),
            user_email: "juan@example.com".to_string(),
            machinery_name: "Excavadora CAT 320".to_string(),
            machinery_description: "Excavadora hidráulica".to_string(),
        }
    }

    fn usecase(
        gateway: MockPaymentGateway,
        reservations: MockReservationRepository,
        payments: MockPaymentRepository,
        mailer: MockMailer,
    ) -> PaymentProcessingUseCase<
        MockPaymentGateway,
        MockReservationRepository,
        MockPaymentRepository,
        MockMailer,
    > {
        PaymentProcessingUseCase::new(
            Arc::new(gateway),
            Arc::new(reservations),
            Arc::new(payments),
            Arc::new(mailer),
            "rentek://payment".to_string(),
        )
    }

    #[tokio::test]
    async fn create_preference_rejects_missing_price() {
        let mut gateway = MockPaymentGateway::new();
        gateway.expect_create_preference().never();

        let usecase = usecase(
            gateway,
            MockReservationRepository::new(),
            MockPaymentRepository::new(),
            MockMailer::new(),
        );
        let result = usecase
            .create_preference(CreatePreferenceModel {
                precio: None,
                reservation_id: None,
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn create_preference_rejects_non_positive_price() {
        let mut gateway = MockPaymentGateway::new();
        gateway.expect_create_preference().never();

        let usecase = usecase(
            gateway,
            MockReservationRepository::new(),
            MockPaymentRepository::new(),
            MockMailer::new(),
        );
        let result = usecase
            .create_preference(CreatePreferenceModel {
                precio: Some(0.0),
                reservation_id: None,
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn approved_webhook_marks_reservation_paid_and_records_payment() {
        let reservation_id = Uuid::new_v4();

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_get_payment()
            .returning(move |_| Ok(gateway_payment("approved", Some(reservation_id))));

        let mut reservations = MockReservationRepository::new();
        reservations
            .expect_set_payment_status()
            .withf(move |id, status| *id == reservation_id && *status == PaymentStatus::Pagado)
            .returning(|_, _| Ok(1));
        reservations
            .expect_find_details()
            .returning(|id| Ok(Some(reservation_details(id))));

        let mut payments = MockPaymentRepository::new();
        payments
            .expect_record_payment()
            .withf(move |payment| {
                payment.reservation_id == reservation_id && payment.amount == 100.0
            })
            .returning(|_| Ok(Uuid::new_v4()));

        let mut mailer = MockMailer::new();
        mailer
            .expect_send_reservation_confirmation()
            .times(1)
            .returning(|_| Ok(()));

        let usecase = usecase(gateway, reservations, payments, mailer);
        usecase
            .handle_webhook(webhook(serde_json::json!(123456)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn rejected_webhook_only_updates_status() {
        let reservation_id = Uuid::new_v4();

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_get_payment()
            .returning(move |_| Ok(gateway_payment("rejected", Some(reservation_id))));

        let mut reservations = MockReservationRepository::new();
        reservations
            .expect_set_payment_status()
            .withf(move |id, status| {
                *id == reservation_id && *status == PaymentStatus::Rechazado
            })
            .returning(|_, _| Ok(1));

        let mut payments = MockPaymentRepository::new();
        payments.expect_record_payment().never();
        let mut mailer = MockMailer::new();
        mailer.expect_send_reservation_confirmation().never();

        let usecase = usecase(gateway, reservations, payments, mailer);
        usecase
            .handle_webhook(webhook(serde_json::json!("123456")))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn non_payment_notification_is_ignored() {
        let mut gateway = MockPaymentGateway::new();
        gateway.expect_get_payment().never();

        let usecase = usecase(
            gateway,
            MockReservationRepository::new(),
            MockPaymentRepository::new(),
            MockMailer::new(),
        );
        usecase
            .handle_webhook(WebhookModel {
                notification_type: "merchant_order".to_string(),
                data: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn email_failure_does_not_fail_the_webhook() {
        let reservation_id = Uuid::new_v4();

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_get_payment()
            .returning(move |_| Ok(gateway_payment("approved", Some(reservation_id))));
        let mut reservations = MockReservationRepository::new();
        reservations
            .expect_set_payment_status()
            .returning(|_, _| Ok(1));
        reservations
            .expect_find_details()
            .returning(|id| Ok(Some(reservation_details(id))));
        let mut payments = MockPaymentRepository::new();
        payments
            .expect_record_payment()
            .returning(|_| Ok(Uuid::new_v4()));
        let mut mailer = MockMailer::new();
        mailer
            .expect_send_reservation_confirmation()
            .returning(|_| Err(anyhow::anyhow!("smtp down")));

        let usecase = usecase(gateway, reservations, payments, mailer);
        usecase
            .handle_webhook(webhook(serde_json::json!(123456)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn lists_recorded_payments_for_a_reservation() {
        let reservation_id = Uuid::new_v4();
        let payment_id = Uuid::new_v4();

        let mut reservations = MockReservationRepository::new();
        reservations
            .expect_find_by_id()
            .returning(move |id| Ok(Some(reservation_details(id).reservation)));
        let mut payments = MockPaymentRepository::new();
        payments
            .expect_list_by_reservation()
            .returning(move |reservation_id| {
                Ok(vec![PaymentEntity {
                    id: payment_id,
                    amount: 100.0,
                    reservation_id,
                    payment_method: "visa".to_string(),
                    gateway_payment_id: Some("123456".to_string()),
                    created_at: Utc::now(),
                }])
            });

        let usecase = usecase(
            MockPaymentGateway::new(),
            reservations,
            payments,
            MockMailer::new(),
        );
        let listed = usecase
            .list_reservation_payments(reservation_id)
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, payment_id);
        assert_eq!(listed[0].gateway_payment_id.as_deref(), Some("123456"));
    }

    #[tokio::test]
    async fn listing_payments_for_unknown_reservation_is_not_found() {
        let mut reservations = MockReservationRepository::new();
        reservations.expect_find_by_id().returning(|_| Ok(None));
        let mut payments = MockPaymentRepository::new();
        payments.expect_list_by_reservation().never();

        let usecase = usecase(
            MockPaymentGateway::new(),
            reservations,
            payments,
            MockMailer::new(),
        );
        let result = usecase.list_reservation_payments(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn gateway_status_mapping() {
        assert_eq!(map_gateway_status("approved"), Some(PaymentStatus::Pagado));
        assert_eq!(
            map_gateway_status("rejected"),
            Some(PaymentStatus::Rechazado)
        );
        assert_eq!(
            map_gateway_status("pending"),
            Some(PaymentStatus::Pendiente)
        );
        assert_eq!(
            map_gateway_status("in_process"),
            Some(PaymentStatus::Pendiente)
        );
        assert_eq!(map_gateway_status("charged_back"), None);
    }
}
