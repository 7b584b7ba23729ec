use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    application::usecases::payment_processing::PaymentProcessingUseCase,
    domain::value_objects::payments::{CreatePreferenceModel, WebhookModel},
    infrastructure::{
        axum_http::error_responses::AppError,
        mercado_pago::MercadoPagoClient,
        postgres::{
            postgres_connection::PgPool,
            repositories::{payments::PaymentPostgres, reservations::ReservationPostgres},
        },
        smtp::SmtpMailer,
    },
};

type Payments =
    PaymentProcessingUseCase<MercadoPagoClient, ReservationPostgres, PaymentPostgres, SmtpMailer>;

pub fn routes(
    db_pool: Arc<PgPool>,
    payment_gateway: Arc<MercadoPagoClient>,
    mailer: Arc<SmtpMailer>,
    deep_link_base: String,
) -> Router {
    let reservation_repository = ReservationPostgres::new(Arc::clone(&db_pool));
    let payment_repository = PaymentPostgres::new(Arc::clone(&db_pool));
    let payment_processing_usecase = PaymentProcessingUseCase::new(
        payment_gateway,
        Arc::new(reservation_repository),
        Arc::new(payment_repository),
        mailer,
        deep_link_base,
    );

    Router::new()
        .route("/crear-preferencia", post(create_preference))
        .route("/verificar/:payment_id", get(verify_payment))
        .route("/reservacion/:reservation_id", get(list_reservation_payments))
        .route("/webhook", post(webhook))
        .route("/success", get(success))
        .route("/failure", get(failure))
        .route("/pending", get(pending))
        .with_state(Arc::new(payment_processing_usecase))
}

#[derive(Debug, Deserialize)]
pub struct RedirectQuery {
    pub payment_id: Option<String>,
}

pub async fn create_preference(
    State(payment_processing_usecase): State<Arc<Payments>>,
    Json(create_preference_model): Json<CreatePreferenceModel>,
) -> Result<impl IntoResponse, AppError> {
    let preference = payment_processing_usecase
        .create_preference(create_preference_model)
        .await?;
    Ok(Json(preference))
}

pub async fn verify_payment(
    State(payment_processing_usecase): State<Arc<Payments>>,
    Path(payment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let payment = payment_processing_usecase.verify_payment(payment_id).await?;
    Ok(Json(payment))
}

pub async fn list_reservation_payments(
    State(payment_processing_usecase): State<Arc<Payments>>,
    Path(reservation_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let payments = payment_processing_usecase
        .list_reservation_payments(reservation_id)
        .await?;
    Ok(Json(payments))
}

/// Gateway notification; always answered with 200 so the gateway stops
/// retrying once the event has been processed.
pub async fn webhook(
    State(payment_processing_usecase): State<Arc<Payments>>,
    Json(webhook_model): Json<WebhookModel>,
) -> Result<impl IntoResponse, AppError> {
    payment_processing_usecase.handle_webhook(webhook_model).await?;
    Ok(StatusCode::OK)
}

pub async fn success(
    State(payment_processing_usecase): State<Arc<Payments>>,
    Query(query): Query<RedirectQuery>,
) -> impl IntoResponse {
    let target = payment_processing_usecase
        .redirect_target("success", query.payment_id)
        .await;
    Redirect::temporary(&target)
}

pub async fn failure(
    State(payment_processing_usecase): State<Arc<Payments>>,
    Query(query): Query<RedirectQuery>,
) -> impl IntoResponse {
    let target = payment_processing_usecase
        .redirect_target("failure", query.payment_id)
        .await;
    Redirect::temporary(&target)
}

pub async fn pending(
    State(payment_processing_usecase): State<Arc<Payments>>,
    Query(query): Query<RedirectQuery>,
) -> impl IntoResponse {
    let target = payment_processing_usecase
        .redirect_target("pending", query.payment_id)
        .await;
    Redirect::temporary(&target)
}
