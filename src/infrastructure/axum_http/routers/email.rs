use std::sync::Arc;

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use serde_json::json;

use crate::{
    application::usecases::email::EmailUseCase,
    domain::value_objects::email::ReservationConfirmationModel,
    infrastructure::{axum_http::error_responses::AppError, smtp::SmtpMailer},
};

type Email = EmailUseCase<SmtpMailer>;

pub fn routes(mailer: Arc<SmtpMailer>) -> Router {
    let email_usecase = EmailUseCase::new(mailer);

    Router::new()
        .route("/send-email", post(send_email))
        .with_state(Arc::new(email_usecase))
}

pub async fn send_email(
    State(email_usecase): State<Arc<Email>>,
    Json(confirmation_model): Json<ReservationConfirmationModel>,
) -> Result<impl IntoResponse, AppError> {
    email_usecase
        .send_reservation_confirmation(confirmation_model)
        .await?;
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Correo enviado correctamente" })),
    ))
}
