use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    application::usecases::reservations::ReservationUseCase,
    domain::value_objects::reservations::{InsertReservationModel, UpdateReservationModel},
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{
            postgres_connection::PgPool,
            repositories::{
                machinery::MachineryPostgres, reservations::ReservationPostgres,
                users::UserPostgres,
            },
        },
    },
};

type Reservations = ReservationUseCase<ReservationPostgres, UserPostgres, MachineryPostgres>;

pub fn routes(db_pool: Arc<PgPool>) -> Router {
    let reservation_repository = ReservationPostgres::new(Arc::clone(&db_pool));
    let user_repository = UserPostgres::new(Arc::clone(&db_pool));
    let machinery_repository = MachineryPostgres::new(Arc::clone(&db_pool));
    let reservation_usecase = ReservationUseCase::new(
        Arc::new(reservation_repository),
        Arc::new(user_repository),
        Arc::new(machinery_repository),
    );

    Router::new()
        .route("/", post(create))
        .route("/", get(list))
        .route("/:id", get(get_by_id))
        .route("/:id", put(update))
        .route("/:id", delete(remove))
        .route("/:id/qrcode", get(qrcode))
        .with_state(Arc::new(reservation_usecase))
}

pub async fn create(
    State(reservation_usecase): State<Arc<Reservations>>,
    Json(insert_reservation_model): Json<InsertReservationModel>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = reservation_usecase.create(insert_reservation_model).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

pub async fn list(
    State(reservation_usecase): State<Arc<Reservations>>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = reservation_usecase.list().await?;
    Ok(Json(reservations))
}

pub async fn get_by_id(
    State(reservation_usecase): State<Arc<Reservations>>,
    Path(reservation_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = reservation_usecase.get(reservation_id).await?;
    Ok(Json(reservation))
}

pub async fn update(
    State(reservation_usecase): State<Arc<Reservations>>,
    Path(reservation_id): Path<Uuid>,
    Json(update_reservation_model): Json<UpdateReservationModel>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = reservation_usecase
        .update(reservation_id, update_reservation_model)
        .await?;
    Ok(Json(reservation))
}

pub async fn remove(
    State(reservation_usecase): State<Arc<Reservations>>,
    Path(reservation_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    reservation_usecase.delete(reservation_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PNG receipt QR for a reservation.
pub async fn qrcode(
    State(reservation_usecase): State<Arc<Reservations>>,
    Path(reservation_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let png = reservation_usecase.render_qrcode(reservation_id).await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
