use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    application::usecases::payment_methods::PaymentMethodUseCase,
    domain::value_objects::payment_methods::{
        InsertPaymentMethodModel, UpdatePaymentMethodModel,
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{
            postgres_connection::PgPool,
            repositories::{payment_methods::PaymentMethodPostgres, users::UserPostgres},
        },
    },
};

type PaymentMethods = PaymentMethodUseCase<PaymentMethodPostgres, UserPostgres>;

pub fn routes(db_pool: Arc<PgPool>) -> Router {
    let payment_method_repository = PaymentMethodPostgres::new(Arc::clone(&db_pool));
    let user_repository = UserPostgres::new(Arc::clone(&db_pool));
    let payment_method_usecase = PaymentMethodUseCase::new(
        Arc::new(payment_method_repository),
        Arc::new(user_repository),
    );

    Router::new()
        .route("/", post(create))
        .route("/", get(list))
        .route("/user/:user_id", get(list_by_user))
        .route("/:id", put(update))
        .route("/:id", delete(remove))
        .with_state(Arc::new(payment_method_usecase))
}

pub async fn create(
    State(payment_method_usecase): State<Arc<PaymentMethods>>,
    Json(insert_payment_method_model): Json<InsertPaymentMethodModel>,
) -> Result<impl IntoResponse, AppError> {
    let payment_method = payment_method_usecase
        .create(insert_payment_method_model)
        .await?;
    Ok((StatusCode::CREATED, Json(payment_method)))
}

pub async fn list(
    State(payment_method_usecase): State<Arc<PaymentMethods>>,
) -> Result<impl IntoResponse, AppError> {
    let payment_methods = payment_method_usecase.list().await?;
    Ok(Json(payment_methods))
}

pub async fn list_by_user(
    State(payment_method_usecase): State<Arc<PaymentMethods>>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let payment_methods = payment_method_usecase.list_by_user(user_id).await?;
    Ok(Json(payment_methods))
}

pub async fn update(
    State(payment_method_usecase): State<Arc<PaymentMethods>>,
    Path(payment_method_id): Path<Uuid>,
    Json(update_payment_method_model): Json<UpdatePaymentMethodModel>,
) -> Result<impl IntoResponse, AppError> {
    let payment_method = payment_method_usecase
        .update(payment_method_id, update_payment_method_model)
        .await?;
    Ok(Json(payment_method))
}

pub async fn remove(
    State(payment_method_usecase): State<Arc<PaymentMethods>>,
    Path(payment_method_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    payment_method_usecase.delete(payment_method_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
