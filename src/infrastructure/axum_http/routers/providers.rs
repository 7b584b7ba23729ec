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
    application::usecases::providers::ProviderUseCase,
    domain::{
        repositories::providers::ProviderRepository,
        value_objects::{
            providers::{InsertProviderModel, UpdateProviderModel},
            users::LoginModel,
        },
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{postgres_connection::PgPool, repositories::providers::ProviderPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPool>) -> Router {
    let provider_repository = ProviderPostgres::new(Arc::clone(&db_pool));
    let provider_usecase = ProviderUseCase::new(Arc::new(provider_repository));

    Router::new()
        .route("/", post(create))
        .route("/", get(list))
        .route("/bulk", post(bulk_create))
        .route("/login", post(login))
        .route("/:provider_id", get(get_by_id))
        .route("/:provider_id", put(update))
        .route("/:provider_id", delete(remove))
        .with_state(Arc::new(provider_usecase))
}

pub async fn create<T>(
    State(provider_usecase): State<Arc<ProviderUseCase<T>>>,
    Json(insert_provider_model): Json<InsertProviderModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProviderRepository + Send + Sync,
{
    let provider = provider_usecase.create(insert_provider_model).await?;
    Ok((StatusCode::CREATED, Json(provider)))
}

pub async fn bulk_create<T>(
    State(provider_usecase): State<Arc<ProviderUseCase<T>>>,
    Json(insert_provider_models): Json<Vec<InsertProviderModel>>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProviderRepository + Send + Sync,
{
    let providers = provider_usecase.bulk_create(insert_provider_models).await?;
    Ok((StatusCode::CREATED, Json(providers)))
}

pub async fn list<T>(
    State(provider_usecase): State<Arc<ProviderUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProviderRepository + Send + Sync,
{
    let providers = provider_usecase.list().await?;
    Ok(Json(providers))
}

pub async fn get_by_id<T>(
    State(provider_usecase): State<Arc<ProviderUseCase<T>>>,
    Path(provider_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProviderRepository + Send + Sync,
{
    let provider = provider_usecase.get(provider_id).await?;
    Ok(Json(provider))
}

pub async fn update<T>(
    State(provider_usecase): State<Arc<ProviderUseCase<T>>>,
    Path(provider_id): Path<Uuid>,
    Json(update_provider_model): Json<UpdateProviderModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProviderRepository + Send + Sync,
{
    let provider = provider_usecase
        .update(provider_id, update_provider_model)
        .await?;
    Ok(Json(provider))
}

pub async fn remove<T>(
    State(provider_usecase): State<Arc<ProviderUseCase<T>>>,
    Path(provider_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProviderRepository + Send + Sync,
{
    provider_usecase.delete(provider_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn login<T>(
    State(provider_usecase): State<Arc<ProviderUseCase<T>>>,
    Json(login_model): Json<LoginModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProviderRepository + Send + Sync,
{
    let provider = provider_usecase.login(login_model).await?;
    Ok(Json(provider))
}
