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
    application::usecases::users::UserUseCase,
    domain::{
        repositories::users::UserRepository,
        value_objects::users::{InsertUserModel, LoginModel, UpdateUserModel},
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{postgres_connection::PgPool, repositories::users::UserPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPool>) -> Router {
    let user_repository = UserPostgres::new(Arc::clone(&db_pool));
    let user_usecase = UserUseCase::new(Arc::new(user_repository));

    Router::new()
        .route("/", post(create))
        .route("/", get(list))
        .route("/login", post(login))
        .route("/:user_id", get(get_by_id))
        .route("/:user_id", put(update))
        .route("/:user_id", delete(remove))
        .with_state(Arc::new(user_usecase))
}

pub async fn create<T>(
    State(user_usecase): State<Arc<UserUseCase<T>>>,
    Json(insert_user_model): Json<InsertUserModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: UserRepository + Send + Sync,
{
    let user = user_usecase.create(insert_user_model).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn list<T>(
    State(user_usecase): State<Arc<UserUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: UserRepository + Send + Sync,
{
    let users = user_usecase.list().await?;
    Ok(Json(users))
}

pub async fn get_by_id<T>(
    State(user_usecase): State<Arc<UserUseCase<T>>>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    T: UserRepository + Send + Sync,
{
    let user = user_usecase.get(user_id).await?;
    Ok(Json(user))
}

pub async fn update<T>(
    State(user_usecase): State<Arc<UserUseCase<T>>>,
    Path(user_id): Path<Uuid>,
    Json(update_user_model): Json<UpdateUserModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: UserRepository + Send + Sync,
{
    let user = user_usecase.update(user_id, update_user_model).await?;
    Ok(Json(user))
}

pub async fn remove<T>(
    State(user_usecase): State<Arc<UserUseCase<T>>>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    T: UserRepository + Send + Sync,
{
    user_usecase.delete(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn login<T>(
    State(user_usecase): State<Arc<UserUseCase<T>>>,
    Json(login_model): Json<LoginModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: UserRepository + Send + Sync,
{
    let user = user_usecase.login(login_model).await?;
    Ok(Json(user))
}
