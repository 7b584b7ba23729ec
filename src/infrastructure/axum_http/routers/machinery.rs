use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use bytes::Bytes;
use serde_json::json;
use uuid::Uuid;

use crate::{
    application::usecases::machinery::MachineryUseCase,
    domain::value_objects::machinery::{
        InsertMachineryForm, InsertMachineryModel, UpdateMachineryModel,
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{
            postgres_connection::PgPool,
            repositories::{machinery::MachineryPostgres, providers::ProviderPostgres},
        },
        storage::s3::S3ImageStore,
    },
};

type Machinery = MachineryUseCase<MachineryPostgres, ProviderPostgres, S3ImageStore>;

pub fn routes(db_pool: Arc<PgPool>, image_storage: Arc<S3ImageStore>) -> Router {
    let machinery_repository = MachineryPostgres::new(Arc::clone(&db_pool));
    let provider_repository = ProviderPostgres::new(Arc::clone(&db_pool));
    let machinery_usecase = MachineryUseCase::new(
        Arc::new(machinery_repository),
        Arc::new(provider_repository),
        image_storage,
    );

    Router::new()
        .route("/", post(create))
        .route("/", get(list))
        .route("/bulk", post(bulk_create))
        .route("/count", get(count))
        .route("/with-provider", get(list_with_provider))
        .route("/by-provider/:provider_id", get(list_by_provider))
        .route("/:id", post(create_with_image))
        .route("/:id", get(get_by_id))
        .route("/:id", put(update))
        .route("/:id", delete(remove))
        .with_state(Arc::new(machinery_usecase))
}

pub async fn create(
    State(machinery_usecase): State<Arc<Machinery>>,
    Json(insert_machinery_model): Json<InsertMachineryModel>,
) -> Result<impl IntoResponse, AppError> {
    let machinery = machinery_usecase.create(insert_machinery_model).await?;
    Ok((StatusCode::CREATED, Json(machinery)))
}

pub async fn bulk_create(
    State(machinery_usecase): State<Arc<Machinery>>,
    Json(insert_machinery_models): Json<Vec<InsertMachineryModel>>,
) -> Result<impl IntoResponse, AppError> {
    let machinery = machinery_usecase
        .bulk_create(insert_machinery_models)
        .await?;
    Ok((StatusCode::CREATED, Json(machinery)))
}

/// Multipart create: text parts carry the machinery fields, the `image` part
/// carries the file.
pub async fn create_with_image(
    State(machinery_usecase): State<Arc<Machinery>>,
    Path(provider_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut form = InsertMachineryForm {
        state: true,
        ..Default::default()
    };
    let mut image: Option<(String, String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::Validation("Formulario multipart inválido".to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "image" => {
                let file_name = field
                    .file_name()
                    .unwrap_or("imagen")
                    .to_string();
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        mime_guess::from_path(&file_name)
                            .first_or_octet_stream()
                            .to_string()
                    });
                let bytes = field.bytes().await.map_err(|_| {
                    AppError::Validation("No se pudo leer la imagen".to_string())
                })?;
                image = Some((file_name, content_type, bytes));
            }
            "name" => form.name = read_text(field).await?,
            "location" => form.location = read_text(field).await?,
            "description" => form.description = read_text(field).await?,
            "rental_price" => {
                form.rental_price = read_text(field).await?.parse().map_err(|_| {
                    AppError::Validation("El precio de renta debe ser numérico".to_string())
                })?;
            }
            "state" => {
                form.state = read_text(field).await?.parse().unwrap_or(true);
            }
            _ => {}
        }
    }

    let Some((file_name, content_type, bytes)) = image else {
        return Err(AppError::Validation(
            "No se ha subido ninguna imagen".to_string(),
        ));
    };

    let machinery = machinery_usecase
        .create_with_image(provider_id, form, file_name, content_type, bytes)
        .await?;
    Ok((StatusCode::CREATED, Json(machinery)))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|_| AppError::Validation("Formulario multipart inválido".to_string()))
}

pub async fn list(
    State(machinery_usecase): State<Arc<Machinery>>,
) -> Result<impl IntoResponse, AppError> {
    let machinery = machinery_usecase.list().await?;
    Ok(Json(machinery))
}

pub async fn count(
    State(machinery_usecase): State<Arc<Machinery>>,
) -> Result<impl IntoResponse, AppError> {
    let total = machinery_usecase.count().await?;
    Ok(Json(json!({ "total": total })))
}

pub async fn list_with_provider(
    State(machinery_usecase): State<Arc<Machinery>>,
) -> Result<impl IntoResponse, AppError> {
    let machinery = machinery_usecase.list_with_provider().await?;
    Ok(Json(machinery))
}

pub async fn list_by_provider(
    State(machinery_usecase): State<Arc<Machinery>>,
    Path(provider_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let machinery = machinery_usecase.list_by_provider(provider_id).await?;
    Ok(Json(machinery))
}

pub async fn get_by_id(
    State(machinery_usecase): State<Arc<Machinery>>,
    Path(machinery_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let machinery = machinery_usecase.get(machinery_id).await?;
    Ok(Json(machinery))
}

pub async fn update(
    State(machinery_usecase): State<Arc<Machinery>>,
    Path(machinery_id): Path<Uuid>,
    Json(update_machinery_model): Json<UpdateMachineryModel>,
) -> Result<impl IntoResponse, AppError> {
    let machinery = machinery_usecase
        .update(machinery_id, update_machinery_model)
        .await?;
    Ok(Json(machinery))
}

pub async fn remove(
    State(machinery_usecase): State<Arc<Machinery>>,
    Path(machinery_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    machinery_usecase.delete(machinery_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
