use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use bytes::Bytes;
use serde_json::json;

use crate::{
    application::usecases::uploads::UploadUseCase,
    domain::value_objects::uploads::UploadModel,
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{postgres_connection::PgPool, repositories::uploads::UploadPostgres},
        storage::s3::S3ImageStore,
    },
};

type Uploads = UploadUseCase<S3ImageStore, UploadPostgres>;

pub fn routes(db_pool: Arc<PgPool>, image_storage: Arc<S3ImageStore>) -> Router {
    let upload_repository = UploadPostgres::new(Arc::clone(&db_pool));
    let upload_usecase = UploadUseCase::new(image_storage, Arc::new(upload_repository));

    Router::new()
        .route("/", post(store))
        .route("/", get(list))
        .with_state(Arc::new(upload_usecase))
}

pub async fn store(
    State(upload_usecase): State<Arc<Uploads>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut image: Option<(String, String, Bytes)> = None;
    let mut machine_name: Option<String> = None;

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
                let file_name = field.file_name().unwrap_or("imagen").to_string();
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
            "machine_name" => {
                machine_name = Some(field.text().await.map_err(|_| {
                    AppError::Validation("Formulario multipart inválido".to_string())
                })?);
            }
            _ => {}
        }
    }

    let Some((file_name, content_type, bytes)) = image else {
        return Err(AppError::Validation(
            "No se ha subido ninguna imagen".to_string(),
        ));
    };

    let upload = upload_usecase
        .store(file_name, content_type, bytes, machine_name)
        .await?;
    Ok((StatusCode::CREATED, Json(stored_response(&upload))))
}

fn stored_response(upload: &UploadModel) -> serde_json::Value {
    json!({
        "message": "Imagen subida con éxito",
        "imageUrl": upload.image_url,
        "upload": upload,
    })
}

pub async fn list(
    State(upload_usecase): State<Arc<Uploads>>,
) -> Result<impl IntoResponse, AppError> {
    let uploads = upload_usecase.list().await?;
    Ok(Json(uploads))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn stored_response_carries_message_and_image_url() {
        let body = stored_response(&UploadModel {
            id: Uuid::new_v4(),
            image_url: "https://cdn.example.com/uploads/excavadora.png".to_string(),
            machine_name: Some("Excavadora".to_string()),
            created_at: Utc::now(),
        });

        assert_eq!(body["message"], "Imagen subida con éxito");
        assert_eq!(
            body["imageUrl"],
            "https://cdn.example.com/uploads/excavadora.png"
        );
        assert_eq!(body["upload"]["nombre_maquina"], "Excavadora");
    }
}
