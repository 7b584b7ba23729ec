use std::sync::Arc;

use bytes::Bytes;

use crate::{
    domain::{
        entities::uploads::InsertUploadEntity,
        repositories::{image_storage::ImageStorage, uploads::UploadRepository},
        value_objects::uploads::UploadModel,
    },
    infrastructure::axum_http::error_responses::AppError,
};

pub struct UploadUseCase<S, R>
where
    S: ImageStorage + Send + Sync,
    R: UploadRepository + Send + Sync,
{
    image_storage: Arc<S>,
    upload_repository: Arc<R>,
}

impl<S, R> UploadUseCase<S, R>
where
    S: ImageStorage + Send + Sync,
    R: UploadRepository + Send + Sync,
{
    pub fn new(image_storage: Arc<S>, upload_repository: Arc<R>) -> Self {
        Self {
            image_storage,
            upload_repository,
        }
    }

    pub async fn store(
        &self,
        file_name: String,
        content_type: String,
        body: Bytes,
        machine_name: Option<String>,
    ) -> Result<UploadModel, AppError> {
        if body.is_empty() {
            return Err(AppError::Validation(
                "No se ha subido ninguna imagen".to_string(),
            ));
        }

        let image_url = self
            .image_storage
            .store_image(file_name, content_type, body)
            .await?;

        let created = self
            .upload_repository
            .create(InsertUploadEntity {
                image_url,
                machine_name,
            })
            .await?;

        Ok(created.into())
    }

    pub async fn list(&self) -> Result<Vec<UploadModel>, AppError> {
        let uploads = self.upload_repository.list().await?;
        Ok(uploads.into_iter().map(UploadModel::from).collect())
    }
}
