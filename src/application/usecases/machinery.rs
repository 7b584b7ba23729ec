use std::collections::HashSet;
use std::sync::Arc;

use bytes::Bytes;
use uuid::Uuid;

use crate::{
    domain::{
        entities::machinery::{InsertMachineryEntity, UpdateMachineryEntity},
        repositories::{
            image_storage::ImageStorage, machinery::MachineryRepository,
            providers::ProviderRepository,
        },
        value_objects::machinery::{
            InsertMachineryForm, InsertMachineryModel, MachineryModel,
            MachineryWithProviderModel, UpdateMachineryModel,
        },
    },
    infrastructure::axum_http::error_responses::AppError,
};

pub struct MachineryUseCase<M, P, S>
where
    M: MachineryRepository + Send + Sync,
    P: ProviderRepository + Send + Sync,
    S: ImageStorage + Send + Sync,
{
    machinery_repository: Arc<M>,
    provider_repository: Arc<P>,
    image_storage: Arc<S>,
}

impl<M, P, S> MachineryUseCase<M, P, S>
where
    M: MachineryRepository + Send + Sync,
    P: ProviderRepository + Send + Sync,
    S: ImageStorage + Send + Sync,
{
    pub fn new(
        machinery_repository: Arc<M>,
        provider_repository: Arc<P>,
        image_storage: Arc<S>,
    ) -> Self {
        Self {
            machinery_repository,
            provider_repository,
            image_storage,
        }
    }

    pub async fn create(&self, model: InsertMachineryModel) -> Result<MachineryModel, AppError> {
        model.validate().map_err(AppError::Validation)?;
        self.ensure_provider_exists(model.provider_id).await?;

        let created = self
            .machinery_repository
            .create(InsertMachineryEntity {
                name: model.name,
                location: model.location,
                description: model.description,
                rental_price: model.rental_price,
                image_code: model.image_code,
                state: model.state,
                provider_id: model.provider_id,
            })
            .await?;

        Ok(created.into())
    }

    /// Multipart create: the image is stored first and its public URL becomes
    /// the machinery's `image_code`.
    pub async fn create_with_image(
        &self,
        provider_id: Uuid,
        form: InsertMachineryForm,
        file_name: String,
        content_type: String,
        image: Bytes,
    ) -> Result<MachineryModel, AppError> {
        let model = InsertMachineryModel {
            name: form.name,
            location: form.location,
            description: form.description,
            rental_price: form.rental_price,
            image_code: None,
            state: form.state,
            provider_id,
        };
        model.validate().map_err(AppError::Validation)?;
        self.ensure_provider_exists(provider_id).await?;

        if image.is_empty() {
            return Err(AppError::Validation(
                "No se ha subido ninguna imagen".to_string(),
            ));
        }

        let image_url = self
            .image_storage
            .store_image(file_name, content_type, image)
            .await?;

        let created = self
            .machinery_repository
            .create(InsertMachineryEntity {
                name: model.name,
                location: model.location,
                description: model.description,
                rental_price: model.rental_price,
                image_code: Some(image_url),
                state: model.state,
                provider_id,
            })
            .await?;

        Ok(created.into())
    }

    pub async fn bulk_create(
        &self,
        models: Vec<InsertMachineryModel>,
    ) -> Result<Vec<MachineryModel>, AppError> {
        if models.is_empty() {
            return Err(AppError::Validation(
                "Se requiere un array de maquinarias".to_string(),
            ));
        }

        let mut provider_ids = HashSet::new();
        for model in &models {
            model.validate().map_err(AppError::Validation)?;
            provider_ids.insert(model.provider_id);
        }
        for provider_id in provider_ids {
            self.ensure_provider_exists(provider_id).await?;
        }

        let entities = models
            .into_iter()
            .map(|model| InsertMachineryEntity {
                name: model.name,
                location: model.location,
                description: model.description,
                rental_price: model.rental_price,
                image_code: model.image_code,
                state: model.state,
                provider_id: model.provider_id,
            })
            .collect();

        let created = self.machinery_repository.bulk_create(entities).await?;
        Ok(created.into_iter().map(MachineryModel::from).collect())
    }

    pub async fn list(&self) -> Result<Vec<MachineryModel>, AppError> {
        let machinery = self.machinery_repository.list().await?;
        Ok(machinery.into_iter().map(MachineryModel::from).collect())
    }

    pub async fn get(&self, machinery_id: Uuid) -> Result<MachineryModel, AppError> {
        let machinery = self
            .machinery_repository
            .find_by_id(machinery_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Maquinaria no encontrada".to_string()))?;

        Ok(machinery.into())
    }

    pub async fn list_by_provider(
        &self,
        provider_id: Uuid,
    ) -> Result<Vec<MachineryModel>, AppError> {
        if self
            .provider_repository
            .find_by_id(provider_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Proveedor con ID {} no encontrado",
                provider_id
            )));
        }

        let machinery = self
            .machinery_repository
            .list_by_provider(provider_id)
            .await?;
        Ok(machinery.into_iter().map(MachineryModel::from).collect())
    }

    pub async fn list_with_provider(
        &self,
    ) -> Result<Vec<MachineryWithProviderModel>, AppError> {
        let rows = self.machinery_repository.list_with_provider().await?;
        Ok(rows
            .into_iter()
            .map(|(machinery, provider)| MachineryWithProviderModel {
                machinery: machinery.into(),
                provider_name: provider.name,
                provider_email: provider.email,
                provider_rating: provider.rating,
            })
            .collect())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        Ok(self.machinery_repository.count().await?)
    }

    pub async fn update(
        &self,
        machinery_id: Uuid,
        model: UpdateMachineryModel,
    ) -> Result<MachineryModel, AppError> {
        let updated = self
            .machinery_repository
            .update(
                machinery_id,
                UpdateMachineryEntity {
                    name: model.name,
                    location: model.location,
                    description: model.description,
                    rental_price: model.rental_price,
                    image_code: model.image_code,
                    state: model.state,
                    updated_at: chrono::Utc::now(),
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Maquinaria no encontrada".to_string()))?;

        Ok(updated.into())
    }

    pub async fn delete(&self, machinery_id: Uuid) -> Result<(), AppError> {
        let deleted = self.machinery_repository.delete(machinery_id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Maquinaria no encontrada".to_string()));
        }
        Ok(())
    }

    async fn ensure_provider_exists(&self, provider_id: Uuid) -> Result<(), AppError> {
        if self
            .provider_repository
            .find_by_id(provider_id)
            .await?
            .is_none()
        {
            return Err(AppError::Validation("Proveedor no encontrado".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::machinery::MachineryEntity,
        repositories::{
            image_storage::MockImageStorage, machinery::MockMachineryRepository,
            providers::MockProviderRepository,
        },
    };
    use chrono::Utc;

    fn machinery_entity(provider_id: Uuid) -> MachineryEntity {
        MachineryEntity {
            id: Uuid::new_v4(),
            name: "Excavadora CAT 320".to_string(),
            location: "Monterrey".to_string(),
            description: "Excavadora hidráulica de 20 toneladas".to_string(),
            rental_price: 1500.0,
            image_code: None,
            state: true,
            provider_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn insert_model(provider_id: Uuid) -> InsertMachineryModel {
        InsertMachineryModel {
            name: "Excavadora CAT 320".to_string(),
            location: "Monterrey".to_string(),
            description: "Excavadora hidráulica de 20 toneladas".to_string(),
            rental_price: 1500.0,
            image_code: None,
            state: true,
            provider_id,
        }
    }

    #[tokio::test]
    async fn create_rejects_unknown_provider_without_inserting() {
        let mut machinery_repo = MockMachineryRepository::new();
        machinery_repo.expect_create().never();
        let mut provider_repo = MockProviderRepository::new();
        provider_repo.expect_find_by_id().returning(|_| Ok(None));

        let usecase = MachineryUseCase::new(
            Arc::new(machinery_repo),
            Arc::new(provider_repo),
            Arc::new(MockImageStorage::new()),
        );
        let result = usecase.create(insert_model(Uuid::new_v4())).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn create_with_image_records_the_stored_url() {
        let provider_id = Uuid::new_v4();

        let mut machinery_repo = MockMachineryRepository::new();
        machinery_repo.expect_create().returning(|entity| {
            assert_eq!(
                entity.image_code.as_deref(),
                Some("https://img.example.com/excavadora.png")
            );
            let mut created = machinery_entity(entity.provider_id);
            created.image_code = entity.image_code;
            Ok(created)
        });

        let mut provider_repo = MockProviderRepository::new();
        provider_repo.expect_find_by_id().returning(move |id| {
            Ok(Some(crate::domain::entities::providers::ProviderEntity {
                id,
                name: "Proveedor".to_string(),
                email: "p@example.com".to_string(),
                password_hash: "$argon2id$hash".to_string(),
                phone_number: "8112345678".to_string(),
                rating: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }))
        });

        let mut storage = MockImageStorage::new();
        storage
            .expect_store_image()
            .returning(|_, _, _| Ok("https://img.example.com/excavadora.png".to_string()));

        let usecase = MachineryUseCase::new(
            Arc::new(machinery_repo),
            Arc::new(provider_repo),
            Arc::new(storage),
        );
        let form = InsertMachineryForm {
            name: "Excavadora CAT 320".to_string(),
            location: "Monterrey".to_string(),
            description: "Excavadora hidráulica de 20 toneladas".to_string(),
            rental_price: 1500.0,
            state: true,
        };
        let created = usecase
            .create_with_image(
                provider_id,
                form,
                "excavadora.png".to_string(),
                "image/png".to_string(),
                Bytes::from_static(b"\x89PNG..."),
            )
            .await
            .unwrap();
        assert_eq!(
            created.image_code.as_deref(),
            Some("https://img.example.com/excavadora.png")
        );
    }

    #[tokio::test]
    async fn list_by_provider_requires_known_provider() {
        let mut machinery_repo = MockMachineryRepository::new();
        machinery_repo.expect_list_by_provider().never();
        let mut provider_repo = MockProviderRepository::new();
        provider_repo.expect_find_by_id().returning(|_| Ok(None));

        let usecase = MachineryUseCase::new(
            Arc::new(machinery_repo),
            Arc::new(provider_repo),
            Arc::new(MockImageStorage::new()),
        );
        let result = usecase.list_by_provider(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_missing_machinery_is_not_found() {
        let mut machinery_repo = MockMachineryRepository::new();
        machinery_repo.expect_delete().returning(|_| Ok(0));

        let usecase = MachineryUseCase::new(
            Arc::new(machinery_repo),
            Arc::new(MockProviderRepository::new()),
            Arc::new(MockImageStorage::new()),
        );
        let result = usecase.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
