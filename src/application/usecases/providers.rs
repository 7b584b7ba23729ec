use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::{
    domain::{
        entities::providers::{InsertProviderEntity, UpdateProviderEntity},
        repositories::providers::ProviderRepository,
        services::passwords,
        value_objects::{
            providers::{InsertProviderModel, ProviderModel, UpdateProviderModel},
            users::LoginModel,
        },
    },
    infrastructure::axum_http::error_responses::AppError,
};

pub struct ProviderUseCase<T>
where
    T: ProviderRepository + Send + Sync,
{
    provider_repository: Arc<T>,
}

impl<T> ProviderUseCase<T>
where
    T: ProviderRepository + Send + Sync,
{
    pub fn new(provider_repository: Arc<T>) -> Self {
        Self {
            provider_repository,
        }
    }

    pub async fn create(&self, model: InsertProviderModel) -> Result<ProviderModel, AppError> {
        model.validate().map_err(AppError::Validation)?;

        if self
            .provider_repository
            .find_by_email(model.email.clone())
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "El correo electrónico ya está en uso".to_string(),
            ));
        }

        let password_hash = passwords::hash_password(&model.password)?;
        let created = self
            .provider_repository
            .create(InsertProviderEntity {
                name: model.name,
                email: model.email,
                password_hash,
                phone_number: model.phone_number,
                rating: model.rating,
            })
            .await?;

        Ok(created.into())
    }

    /// Validates every row before anything is inserted; the repository insert
    /// itself runs in a single transaction.
    pub async fn bulk_create(
        &self,
        models: Vec<InsertProviderModel>,
    ) -> Result<Vec<ProviderModel>, AppError> {
        if models.is_empty() {
            return Err(AppError::Validation(
                "Se requiere un array de proveedores".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for model in &models {
            model.validate().map_err(AppError::Validation)?;
            if !seen.insert(model.email.clone()) {
                return Err(AppError::Validation(format!(
                    "Correo repetido en la solicitud: {}",
                    model.email
                )));
            }
        }

        let emails: Vec<String> = models.iter().map(|m| m.email.clone()).collect();
        let in_use = self.provider_repository.emails_in_use(emails).await?;
        if !in_use.is_empty() {
            return Err(AppError::Conflict(format!(
                "Los siguientes correos ya están en uso: {}",
                in_use.join(", ")
            )));
        }

        let mut entities = Vec::with_capacity(models.len());
        for model in models {
            entities.push(InsertProviderEntity {
                password_hash: passwords::hash_password(&model.password)?,
                name: model.name,
                email: model.email,
                phone_number: model.phone_number,
                rating: model.rating,
            });
        }

        let created = self.provider_repository.bulk_create(entities).await?;
        Ok(created.into_iter().map(ProviderModel::from).collect())
    }

    pub async fn list(&self) -> Result<Vec<ProviderModel>, AppError> {
        let providers = self.provider_repository.list().await?;
        Ok(providers.into_iter().map(ProviderModel::from).collect())
    }

    pub async fn get(&self, provider_id: Uuid) -> Result<ProviderModel, AppError> {
        let provider = self
            .provider_repository
            .find_by_id(provider_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Proveedor no encontrado".to_string()))?;

        Ok(provider.into())
    }

    pub async fn update(
        &self,
        provider_id: Uuid,
        model: UpdateProviderModel,
    ) -> Result<ProviderModel, AppError> {
        let password_hash = match &model.password {
            Some(password) if !password.is_empty() => Some(passwords::hash_password(password)?),
            _ => None,
        };

        let updated = self
            .provider_repository
            .update(
                provider_id,
                UpdateProviderEntity {
                    name: model.name,
                    email: model.email,
                    password_hash,
                    phone_number: model.phone_number,
                    rating: model.rating,
                    updated_at: chrono::Utc::now(),
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Proveedor no encontrado".to_string()))?;

        Ok(updated.into())
    }

    pub async fn delete(&self, provider_id: Uuid) -> Result<(), AppError> {
        let deleted = self.provider_repository.delete(provider_id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Proveedor no encontrado".to_string()));
        }
        Ok(())
    }

    pub async fn login(&self, model: LoginModel) -> Result<ProviderModel, AppError> {
        let provider = self
            .provider_repository
            .find_by_email(model.email)
            .await?
            .ok_or_else(|| AppError::NotFound("Proveedor no encontrado".to_string()))?;

        if !passwords::verify_password(&model.password, &provider.password_hash)? {
            return Err(AppError::Unauthorized);
        }

        Ok(provider.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::providers::ProviderEntity, repositories::providers::MockProviderRepository,
    };
    use chrono::Utc;

    fn provider_entity(email: &str) -> ProviderEntity {
        ProviderEntity {
            id: Uuid::new_v4(),
            name: "Maquinaria del Norte".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$hash".to_string(),
            phone_number: "8112345678".to_string(),
            rating: Some(4.5),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn insert_model(email: &str) -> InsertProviderModel {
        InsertProviderModel {
            name: "Maquinaria del Norte".to_string(),
            email: email.to_string(),
            password: "secreto123".to_string(),
            phone_number: "8112345678".to_string(),
            rating: Some(4.5),
        }
    }

    #[tokio::test]
    async fn bulk_create_rejects_when_any_email_is_in_use() {
        let mut repo = MockProviderRepository::new();
        repo.expect_emails_in_use()
            .returning(|_| Ok(vec!["taken@example.com".to_string()]));
        repo.expect_bulk_create().never();

        let usecase = ProviderUseCase::new(Arc::new(repo));
        let result = usecase
            .bulk_create(vec![
                insert_model("taken@example.com"),
                insert_model("free@example.com"),
            ])
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn bulk_create_rejects_duplicates_within_the_batch() {
        let mut repo = MockProviderRepository::new();
        repo.expect_emails_in_use().never();
        repo.expect_bulk_create().never();

        let usecase = ProviderUseCase::new(Arc::new(repo));
        let result = usecase
            .bulk_create(vec![
                insert_model("same@example.com"),
                insert_model("same@example.com"),
            ])
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn bulk_create_inserts_all_rows() {
        let mut repo = MockProviderRepository::new();
        repo.expect_emails_in_use().returning(|_| Ok(vec![]));
        repo.expect_bulk_create().returning(|entities| {
            Ok(entities
                .into_iter()
                .map(|e| {
                    let mut entity = provider_entity(&e.email);
                    entity.password_hash = e.password_hash;
                    entity
                })
                .collect())
        });

        let usecase = ProviderUseCase::new(Arc::new(repo));
        let created = usecase
            .bulk_create(vec![insert_model("a@example.com"), insert_model("b@example.com")])
            .await
            .unwrap();
        assert_eq!(created.len(), 2);
    }

    #[tokio::test]
    async fn create_rejects_out_of_range_rating() {
        let mut repo = MockProviderRepository::new();
        repo.expect_create().never();

        let usecase = ProviderUseCase::new(Arc::new(repo));
        let mut model = insert_model("a@example.com");
        model.rating = Some(7.0);
        let result = usecase.create(model).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_missing_provider_is_not_found() {
        let mut repo = MockProviderRepository::new();
        repo.expect_delete().returning(|_| Ok(0));

        let usecase = ProviderUseCase::new(Arc::new(repo));
        let result = usecase.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
