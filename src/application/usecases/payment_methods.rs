use std::sync::Arc;

use uuid::Uuid;

use crate::{
    domain::{
        entities::payment_methods::{InsertPaymentMethodEntity, UpdatePaymentMethodEntity},
        repositories::{payment_methods::PaymentMethodRepository, users::UserRepository},
        services::cards,
        value_objects::payment_methods::{
            InsertPaymentMethodModel, PaymentMethodModel, UpdatePaymentMethodModel,
        },
    },
    infrastructure::axum_http::error_responses::AppError,
};

pub struct PaymentMethodUseCase<T, U>
where
    T: PaymentMethodRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    payment_method_repository: Arc<T>,
    user_repository: Arc<U>,
}

impl<T, U> PaymentMethodUseCase<T, U>
where
    T: PaymentMethodRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    pub fn new(payment_method_repository: Arc<T>, user_repository: Arc<U>) -> Self {
        Self {
            payment_method_repository,
            user_repository,
        }
    }

    pub async fn create(
        &self,
        model: InsertPaymentMethodModel,
    ) -> Result<PaymentMethodModel, AppError> {
        model.validate().map_err(AppError::Validation)?;
        validate_cvv(&model.cvv)?;

        if self
            .user_repository
            .find_by_id(model.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::Validation("Usuario no encontrado".to_string()));
        }

        // The PAN and CVV stop here; only masked data reaches the repository.
        let summary = cards::summarize(&model.card_number).map_err(AppError::Validation)?;
        let created = self
            .payment_method_repository
            .create(InsertPaymentMethodEntity {
                card_holder: model.card_holder,
                card_brand: summary.brand,
                card_last4: summary.last4,
                card_fingerprint: summary.fingerprint,
                expiration_date: model.expiration_date,
                user_id: model.user_id,
            })
            .await?;

        Ok(created.into())
    }

    pub async fn list(&self) -> Result<Vec<PaymentMethodModel>, AppError> {
        let payment_methods = self.payment_method_repository.list().await?;
        Ok(payment_methods
            .into_iter()
            .map(PaymentMethodModel::from)
            .collect())
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<PaymentMethodModel>, AppError> {
        if self.user_repository.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        let payment_methods = self.payment_method_repository.list_by_user(user_id).await?;
        Ok(payment_methods
            .into_iter()
            .map(PaymentMethodModel::from)
            .collect())
    }

    pub async fn update(
        &self,
        payment_method_id: Uuid,
        model: UpdatePaymentMethodModel,
    ) -> Result<PaymentMethodModel, AppError> {
        model.validate().map_err(AppError::Validation)?;
        validate_cvv(&model.cvv)?;

        let summary = cards::summarize(&model.card_number).map_err(AppError::Validation)?;
        let updated = self
            .payment_method_repository
            .update(
                payment_method_id,
                UpdatePaymentMethodEntity {
                    card_holder: model.card_holder,
                    card_brand: summary.brand,
                    card_last4: summary.last4,
                    card_fingerprint: summary.fingerprint,
                    expiration_date: model.expiration_date,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Método de pago no encontrado".to_string()))?;

        Ok(updated.into())
    }

    pub async fn delete(&self, payment_method_id: Uuid) -> Result<(), AppError> {
        let deleted = self
            .payment_method_repository
            .delete(payment_method_id)
            .await?;
        if deleted == 0 {
            return Err(AppError::NotFound(
                "Método de pago no encontrado".to_string(),
            ));
        }
        Ok(())
    }
}

fn validate_cvv(cvv: &str) -> Result<(), AppError> {
    if !(cvv.len() == 3 || cvv.len() == 4) || !cvv.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation("CVV inválido".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{payment_methods::PaymentMethodEntity, users::UserEntity},
        repositories::{
            payment_methods::MockPaymentMethodRepository, users::MockUserRepository,
        },
    };
    use chrono::Utc;

    fn user_entity(id: Uuid) -> UserEntity {
        UserEntity {
            id,
            name: "Juan Pérez".to_string(),
            email: "juan@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            phone_number: "5512345678".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn insert_model(user_id: Uuid) -> InsertPaymentMethodModel {
        InsertPaymentMethodModel {
            card_holder: "JUAN PEREZ".to_string(),
            card_number: "4242 4242 4242 4242".to_string(),
            expiration_date: "12/27".to_string(),
            cvv: "123".to_string(),
            user_id,
        }
    }

    #[tokio::test]
    async fn create_stores_masked_card_only() {
        let user_id = Uuid::new_v4();

        let mut repo = MockPaymentMethodRepository::new();
        repo.expect_create().returning(|entity| {
            assert_eq!(entity.card_last4, "4242");
            assert_eq!(entity.card_brand.as_deref(), Some("visa"));
            assert_eq!(entity.card_fingerprint.len(), 64);
            Ok(PaymentMethodEntity {
                id: Uuid::new_v4(),
                card_holder: entity.card_holder,
                card_brand: entity.card_brand,
                card_last4: entity.card_last4,
                card_fingerprint: entity.card_fingerprint,
                expiration_date: entity.expiration_date,
                user_id: entity.user_id,
                created_at: Utc::now(),
            })
        });
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(user_entity(id))));

        let usecase = PaymentMethodUseCase::new(Arc::new(repo), Arc::new(users));
        let created = usecase.create(insert_model(user_id)).await.unwrap();
        assert_eq!(created.card_last4, "4242");
    }

    #[tokio::test]
    async fn create_rejects_invalid_card_number() {
        let mut repo = MockPaymentMethodRepository::new();
        repo.expect_create().never();
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(user_entity(id))));

        let usecase = PaymentMethodUseCase::new(Arc::new(repo), Arc::new(users));
        let mut model = insert_model(Uuid::new_v4());
        model.card_number = "4242424242424241".to_string();
        let result = usecase.create(model).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn create_rejects_unknown_user() {
        let mut repo = MockPaymentMethodRepository::new();
        repo.expect_create().never();
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let usecase = PaymentMethodUseCase::new(Arc::new(repo), Arc::new(users));
        let result = usecase.create(insert_model(Uuid::new_v4())).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn create_rejects_bad_cvv() {
        let mut repo = MockPaymentMethodRepository::new();
        repo.expect_create().never();

        let usecase =
            PaymentMethodUseCase::new(Arc::new(repo), Arc::new(MockUserRepository::new()));
        let mut model = insert_model(Uuid::new_v4());
        model.cvv = "12a".to_string();
        let result = usecase.create(model).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn list_by_user_requires_known_user() {
        let mut repo = MockPaymentMethodRepository::new();
        repo.expect_list_by_user().never();
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let usecase = PaymentMethodUseCase::new(Arc::new(repo), Arc::new(users));
        let result = usecase.list_by_user(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
