use std::sync::Arc;

use uuid::Uuid;

use crate::{
    domain::{
        entities::users::{InsertUserEntity, UpdateUserEntity},
        repositories::users::UserRepository,
        services::passwords,
        value_objects::users::{InsertUserModel, LoginModel, UpdateUserModel, UserModel},
    },
    infrastructure::axum_http::error_responses::AppError,
};

pub struct UserUseCase<T>
where
    T: UserRepository + Send + Sync,
{
    user_repository: Arc<T>,
}

impl<T> UserUseCase<T>
where
    T: UserRepository + Send + Sync,
{
    pub fn new(user_repository: Arc<T>) -> Self {
        Self { user_repository }
    }

    pub async fn create(&self, model: InsertUserModel) -> Result<UserModel, AppError> {
        model.validate().map_err(AppError::Validation)?;

        if self
            .user_repository
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
            .user_repository
            .create(InsertUserEntity {
                name: model.name,
                email: model.email,
                password_hash,
                phone_number: model.phone_number,
            })
            .await?;

        Ok(created.into())
    }

    pub async fn list(&self) -> Result<Vec<UserModel>, AppError> {
        let users = self.user_repository.list().await?;
        Ok(users.into_iter().map(UserModel::from).collect())
    }

    pub async fn get(&self, user_id: Uuid) -> Result<UserModel, AppError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(user.into())
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        model: UpdateUserModel,
    ) -> Result<UserModel, AppError> {
        let password_hash = match &model.password {
            Some(password) if !password.is_empty() => Some(passwords::hash_password(password)?),
            _ => None,
        };

        let updated = self
            .user_repository
            .update(
                user_id,
                UpdateUserEntity {
                    name: model.name,
                    email: model.email,
                    password_hash,
                    phone_number: model.phone_number,
                    updated_at: chrono::Utc::now(),
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(updated.into())
    }

    pub async fn delete(&self, user_id: Uuid) -> Result<(), AppError> {
        let deleted = self.user_repository.delete(user_id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }
        Ok(())
    }

    pub async fn login(&self, model: LoginModel) -> Result<UserModel, AppError> {
        let user = self
            .user_repository
            .find_by_email(model.email)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        if !passwords::verify_password(&model.password, &user.password_hash)? {
            return Err(AppError::Unauthorized);
        }

        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{entities::users::UserEntity, repositories::users::MockUserRepository};
    use chrono::Utc;

    fn user_entity(email: &str, password_hash: &str) -> UserEntity {
        UserEntity {
            id: Uuid::new_v4(),
            name: "Juan Pérez".to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            phone_number: "5512345678".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn insert_model(email: &str) -> InsertUserModel {
        InsertUserModel {
            name: "Juan Pérez".to_string(),
            email: email.to_string(),
            password: "hunter2!".to_string(),
            phone_number: "5512345678".to_string(),
        }
    }

    #[tokio::test]
    async fn create_hashes_the_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create().returning(|entity| {
            assert_ne!(entity.password_hash, "hunter2!");
            assert!(entity.password_hash.starts_with("$argon2"));
            Ok(user_entity(&entity.email, &entity.password_hash))
        });

        let usecase = UserUseCase::new(Arc::new(repo));
        let created = usecase.create(insert_model("juan@example.com")).await.unwrap();
        assert_eq!(created.email, "juan@example.com");
    }

    #[tokio::test]
    async fn create_rejects_duplicate_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(user_entity(&email, "$argon2id$hash"))));
        repo.expect_create().never();

        let usecase = UserUseCase::new(Arc::new(repo));
        let result = usecase.create(insert_model("taken@example.com")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn create_rejects_missing_fields() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();

        let usecase = UserUseCase::new(Arc::new(repo));
        let mut model = insert_model("juan@example.com");
        model.name = String::new();
        let result = usecase.create(model).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().returning(|_| Ok(0));

        let usecase = UserUseCase::new(Arc::new(repo));
        let result = usecase.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let hash = passwords::hash_password("right-password").unwrap();
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |email| Ok(Some(user_entity(&email, &hash))));

        let usecase = UserUseCase::new(Arc::new(repo));
        let result = usecase
            .login(LoginModel {
                email: "juan@example.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn login_returns_user_on_valid_credentials() {
        let hash = passwords::hash_password("right-password").unwrap();
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |email| Ok(Some(user_entity(&email, &hash))));

        let usecase = UserUseCase::new(Arc::new(repo));
        let user = usecase
            .login(LoginModel {
                email: "juan@example.com".to_string(),
                password: "right-password".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.email, "juan@example.com");
    }
}
