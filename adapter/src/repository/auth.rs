use async_trait::async_trait;
use derive_new::new;
use kernel::{model::user::User, repository::auth::AuthRepository};
use shared::error::{AppError, AppResult};

use crate::store::{read, AppStore};

#[derive(new)]
pub struct AuthRepositoryImpl {
    store: AppStore,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn verify_credentials(&self, email: &str, password: &str) -> AppResult<User> {
        let user = read(&self.store.inner().users)
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| AppError::UnauthenticatedError("Invalid credentials".into()))?;

        let valid = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(e.into()))?;
        if !valid {
            return Err(AppError::UnauthenticatedError("Invalid credentials".into()));
        }
        Ok(user)
    }
}
