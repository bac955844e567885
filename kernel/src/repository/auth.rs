use crate::model::user::User;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Checks a submitted plaintext password against the stored one-way hash
    /// for the account registered under `email`. Unknown email and wrong
    /// password are indistinguishable to the caller.
    async fn verify_credentials(&self, email: &str, password: &str) -> AppResult<User>;
}
