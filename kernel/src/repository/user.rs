use crate::model::{
    id::UserId,
    role::Role,
    user::{
        event::{CreateUser, UpdateUser},
        User,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<User>>;
    async fn find_by_role(&self, role: Role) -> AppResult<Vec<User>>;
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    /// Case-sensitive exact match on the email column.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    /// Assigns a fresh id and timestamp, hashes the password, appends.
    /// Fails with a conflict when the email is already registered.
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    /// Shallow merge by id; `None` when the id is unknown.
    async fn update(&self, event: UpdateUser) -> AppResult<Option<User>>;
    /// Removes outright, no cascade. Returns whether anything was removed.
    async fn delete(&self, user_id: UserId) -> AppResult<bool>;
}
