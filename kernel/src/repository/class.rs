use crate::model::{
    class::{
        event::{CreateClass, UpdateClass},
        Class,
    },
    id::ClassId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Class>>;
    async fn find_by_id(&self, class_id: ClassId) -> AppResult<Option<Class>>;
    async fn create(&self, event: CreateClass) -> AppResult<Class>;
    async fn update(&self, event: UpdateClass) -> AppResult<Option<Class>>;
    /// No cascade: bookings referencing the class are left dangling.
    async fn delete(&self, class_id: ClassId) -> AppResult<bool>;
}
