use crate::model::{
    id::{NotificationId, UserId},
    notification::{
        event::{BookingNotice, CreateNotification},
        Notification,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Notifications for one recipient, newest first.
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Notification>>;
    async fn create(&self, event: CreateNotification) -> AppResult<Notification>;
    /// Returns false when the id is unknown.
    async fn mark_read(&self, notification_id: NotificationId) -> AppResult<bool>;
    /// Writes one notification per current student. Returns how many records
    /// were written.
    async fn broadcast_to_students(&self, notice: BookingNotice) -> AppResult<usize>;
}
