use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::{NotificationId, UserId},
    notification::{
        event::{BookingNotice, CreateNotification},
        Notification,
    },
};
use kernel::repository::notification::NotificationRepository;
use shared::error::AppResult;

use crate::store::{read, write, AppStore};

#[derive(new)]
pub struct NotificationRepositoryImpl {
    store: AppStore,
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryImpl {
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Notification>> {
        let mut notifications: Vec<Notification> = read(&self.store.inner().notifications)
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }

    async fn create(&self, event: CreateNotification) -> AppResult<Notification> {
        let notification = Notification {
            id: NotificationId::new(),
            user_id: event.user_id,
            title: event.title,
            message: event.message,
            kind: event.kind,
            read: false,
            booking_id: event.booking_id,
            created_at: Utc::now(),
        };
        write(&self.store.inner().notifications).push(notification.clone());
        Ok(notification)
    }

    async fn mark_read(&self, notification_id: NotificationId) -> AppResult<bool> {
        let mut notifications = write(&self.store.inner().notifications);
        match notifications.iter_mut().find(|n| n.id == notification_id) {
            Some(notification) => {
                notification.read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn broadcast_to_students(&self, notice: BookingNotice) -> AppResult<usize> {
        // snapshot the recipient set before taking the notifications lock
        let students: Vec<UserId> = read(&self.store.inner().users)
            .iter()
            .filter(|u| u.is_student())
            .map(|u| u.id)
            .collect();

        let now = Utc::now();
        let mut notifications = write(&self.store.inner().notifications);
        for student_id in &students {
            notifications.push(Notification {
                id: NotificationId::new(),
                user_id: *student_id,
                title: notice.title().into(),
                message: notice.message(),
                kind: notice.notification_kind(),
                read: false,
                booking_id: Some(notice.booking_id),
                created_at: now,
            });
        }
        Ok(students.len())
    }
}
