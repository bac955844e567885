use chrono::{DateTime, Utc};
use kernel::model::{
    id::{BookingId, NotificationId, UserId},
    notification::{Notification, NotificationKind},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: NotificationId,
    pub user_id: UserId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    pub booking_id: Option<BookingId>,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(value: Notification) -> Self {
        let Notification {
            id,
            user_id,
            title,
            message,
            kind,
            read,
            booking_id,
            created_at,
        } = value;
        Self {
            id,
            user_id,
            title,
            message,
            kind,
            read,
            booking_id,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsResponse {
    pub notifications: Vec<NotificationResponse>,
}
