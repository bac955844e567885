use crate::model::{
    id::{BookingId, UserId},
    notification::NotificationKind,
};
use chrono::NaiveDate;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateNotification {
    pub user_id: UserId,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub booking_id: Option<BookingId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingNoticeKind {
    Scheduled,
    Cancelled,
    Updated,
}

/// One booking event fanned out to every current student.
#[derive(Debug, new)]
pub struct BookingNotice {
    pub booking_id: BookingId,
    pub class_name: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub kind: BookingNoticeKind,
}

impl BookingNotice {
    pub fn title(&self) -> &'static str {
        match self.kind {
            BookingNoticeKind::Scheduled => "New Class Scheduled",
            BookingNoticeKind::Cancelled => "Class Cancelled",
            BookingNoticeKind::Updated => "Class Updated",
        }
    }

    pub fn message(&self) -> String {
        match self.kind {
            BookingNoticeKind::Scheduled => format!(
                "A new session of \"{}\" has been scheduled for {} at {}.",
                self.class_name, self.date, self.start_time
            ),
            BookingNoticeKind::Cancelled => format!(
                "The session of \"{}\" on {} at {} has been cancelled.",
                self.class_name, self.date, self.start_time
            ),
            BookingNoticeKind::Updated => format!(
                "The session of \"{}\" on {} has been updated.",
                self.class_name, self.date
            ),
        }
    }

    pub fn notification_kind(&self) -> NotificationKind {
        match self.kind {
            BookingNoticeKind::Scheduled => NotificationKind::Booking,
            BookingNoticeKind::Cancelled => NotificationKind::Cancellation,
            BookingNoticeKind::Updated => NotificationKind::Update,
        }
    }
}
