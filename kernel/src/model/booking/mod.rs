use crate::model::id::{BookingId, ClassId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub mod event;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    Scheduled,
    Cancelled,
}

/// A booked class session. `class_id` and `lecturer_id` are validated when
/// the booking is created and never re-checked afterwards, so they may
/// dangle once the referenced class or user is deleted.
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: BookingId,
    pub class_id: ClassId,
    pub lecturer_id: UserId,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}
