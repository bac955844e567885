use crate::model::id::{AttendanceId, BookingId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub mod event;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttendanceMethod {
    Manual,
    Face,
}

#[derive(Debug, Clone)]
pub struct Attendance {
    pub id: AttendanceId,
    pub booking_id: BookingId,
    pub student_id: UserId,
    pub marked_at: DateTime<Utc>,
    pub method: AttendanceMethod,
}
