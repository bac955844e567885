use chrono::{DateTime, Utc};
use kernel::model::{
    attendance::{Attendance, AttendanceMethod},
    id::{AttendanceId, BookingId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceResponse {
    pub id: AttendanceId,
    pub booking_id: BookingId,
    pub student_id: UserId,
    pub marked_at: DateTime<Utc>,
    pub method: AttendanceMethod,
}

impl From<Attendance> for AttendanceResponse {
    fn from(value: Attendance) -> Self {
        let Attendance {
            id,
            booking_id,
            student_id,
            marked_at,
            method,
        } = value;
        Self {
            id,
            booking_id,
            student_id,
            marked_at,
            method,
        }
    }
}

#[derive(Serialize)]
pub struct AttendanceListResponse {
    pub attendance: Vec<AttendanceResponse>,
}

#[derive(Serialize)]
pub struct AttendanceDetailResponse {
    pub attendance: AttendanceResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceRequest {
    pub student_id: Option<UserId>,
    pub method: Option<AttendanceMethod>,
}
