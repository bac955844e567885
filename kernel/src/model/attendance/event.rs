use crate::model::{
    attendance::AttendanceMethod,
    id::{BookingId, UserId},
};
use derive_new::new;

#[derive(Debug, new)]
pub struct MarkAttendance {
    pub booking_id: BookingId,
    pub student_id: UserId,
    pub method: AttendanceMethod,
}
