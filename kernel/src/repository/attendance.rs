use crate::model::{
    attendance::{event::MarkAttendance, Attendance},
    id::{BookingId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    async fn find_by_booking(&self, booking_id: BookingId) -> AppResult<Vec<Attendance>>;
    async fn find_by_student(&self, student_id: UserId) -> AppResult<Vec<Attendance>>;
    /// Idempotent: a second mark for the same (booking, student) pair
    /// returns the existing record unchanged.
    async fn mark(&self, event: MarkAttendance) -> AppResult<Attendance>;
}
