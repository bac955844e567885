use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    attendance::{event::MarkAttendance, Attendance},
    id::{AttendanceId, BookingId, UserId},
};
use kernel::repository::attendance::AttendanceRepository;
use shared::error::AppResult;

use crate::store::{read, write, AppStore};

#[derive(new)]
pub struct AttendanceRepositoryImpl {
    store: AppStore,
}

#[async_trait]
impl AttendanceRepository for AttendanceRepositoryImpl {
    async fn find_by_booking(&self, booking_id: BookingId) -> AppResult<Vec<Attendance>> {
        Ok(read(&self.store.inner().attendance)
            .iter()
            .filter(|a| a.booking_id == booking_id)
            .cloned()
            .collect())
    }

    async fn find_by_student(&self, student_id: UserId) -> AppResult<Vec<Attendance>> {
        Ok(read(&self.store.inner().attendance)
            .iter()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn mark(&self, event: MarkAttendance) -> AppResult<Attendance> {
        let mut attendance = write(&self.store.inner().attendance);
        if let Some(existing) = attendance
            .iter()
            .find(|a| a.booking_id == event.booking_id && a.student_id == event.student_id)
        {
            return Ok(existing.clone());
        }

        let record = Attendance {
            id: AttendanceId::new(),
            booking_id: event.booking_id,
            student_id: event.student_id,
            marked_at: Utc::now(),
            method: event.method,
        };
        attendance.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::attendance::AttendanceMethod;

    #[tokio::test]
    async fn marking_twice_returns_the_same_record() -> anyhow::Result<()> {
        let repo = AttendanceRepositoryImpl::new(AppStore::new());
        let booking_id = BookingId::new();
        let student_id = UserId::new();

        let first = repo
            .mark(MarkAttendance::new(
                booking_id,
                student_id,
                AttendanceMethod::Manual,
            ))
            .await?;
        let second = repo
            .mark(MarkAttendance::new(
                booking_id,
                student_id,
                AttendanceMethod::Face,
            ))
            .await?;

        assert_eq!(first.id, second.id);
        assert_eq!(second.method, AttendanceMethod::Manual);
        assert_eq!(repo.find_by_booking(booking_id).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn different_pairs_produce_distinct_records() -> anyhow::Result<()> {
        let repo = AttendanceRepositoryImpl::new(AppStore::new());
        let booking_id = BookingId::new();
        let student = UserId::new();
        let other_student = UserId::new();

        repo.mark(MarkAttendance::new(booking_id, student, AttendanceMethod::Manual))
            .await?;
        repo.mark(MarkAttendance::new(
            booking_id,
            other_student,
            AttendanceMethod::Face,
        ))
        .await?;
        repo.mark(MarkAttendance::new(
            BookingId::new(),
            student,
            AttendanceMethod::Manual,
        ))
        .await?;

        assert_eq!(repo.find_by_booking(booking_id).await?.len(), 2);
        assert_eq!(repo.find_by_student(student).await?.len(), 2);
        Ok(())
    }
}
