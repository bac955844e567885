use crate::{
    extractor::{AppJson, AuthorizedUser},
    model::report::{ReportRequest, ReportResponse, ReportRowResponse, ReportSummaryResponse},
};
use axum::{extract::State, Json};
use kernel::model::booking::BookingStatus;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

/// Joins bookings against classes, lecturers and attendance. References may
/// dangle (class or lecturer deleted after booking), which shows up as
/// "Unknown"/"N/A" rather than dropping the row.
pub async fn build_report(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<ReportRequest>,
) -> AppResult<Json<ReportResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation("Forbidden".into()));
    }

    let classes = registry.class_repository().find_all().await?;
    let users = registry.user_repository().find_all().await?;
    let mut bookings = registry.booking_repository().find_all().await?;

    if let Some(date_from) = req.date_from {
        bookings.retain(|b| b.date >= date_from);
    }
    if let Some(date_to) = req.date_to {
        bookings.retain(|b| b.date <= date_to);
    }
    if let Some(class_id) = req.class_id {
        bookings.retain(|b| b.class_id == class_id);
    }
    if let Some(lecturer_id) = req.lecturer_id {
        bookings.retain(|b| b.lecturer_id == lecturer_id);
    }

    let mut rows = Vec::with_capacity(bookings.len());
    for booking in bookings {
        let class = classes.iter().find(|c| c.id == booking.class_id);
        let lecturer = users.iter().find(|u| u.id == booking.lecturer_id);
        let attendance = registry
            .attendance_repository()
            .find_by_booking(booking.id)
            .await?;
        rows.push(ReportRowResponse {
            booking_id: booking.id,
            class_name: class.map(|c| c.name.clone()).unwrap_or_else(|| "Unknown".into()),
            room: class.map(|c| c.room.clone()).unwrap_or_else(|| "N/A".into()),
            lecturer: lecturer
                .map(|u| u.name.clone())
                .unwrap_or_else(|| "Unknown".into()),
            date: booking.date,
            time: format!("{} - {}", booking.start_time, booking.end_time),
            status: booking.status,
            attendance_count: attendance.len(),
            capacity: class.map(|c| c.capacity).unwrap_or(0),
        });
    }

    let total_attendance: usize = rows.iter().map(|r| r.attendance_count).sum();
    let average_attendance = if rows.is_empty() {
        0
    } else {
        (total_attendance as f64 / rows.len() as f64).round() as u64
    };
    let summary = ReportSummaryResponse {
        total_bookings: rows.len(),
        scheduled_bookings: rows
            .iter()
            .filter(|r| r.status == BookingStatus::Scheduled)
            .count(),
        cancelled_bookings: rows
            .iter()
            .filter(|r| r.status == BookingStatus::Cancelled)
            .count(),
        total_attendance,
        average_attendance,
    };

    Ok(Json(ReportResponse { rows, summary }))
}
