use crate::{
    extractor::{AppJson, AuthorizedUser},
    model::attendance::{
        AttendanceDetailResponse, AttendanceListResponse, AttendanceResponse,
        MarkAttendanceRequest,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use kernel::model::{
    attendance::{event::MarkAttendance, AttendanceMethod},
    id::BookingId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_attendance_list(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AttendanceListResponse>> {
    let attendance = registry
        .attendance_repository()
        .find_by_booking(booking_id)
        .await?
        .into_iter()
        .map(AttendanceResponse::from)
        .collect();
    Ok(Json(AttendanceListResponse { attendance }))
}

pub async fn mark_attendance(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<MarkAttendanceRequest>,
) -> Result<impl IntoResponse, AppError> {
    registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Booking not found".into()))?;

    let student_id = req.student_id.unwrap_or_else(|| user.id());
    let method = req.method.unwrap_or(AttendanceMethod::Manual);

    let event = MarkAttendance::new(booking_id, student_id, method);
    let attendance = registry.attendance_repository().mark(event).await?;

    Ok((
        StatusCode::CREATED,
        Json(AttendanceDetailResponse {
            attendance: attendance.into(),
        }),
    ))
}
