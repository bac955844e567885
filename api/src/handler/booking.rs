use crate::{
    extractor::{AppJson, AuthorizedUser},
    model::booking::{
        BookingDetailResponse, BookingListQuery, BookingResponse, BookingsResponse,
        CreateBookingRequest, UpdateBookingRequest, UpdateBookingRequestWithId,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{
    booking::{event::CreateBooking, Booking, BookingStatus},
    id::BookingId,
    notification::event::{BookingNotice, BookingNoticeKind},
    role::Role,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

/// Fans one booking event out to every student. The class may have been
/// deleted since the booking was made; then there is nothing to announce.
async fn notify_students(
    registry: &AppRegistry,
    booking: &Booking,
    kind: BookingNoticeKind,
) -> AppResult<()> {
    let Some(class) = registry
        .class_repository()
        .find_by_id(booking.class_id)
        .await?
    else {
        return Ok(());
    };
    let notice = BookingNotice::new(
        booking.id,
        class.name,
        booking.date,
        booking.start_time.clone(),
        kind,
    );
    let sent = registry
        .notification_repository()
        .broadcast_to_students(notice)
        .await?;
    tracing::debug!(booking_id = %booking.id, sent, "notified students of booking change");
    Ok(())
}

pub async fn show_booking_list(
    user: AuthorizedUser,
    Query(query): Query<BookingListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    // Lecturers only ever see their own schedule; the filter is for admins.
    let bookings = if user.claims.role == Role::Lecturer {
        registry
            .booking_repository()
            .find_by_lecturer(user.id())
            .await?
    } else if let Some(lecturer_id) = query.lecturer_id {
        registry
            .booking_repository()
            .find_by_lecturer(lecturer_id)
            .await?
    } else {
        registry.booking_repository().find_all().await?
    };
    Ok(Json(BookingsResponse {
        bookings: bookings.into_iter().map(BookingResponse::from).collect(),
    }))
}

pub async fn show_booking(
    _user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingDetailResponse>> {
    let booking = registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Booking not found".into()))?;
    Ok(Json(BookingDetailResponse {
        booking: booking.into(),
    }))
}

pub async fn register_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !user.can_schedule() {
        return Err(AppError::ForbiddenOperation("Forbidden".into()));
    }
    req.validate(&())?;
    let CreateBookingRequest {
        class_id,
        date,
        start_time,
        end_time,
    } = req;
    let (Some(class_id), Some(date), Some(start_time), Some(end_time)) =
        (class_id, date, start_time, end_time)
    else {
        return Err(AppError::UnprocessableEntity(
            "All fields are required".into(),
        ));
    };

    registry
        .class_repository()
        .find_by_id(class_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Class not found".into()))?;

    let event = CreateBooking::new(class_id, user.id(), date, start_time, end_time);
    let booking = registry.booking_repository().create(event).await?;

    notify_students(&registry, &booking, BookingNoticeKind::Scheduled).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingDetailResponse {
            booking: booking.into(),
        }),
    ))
}

pub async fn update_booking(
    _user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateBookingRequest>,
) -> AppResult<Json<BookingDetailResponse>> {
    req.validate(&())?;

    registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Booking not found".into()))?;

    let cancelling = req.status == Some(BookingStatus::Cancelled);
    let event = UpdateBookingRequestWithId::new(booking_id, req).into();
    let booking = registry
        .booking_repository()
        .update(event)
        .await?
        .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("Failed to update")))?;

    let kind = if cancelling {
        BookingNoticeKind::Cancelled
    } else {
        BookingNoticeKind::Updated
    };
    notify_students(&registry, &booking, kind).await?;

    Ok(Json(BookingDetailResponse {
        booking: booking.into(),
    }))
}
