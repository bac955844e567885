use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    booking::{event::UpdateBooking, Booking, BookingStatus},
    id::{BookingId, ClassId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub class_id: ClassId,
    pub lecturer_id: UserId,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            id,
            class_id,
            lecturer_id,
            date,
            start_time,
            end_time,
            status,
            created_at,
        } = value;
        Self {
            id,
            class_id,
            lecturer_id,
            date,
            start_time,
            end_time,
            status,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub bookings: Vec<BookingResponse>,
}

#[derive(Serialize)]
pub struct BookingDetailResponse {
    pub booking: BookingResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    pub lecturer_id: Option<UserId>,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub class_id: Option<ClassId>,
    #[garde(skip)]
    pub date: Option<NaiveDate>,
    #[garde(inner(length(min = 1)))]
    pub start_time: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub end_time: Option<String>,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    #[garde(skip)]
    pub date: Option<NaiveDate>,
    #[garde(inner(length(min = 1)))]
    pub start_time: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub end_time: Option<String>,
    #[garde(skip)]
    pub status: Option<BookingStatus>,
}

#[derive(new)]
pub struct UpdateBookingRequestWithId(BookingId, UpdateBookingRequest);

impl From<UpdateBookingRequestWithId> for UpdateBooking {
    fn from(value: UpdateBookingRequestWithId) -> Self {
        let UpdateBookingRequestWithId(
            booking_id,
            UpdateBookingRequest {
                date,
                start_time,
                end_time,
                status,
            },
        ) = value;
        UpdateBooking {
            booking_id,
            date,
            start_time,
            end_time,
            status,
        }
    }
}
