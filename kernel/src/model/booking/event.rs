use crate::model::{
    booking::BookingStatus,
    id::{BookingId, ClassId, UserId},
};
use chrono::NaiveDate;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateBooking {
    pub class_id: ClassId,
    pub lecturer_id: UserId,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, new)]
pub struct UpdateBooking {
    pub booking_id: BookingId,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub status: Option<BookingStatus>,
}
