use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBooking},
        Booking,
    },
    id::{BookingId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    async fn find_by_lecturer(&self, lecturer_id: UserId) -> AppResult<Vec<Booking>>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    async fn update(&self, event: UpdateBooking) -> AppResult<Option<Booking>>;
}
