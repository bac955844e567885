use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBooking},
        Booking, BookingStatus,
    },
    id::{BookingId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::AppResult;

use crate::store::{read, write, AppStore};

#[derive(new)]
pub struct BookingRepositoryImpl {
    store: AppStore,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        Ok(read(&self.store.inner().bookings).clone())
    }

    async fn find_by_lecturer(&self, lecturer_id: UserId) -> AppResult<Vec<Booking>> {
        Ok(read(&self.store.inner().bookings)
            .iter()
            .filter(|b| b.lecturer_id == lecturer_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        Ok(read(&self.store.inner().bookings)
            .iter()
            .find(|b| b.id == booking_id)
            .cloned())
    }

    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let booking = Booking {
            id: BookingId::new(),
            class_id: event.class_id,
            lecturer_id: event.lecturer_id,
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
            status: BookingStatus::Scheduled,
            created_at: Utc::now(),
        };
        write(&self.store.inner().bookings).push(booking.clone());
        Ok(booking)
    }

    async fn update(&self, event: UpdateBooking) -> AppResult<Option<Booking>> {
        let mut bookings = write(&self.store.inner().bookings);
        let Some(booking) = bookings.iter_mut().find(|b| b.id == event.booking_id) else {
            return Ok(None);
        };
        if let Some(date) = event.date {
            booking.date = date;
        }
        if let Some(start_time) = event.start_time {
            booking.start_time = start_time;
        }
        if let Some(end_time) = event.end_time {
            booking.end_time = end_time;
        }
        if let Some(status) = event.status {
            booking.status = status;
        }
        Ok(Some(booking.clone()))
    }
}
