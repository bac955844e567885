use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    attendance::{mark_attendance, show_attendance_list},
    booking::{register_booking, show_booking, show_booking_list, update_booking},
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new()
        .route("/", get(show_booking_list))
        .route("/", post(register_booking))
        .route("/:booking_id", get(show_booking))
        .route("/:booking_id", put(update_booking))
        .route("/:booking_id/attendance", get(show_attendance_list))
        .route("/:booking_id/attendance", post(mark_attendance));

    Router::new().nest("/bookings", booking_routers)
}
