use axum::Router;
use registry::AppRegistry;

pub mod auth;
pub mod booking;
pub mod class;
pub mod health;
pub mod notification;
pub mod report;
pub mod user;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(health::build_health_check_routers())
        .merge(auth::build_auth_routers())
        .merge(class::build_class_routers())
        .merge(booking::build_booking_routers())
        .merge(user::build_user_routers())
        .merge(notification::build_notification_routers())
        .merge(report::build_report_routers());
    Router::new().nest("/api", router)
}
