pub mod attendance;
pub mod auth;
pub mod booking;
pub mod class;
pub mod health;
pub mod notification;
pub mod report;
pub mod user;
