pub mod attendance;
pub mod auth;
pub mod booking;
pub mod class;
pub mod notification;
pub mod token;
pub mod user;
