pub mod attendance;
pub mod auth;
pub mod booking;
pub mod class;
pub mod id;
pub mod notification;
pub mod role;
pub mod user;
