use serde::Serialize;

pub mod attendance;
pub mod auth;
pub mod booking;
pub mod class;
pub mod notification;
pub mod report;
pub mod user;

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
