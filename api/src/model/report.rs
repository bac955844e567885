use chrono::NaiveDate;
use kernel::model::{
    booking::BookingStatus,
    id::{BookingId, ClassId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub class_id: Option<ClassId>,
    pub lecturer_id: Option<UserId>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRowResponse {
    pub booking_id: BookingId,
    pub class_name: String,
    pub room: String,
    pub lecturer: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: BookingStatus,
    pub attendance_count: usize,
    pub capacity: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummaryResponse {
    pub total_bookings: usize,
    pub scheduled_bookings: usize,
    pub cancelled_bookings: usize,
    pub total_attendance: usize,
    pub average_attendance: u64,
}

#[derive(Serialize)]
pub struct ReportResponse {
    pub rows: Vec<ReportRowResponse>,
    pub summary: ReportSummaryResponse,
}
