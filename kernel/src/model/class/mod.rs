use crate::model::id::{ClassId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone)]
pub struct Class {
    pub id: ClassId,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub room: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}
