use crate::model::id::{ClassId, UserId};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateClass {
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub room: String,
    pub created_by: UserId,
}

#[derive(Debug, new)]
pub struct UpdateClass {
    pub class_id: ClassId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub room: Option<String>,
}
