use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    class::{event::UpdateClass, Class},
    id::{ClassId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassResponse {
    pub id: ClassId,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub room: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl From<Class> for ClassResponse {
    fn from(value: Class) -> Self {
        let Class {
            id,
            name,
            description,
            capacity,
            room,
            created_by,
            created_at,
        } = value;
        Self {
            id,
            name,
            description,
            capacity,
            room,
            created_by,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassesResponse {
    pub classes: Vec<ClassResponse>,
}

#[derive(Serialize)]
pub struct ClassDetailResponse {
    pub class: ClassResponse,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(inner(range(min = 1)))]
    pub capacity: Option<i32>,
    #[garde(inner(length(min = 1)))]
    pub room: Option<String>,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(inner(range(min = 1)))]
    pub capacity: Option<i32>,
    #[garde(inner(length(min = 1)))]
    pub room: Option<String>,
}

#[derive(new)]
pub struct UpdateClassRequestWithId(ClassId, UpdateClassRequest);

impl From<UpdateClassRequestWithId> for UpdateClass {
    fn from(value: UpdateClassRequestWithId) -> Self {
        let UpdateClassRequestWithId(
            class_id,
            UpdateClassRequest {
                name,
                description,
                capacity,
                room,
            },
        ) = value;
        UpdateClass {
            class_id,
            name,
            description,
            capacity,
            room,
        }
    }
}
