use garde::Validate;
use kernel::model::{id::UserId, role::Role, user::User};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceLoginRequest {
    pub face_descriptor: Option<Vec<f64>>,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(inner(email))]
    pub email: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub password: Option<String>,
    #[garde(skip)]
    pub face_descriptor: Option<Vec<f64>>,
}

/// What a freshly authenticated client learns about itself.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub profile_picture: Option<String>,
}

impl From<User> for SessionUserResponse {
    fn from(value: User) -> Self {
        let User {
            id,
            name,
            email,
            role,
            profile_picture,
            ..
        } = value;
        Self {
            id,
            name,
            email,
            role,
            profile_picture,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: SessionUserResponse,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceLoginResponse {
    pub user: SessionUserResponse,
    pub confidence: f64,
}
