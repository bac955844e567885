use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{
        event::{CreateUser, UpdateUser},
        User,
    },
};
use serde::{Deserialize, Serialize};

/// Safe projection of a user record: the password hash and the face
/// descriptor never leave the server.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            id,
            name,
            email,
            role,
            profile_picture,
            created_at,
            ..
        } = value;
        Self {
            id,
            name,
            email,
            role,
            profile_picture,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailResponse {
    pub user: UserResponse,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    pub role: Option<Role>,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(inner(email))]
    pub email: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub password: Option<String>,
    #[garde(skip)]
    pub role: Option<Role>,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(inner(email))]
    pub email: Option<String>,
    #[garde(skip)]
    pub role: Option<Role>,
    #[garde(skip)]
    pub profile_picture: Option<String>,
}

#[derive(new)]
pub struct UpdateUserRequestWithUserId(UserId, UpdateUserRequest);

impl From<UpdateUserRequestWithUserId> for UpdateUser {
    fn from(value: UpdateUserRequestWithUserId) -> Self {
        let UpdateUserRequestWithUserId(
            user_id,
            UpdateUserRequest {
                name,
                email,
                role,
                profile_picture,
            },
        ) = value;
        UpdateUser {
            user_id,
            name,
            email,
            role,
            profile_picture,
        }
    }
}

/// Builds the create event for the admin user-management endpoint; signup
/// has its own request type in `model::auth`.
#[derive(new)]
pub struct NewUserFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl From<NewUserFields> for CreateUser {
    fn from(value: NewUserFields) -> Self {
        let NewUserFields {
            name,
            email,
            password,
            role,
        } = value;
        CreateUser {
            name,
            email,
            password,
            role,
            face_descriptor: None,
            profile_picture: None,
        }
    }
}
