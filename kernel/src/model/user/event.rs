use crate::model::{id::UserId, role::Role};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    /// Plaintext; hashed by the repository before it is stored.
    pub password: String,
    pub role: Role,
    pub face_descriptor: Option<Vec<f64>>,
    pub profile_picture: Option<String>,
}

/// Names exactly the fields an update may touch. Identity fields (id,
/// created_at) and the password hash are not reachable from here.
#[derive(Debug, new)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub profile_picture: Option<String>,
}
