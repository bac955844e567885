use crate::model::{id::UserId, role::Role};
use derive_new::new;

/// Identity fields carried inside a session credential. The token itself is
/// opaque to everything outside the issuer.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct AuthClaims {
    pub user_id: UserId,
    pub role: Role,
    pub email: String,
    pub name: String,
}
