use crate::model::auth::AuthClaims;
use shared::error::AppResult;

/// Mints and validates the opaque session credential. Signing and expiry are
/// implementation details of the issuer; callers only see claims.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, claims: AuthClaims) -> AppResult<String>;
    fn verify(&self, token: &str) -> AppResult<AuthClaims>;
}
