use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use kernel::model::{auth::AuthClaims, id::UserId, role::Role};
use registry::AppRegistry;
use serde::de::DeserializeOwned;
use shared::error::AppError;

/// Name of the HTTP-only cookie carrying the session token.
pub const SESSION_COOKIE_NAME: &str = "auth-token";

/// Verified session identity, extracted from the `auth-token` cookie.
/// Handlers taking this parameter reject unauthenticated requests with 401.
pub struct AuthorizedUser {
    pub claims: AuthClaims,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.claims.user_id
    }

    pub fn is_admin(&self) -> bool {
        self.claims.role == Role::Admin
    }

    pub fn can_schedule(&self) -> bool {
        self.claims.role.can_schedule()
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar
            .get(SESSION_COOKIE_NAME)
            .ok_or_else(|| AppError::UnauthenticatedError("Unauthorized".into()))?;
        let claims = registry.token_issuer().verify(cookie.value())?;
        Ok(Self { claims })
    }
}

/// `axum::Json` with the rejection converted into our error type, so a
/// malformed body comes back as 400 with a JSON error payload like every
/// other failure.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::UnprocessableEntity(rejection.body_text()))?;
        Ok(Self(value))
    }
}
