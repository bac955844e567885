use crate::{
    extractor::{AppJson, AuthorizedUser, SESSION_COOKIE_NAME},
    model::{
        auth::{
            FaceLoginRequest, FaceLoginResponse, LoginRequest, SessionResponse,
            SessionUserResponse, SignupRequest,
        },
        SuccessResponse,
    },
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use garde::Validate;
use kernel::{
    face::best_match,
    model::{auth::AuthClaims, role::Role, user::event::CreateUser, user::User},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

/// Builds the HTTP-only session cookie carrying a freshly issued token.
fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::hours(24))
        .build()
}

fn issue_session(registry: &AppRegistry, user: &User) -> AppResult<Cookie<'static>> {
    let claims = AuthClaims::new(
        user.id,
        user.role,
        user.email.clone(),
        user.name.clone(),
    );
    let token = registry.token_issuer().issue(claims)?;
    Ok(session_cookie(token))
}

pub async fn login(
    State(registry): State<AppRegistry>,
    jar: CookieJar,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(email), Some(password)) = (req.email, req.password) else {
        return Err(AppError::UnprocessableEntity(
            "Email and password are required".into(),
        ));
    };

    let user = registry
        .auth_repository()
        .verify_credentials(&email, &password)
        .await?;

    let jar = jar.add(issue_session(&registry, &user)?);
    Ok((
        jar,
        Json(SessionResponse {
            user: SessionUserResponse::from(user),
        }),
    ))
}

pub async fn login_face(
    State(registry): State<AppRegistry>,
    jar: CookieJar,
    AppJson(req): AppJson<FaceLoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let Some(descriptor) = req.face_descriptor else {
        return Err(AppError::UnprocessableEntity(
            "Face descriptor is required".into(),
        ));
    };

    let candidates = registry.user_repository().find_all().await?;
    let found = best_match(&descriptor, &candidates).ok_or_else(|| {
        AppError::UnauthenticatedError(
            "No matching face found. Please try again or use email login.".into(),
        )
    })?;

    let confidence = found.confidence();
    let user = found.user.clone();

    let jar = jar.add(issue_session(&registry, &user)?);
    Ok((
        jar,
        Json(FaceLoginResponse {
            user: SessionUserResponse::from(user),
            confidence,
        }),
    ))
}

pub async fn signup(
    State(registry): State<AppRegistry>,
    jar: CookieJar,
    AppJson(req): AppJson<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate(&())?;
    let SignupRequest {
        name,
        email,
        password,
        face_descriptor,
    } = req;
    let (Some(name), Some(email), Some(password)) = (name, email, password) else {
        return Err(AppError::UnprocessableEntity(
            "Name, email, and password are required".into(),
        ));
    };

    // Self-service signup always produces a student account.
    let event = CreateUser::new(name, email, password, Role::Student, face_descriptor, None);
    let user = registry.user_repository().create(event).await?;

    let jar = jar.add(issue_session(&registry, &user)?);
    Ok((
        StatusCode::CREATED,
        jar,
        Json(SessionResponse {
            user: SessionUserResponse::from(user),
        }),
    ))
}

pub async fn whoami(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SessionResponse>> {
    let current = registry
        .user_repository()
        .find_by_id(user.id())
        .await?
        .ok_or_else(|| AppError::EntityNotFound("User not found".into()))?;
    Ok(Json(SessionResponse {
        user: SessionUserResponse::from(current),
    }))
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let removal = Cookie::build((SESSION_COOKIE_NAME, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    (jar.add(removal), Json(SuccessResponse::ok()))
}
