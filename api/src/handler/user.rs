use crate::{
    extractor::{AppJson, AuthorizedUser},
    model::{
        user::{
            CreateUserRequest, NewUserFields, UpdateUserRequest, UpdateUserRequestWithUserId,
            UserDetailResponse, UserListQuery, UserResponse, UsersResponse,
        },
        SuccessResponse,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_user_list(
    _user: AuthorizedUser,
    Query(query): Query<UserListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UsersResponse>> {
    let users = match query.role {
        Some(role) => registry.user_repository().find_by_role(role).await?,
        None => registry.user_repository().find_all().await?,
    };
    Ok(Json(UsersResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}

pub async fn show_user(
    _user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserDetailResponse>> {
    let user = registry
        .user_repository()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("User not found".into()))?;
    Ok(Json(UserDetailResponse { user: user.into() }))
}

pub async fn register_user(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation("Forbidden".into()));
    }
    req.validate(&())?;
    let CreateUserRequest {
        name,
        email,
        password,
        role,
    } = req;
    let (Some(name), Some(email), Some(password), Some(role)) = (name, email, password, role)
    else {
        return Err(AppError::UnprocessableEntity(
            "All fields are required".into(),
        ));
    };

    let event = NewUserFields::new(name, email, password, role).into();
    let created = registry.user_repository().create(event).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserDetailResponse {
            user: created.into(),
        }),
    ))
}

pub async fn update_user(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateUserRequest>,
) -> AppResult<Json<UserDetailResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation("Forbidden".into()));
    }
    req.validate(&())?;

    let event = UpdateUserRequestWithUserId::new(user_id, req).into();
    let updated = registry
        .user_repository()
        .update(event)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("User not found".into()))?;
    Ok(Json(UserDetailResponse {
        user: updated.into(),
    }))
}

pub async fn delete_user(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SuccessResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation("Forbidden".into()));
    }
    let deleted = registry.user_repository().delete(user_id).await?;
    if !deleted {
        return Err(AppError::EntityNotFound("User not found".into()));
    }
    Ok(Json(SuccessResponse::ok()))
}
