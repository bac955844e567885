use crate::{
    extractor::{AppJson, AuthorizedUser},
    model::{
        class::{
            ClassDetailResponse, ClassResponse, ClassesResponse, CreateClassRequest,
            UpdateClassRequest, UpdateClassRequestWithId,
        },
        SuccessResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{class::event::CreateClass, id::ClassId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_class_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ClassesResponse>> {
    let classes = registry
        .class_repository()
        .find_all()
        .await?
        .into_iter()
        .map(ClassResponse::from)
        .collect();
    Ok(Json(ClassesResponse { classes }))
}

pub async fn show_class(
    Path(class_id): Path<ClassId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ClassDetailResponse>> {
    let class = registry
        .class_repository()
        .find_by_id(class_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Class not found".into()))?;
    Ok(Json(ClassDetailResponse {
        class: class.into(),
    }))
}

pub async fn register_class(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateClassRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation("Forbidden".into()));
    }
    req.validate(&())?;
    let CreateClassRequest {
        name,
        description,
        capacity,
        room,
    } = req;
    let (Some(name), Some(room)) = (name, room) else {
        return Err(AppError::UnprocessableEntity(
            "Name and room are required".into(),
        ));
    };

    let event = CreateClass::new(
        name,
        description.unwrap_or_default(),
        capacity.unwrap_or(30),
        room,
        user.id(),
    );
    let class = registry.class_repository().create(event).await?;
    Ok((
        StatusCode::CREATED,
        Json(ClassDetailResponse {
            class: class.into(),
        }),
    ))
}

pub async fn update_class(
    user: AuthorizedUser,
    Path(class_id): Path<ClassId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateClassRequest>,
) -> AppResult<Json<ClassDetailResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation("Forbidden".into()));
    }
    req.validate(&())?;

    let event = UpdateClassRequestWithId::new(class_id, req).into();
    let class = registry
        .class_repository()
        .update(event)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Class not found".into()))?;
    Ok(Json(ClassDetailResponse {
        class: class.into(),
    }))
}

pub async fn delete_class(
    user: AuthorizedUser,
    Path(class_id): Path<ClassId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SuccessResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation("Forbidden".into()));
    }
    let deleted = registry.class_repository().delete(class_id).await?;
    if !deleted {
        return Err(AppError::EntityNotFound("Class not found".into()));
    }
    Ok(Json(SuccessResponse::ok()))
}
