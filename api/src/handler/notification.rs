use crate::{
    extractor::AuthorizedUser,
    model::{
        notification::{NotificationResponse, NotificationsResponse},
        SuccessResponse,
    },
};
use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::id::NotificationId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_notification_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<NotificationsResponse>> {
    let notifications = registry
        .notification_repository()
        .find_by_user(user.id())
        .await?
        .into_iter()
        .map(NotificationResponse::from)
        .collect();
    Ok(Json(NotificationsResponse { notifications }))
}

pub async fn mark_notification_read(
    _user: AuthorizedUser,
    Path(notification_id): Path<NotificationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SuccessResponse>> {
    let marked = registry
        .notification_repository()
        .mark_read(notification_id)
        .await?;
    if !marked {
        return Err(AppError::EntityNotFound("Notification not found".into()));
    }
    Ok(Json(SuccessResponse::ok()))
}
