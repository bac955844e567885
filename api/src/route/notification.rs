use axum::{
    routing::{get, patch},
    Router,
};
use registry::AppRegistry;

use crate::handler::notification::{mark_notification_read, show_notification_list};

pub fn build_notification_routers() -> Router<AppRegistry> {
    let notification_routers = Router::new()
        .route("/", get(show_notification_list))
        .route("/:notification_id", patch(mark_notification_read));

    Router::new().nest("/notifications", notification_routers)
}
