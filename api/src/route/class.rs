use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::class::{
    delete_class, register_class, show_class, show_class_list, update_class,
};

pub fn build_class_routers() -> Router<AppRegistry> {
    let class_routers = Router::new()
        .route("/", get(show_class_list))
        .route("/", post(register_class))
        .route("/:class_id", get(show_class))
        .route("/:class_id", put(update_class))
        .route("/:class_id", delete(delete_class));

    Router::new().nest("/classes", class_routers)
}
