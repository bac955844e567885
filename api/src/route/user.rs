use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{delete_user, register_user, show_user, show_user_list, update_user};

pub fn build_user_routers() -> Router<AppRegistry> {
    let user_routers = Router::new()
        .route("/", get(show_user_list))
        .route("/", post(register_user))
        .route("/:user_id", get(show_user))
        .route("/:user_id", put(update_user))
        .route("/:user_id", delete(delete_user));

    Router::new().nest("/users", user_routers)
}
