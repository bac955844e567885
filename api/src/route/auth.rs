use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::auth::{login, login_face, logout, signup, whoami};

pub fn build_auth_routers() -> Router<AppRegistry> {
    let auth_routers = Router::new()
        .route("/login", post(login))
        .route("/login-face", post(login_face))
        .route("/signup", post(signup))
        .route("/me", get(whoami))
        .route("/logout", post(logout));

    Router::new().nest("/auth", auth_routers)
}
