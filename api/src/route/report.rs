use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::report::build_report;

pub fn build_report_routers() -> Router<AppRegistry> {
    Router::new().route("/reports", post(build_report))
}
