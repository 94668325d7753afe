use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::insight::{show_insight, show_report};

pub fn build_insight_routers() -> Router<AppRegistry> {
    let insight_routers = Router::new()
        .route("/", get(show_insight))
        .route("/report", get(show_report));

    Router::new().nest("/insight", insight_routers)
}
