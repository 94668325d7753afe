use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::user::{get_current_user, show_dashboard, show_history};

pub fn build_user_router() -> Router<AppRegistry> {
    Router::new()
        .route("/users/me", get(get_current_user))
        .route("/users/me/history", get(show_history))
        .route("/users/me/dashboard", get(show_dashboard))
}
