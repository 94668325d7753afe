use axum::Router;
use registry::AppRegistry;

use super::{
    auth::build_auth_routers, health::build_health_check_routers,
    insight::build_insight_routers, slot::build_slot_routers, user::build_user_router,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_auth_routers())
        .merge(build_user_router())
        .merge(build_slot_routers())
        .merge(build_insight_routers());
    Router::new().nest("/api/v1", router)
}
