use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::slot::{
    book_slot, clear_all_slots, release_slot, show_lot_summaries, show_slot, show_slot_list,
};

pub fn build_slot_routers() -> Router<AppRegistry> {
    let slots_routers = Router::new()
        .route("/", get(show_slot_list))
        .route("/lots", get(show_lot_summaries))
        .route("/clear", post(clear_all_slots))
        .route("/:slot_id", get(show_slot))
        .route("/:slot_id/book", post(book_slot))
        .route("/:slot_id/release", post(release_slot));

    Router::new().nest("/slots", slots_routers)
}
