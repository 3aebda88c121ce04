use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::api::handlers::{
    roster::{get_roster_cards, get_roster_page},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .route("/", get(get_roster_page))
        .route("/api/roster", get(get_roster_cards))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}
