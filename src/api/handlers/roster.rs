use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use std::sync::Arc;

use super::AppState;
use crate::render::{render_page, HtmlContainer};
use crate::services::roster::RenderOutcome;

/// Roster page. Upstream failures render the error state, still with 200.
pub async fn get_roster_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut container = HtmlContainer::new(state.config.render.container_id.clone());

    let last_updated = match state.roster.load_into(&mut container).await {
        RenderOutcome::Rendered { last_updated, .. } => last_updated,
        RenderOutcome::Failed => None,
    };

    match render_page(&container, last_updated) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            log::error!("Failed to render roster page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error loading data.").into_response()
        }
    }
}

pub async fn get_roster_cards(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.roster.load_cards().await {
        Ok((cards, _)) => Json(cards).into_response(),
        Err(e) => {
            log::error!("Roster API failed: {}", e);
            (StatusCode::BAD_GATEWAY, "Error loading data.").into_response()
        }
    }
}
