use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use super::AppState;

pub async fn reset_matches(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.reset_matches() {
        Ok(()) => (StatusCode::OK, "Matches cleared").into_response(),
        Err(e) => {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response()
        }
    }
}

pub async fn reset_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.reset_players() {
        Ok(()) => (StatusCode::OK, "Players cleared").into_response(),
        Err(e) => {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response()
        }
    }
}
