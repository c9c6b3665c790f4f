use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{PlayerCountResponse, PlayerResponse, RegisterPlayerRequest};
use super::AppState;

pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterPlayerRequest>,
) -> impl IntoResponse {
    match state.service.register_player(&request.name) {
        Ok(player) => (
            StatusCode::CREATED,
            Json(PlayerResponse {
                player_id: player.id,
                name: player.name,
            }),
        )
            .into_response(),
        Err(e) => {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response()
        }
    }
}

pub async fn count_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.count_players() {
        Ok(count) => Json(PlayerCountResponse { count }).into_response(),
        Err(e) => {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response()
        }
    }
}
