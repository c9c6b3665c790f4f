use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    admin::{reset_matches, reset_players},
    matches::record_match,
    players::{count_players, register_player},
    standings::{get_pairings, get_standings},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/players", post(register_player))
        .route("/api/players/count", get(count_players))
        .route("/api/matches", post(record_match))
        .route("/api/standings/:variant", get(get_standings))
        .route("/api/pairings/:variant", get(get_pairings))
        .route("/api/admin/reset-matches", post(reset_matches))
        .route("/api/admin/reset-players", post(reset_players))
        .with_state(state)
}
