use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{MatchResponse, RecordMatchRequest};
use super::AppState;

pub async fn record_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecordMatchRequest>,
) -> impl IntoResponse {
    match state
        .service
        .record_match(request.winner_id, request.loser_id, request.is_draw)
    {
        Ok(m) => (
            StatusCode::CREATED,
            Json(MatchResponse {
                match_id: m.id,
                winner_id: m.winner_id,
                loser_id: m.loser_id,
                is_draw: m.is_draw,
            }),
        )
            .into_response(),
        Err(e) if is_constraint_violation(&e) => (
            StatusCode::BAD_REQUEST,
            "Unknown player id in match record".to_string(),
        )
            .into_response(),
        Err(e) => {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response()
        }
    }
}

/// Unknown player ids surface as SQLite foreign key failures.
fn is_constraint_violation(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<rusqlite::Error>(),
            Some(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    })
}
