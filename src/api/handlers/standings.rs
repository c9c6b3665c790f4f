use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{
    OmwStandingItem, PairingItem, PairingsResponse, ScoreStandingItem, UnpairedPlayer,
    WinCountStandingItem,
};
use crate::standings::RankingVariant;
use super::AppState;

/// GET /api/standings/:variant — each variant returns its own row shape.
pub async fn get_standings(
    State(state): State<Arc<AppState>>,
    Path(variant): Path<String>,
) -> impl IntoResponse {
    let Some(variant) = RankingVariant::parse(&variant) else {
        return (
            StatusCode::BAD_REQUEST,
            format!("Unknown ranking variant: {}", variant),
        )
            .into_response();
    };

    match variant {
        RankingVariant::WinCount => match state.service.win_count_standings() {
            Ok(rows) => {
                let items: Vec<WinCountStandingItem> = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, row)| WinCountStandingItem {
                        rank: (i + 1) as i64,
                        player_id: row.player_id,
                        name: row.name,
                        wins: row.wins,
                        matches_played: row.matches_played,
                    })
                    .collect();
                Json(items).into_response()
            }
            Err(e) => query_error(e),
        },
        RankingVariant::Score => match state.service.score_standings() {
            Ok(rows) => {
                let items: Vec<ScoreStandingItem> = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, row)| ScoreStandingItem {
                        rank: (i + 1) as i64,
                        player_id: row.player_id,
                        name: row.name,
                        score: row.score,
                        matches_played: row.matches_played,
                    })
                    .collect();
                Json(items).into_response()
            }
            Err(e) => query_error(e),
        },
        RankingVariant::Omw => match state.service.omw_standings() {
            Ok(rows) => {
                let items: Vec<OmwStandingItem> = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, row)| OmwStandingItem {
                        rank: (i + 1) as i64,
                        player_id: row.player_id,
                        name: row.name,
                        wins: row.wins,
                        omw: row.omw,
                    })
                    .collect();
                Json(items).into_response()
            }
            Err(e) => query_error(e),
        },
    }
}

/// GET /api/pairings/:variant
pub async fn get_pairings(
    State(state): State<Arc<AppState>>,
    Path(variant): Path<String>,
) -> impl IntoResponse {
    let Some(variant) = RankingVariant::parse(&variant) else {
        return (
            StatusCode::BAD_REQUEST,
            format!("Unknown ranking variant: {}", variant),
        )
            .into_response();
    };

    match state.service.pairings(variant) {
        Ok(round) => {
            let pairings: Vec<PairingItem> = round
                .pairings
                .into_iter()
                .map(|p| PairingItem {
                    first_id: p.first_id,
                    first_name: p.first_name,
                    second_id: p.second_id,
                    second_name: p.second_name,
                })
                .collect();
            let unpaired = round.unpaired.map(|seed| UnpairedPlayer {
                player_id: seed.player_id,
                name: seed.name,
            });
            Json(PairingsResponse { pairings, unpaired }).into_response()
        }
        Err(e) => query_error(e),
    }
}

fn query_error(e: anyhow::Error) -> axum::response::Response {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response()
}
