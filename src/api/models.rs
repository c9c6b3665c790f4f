use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPlayerRequest {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMatchRequest {
    pub winner_id: i64,
    pub loser_id: i64,
    #[serde(default)]
    pub is_draw: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub player_id: i64,
    pub name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCountResponse {
    pub count: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub match_id: i64,
    pub winner_id: i64,
    pub loser_id: i64,
    pub is_draw: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinCountStandingItem {
    pub rank: i64,
    pub player_id: i64,
    pub name: String,
    pub wins: i64,
    pub matches_played: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreStandingItem {
    pub rank: i64,
    pub player_id: i64,
    pub name: String,
    pub score: f64,
    pub matches_played: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OmwStandingItem {
    pub rank: i64,
    pub player_id: i64,
    pub name: String,
    pub wins: i64,
    pub omw: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingItem {
    pub first_id: i64,
    pub first_name: String,
    pub second_id: i64,
    pub second_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnpairedPlayer {
    pub player_id: i64,
    pub name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingsResponse {
    pub pairings: Vec<PairingItem>,
    pub unpaired: Option<UnpairedPlayer>,
}
