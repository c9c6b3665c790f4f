use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Match {
    pub id: i64,
    pub winner_id: i64,
    pub loser_id: i64,
    pub is_draw: bool,
    pub created_at: Option<NaiveDateTime>,
}
