pub type PlayerId = i64;

/// Which metric orders the standings (and therefore the pairings):
/// wins descending, draw-aware score descending, or wins descending
/// with opponent match win average as tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingVariant {
    WinCount,
    Score,
    Omw,
}

impl RankingVariant {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "win-count" | "wins" => Some(RankingVariant::WinCount),
            "score" => Some(RankingVariant::Score),
            "omw" => Some(RankingVariant::Omw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RankingVariant::WinCount => "win-count",
            RankingVariant::Score => "score",
            RankingVariant::Omw => "omw",
        }
    }
}

#[derive(Debug, Clone)]
pub struct WinCountRow {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: i64,
    pub matches_played: i64,
}

#[derive(Debug, Clone)]
pub struct ScoreRow {
    pub player_id: PlayerId,
    pub name: String,
    pub score: f64,
    pub matches_played: i64,
}

#[derive(Debug, Clone)]
pub struct OmwRow {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: i64,
    pub omw: f64,
}
