pub mod compute;
pub mod provider;
pub mod types;

pub use provider::StandingsProvider;
pub use types::{OmwRow, PlayerId, RankingVariant, ScoreRow, WinCountRow};
