use anyhow::Result;

use crate::database::{self, DbPool};

use super::compute;
use super::types::{OmwRow, ScoreRow, WinCountRow};

/// Reads the player and match sets from storage and derives a ranking.
/// Standings are recomputed from the full match log on every call, so a
/// query always reflects exactly the matches recorded before it.
pub struct StandingsProvider {
    pool: DbPool,
}

impl StandingsProvider {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn win_count(&self) -> Result<Vec<WinCountRow>> {
        let (players, matches) = self.load_snapshot()?;
        Ok(compute::win_count_standings(&players, &matches))
    }

    pub fn score(&self) -> Result<Vec<ScoreRow>> {
        let (players, matches) = self.load_snapshot()?;
        Ok(compute::score_standings(&players, &matches))
    }

    pub fn omw(&self) -> Result<Vec<OmwRow>> {
        let (players, matches) = self.load_snapshot()?;
        Ok(compute::omw_standings(&players, &matches))
    }

    fn load_snapshot(
        &self,
    ) -> Result<(Vec<database::Player>, Vec<database::Match>)> {
        let mut conn = database::get_connection(&self.pool)?;
        let players = database::players::list_all(&mut conn)?;
        let matches = database::matches::list_all(&mut conn)?;
        Ok((players, matches))
    }
}
