use anyhow::Result;
use log::info;

use crate::database::{self, DbPool, Match, Player};
use crate::pairing::{self, PairingRound, Seed};
use crate::sanitize::NameSanitizer;
use crate::standings::{OmwRow, RankingVariant, ScoreRow, StandingsProvider, WinCountRow};

/// The tournament boundary: registration, match recording, standings and
/// next-round pairings. Every operation acquires its own storage handle
/// from the pool and commits independently; there is no state shared
/// across calls beyond the database itself.
pub struct TournamentService {
    pool: DbPool,
    standings: StandingsProvider,
    sanitizer: NameSanitizer,
}

impl TournamentService {
    pub fn new(pool: DbPool) -> Result<Self> {
        Ok(Self {
            standings: StandingsProvider::new(pool.clone()),
            sanitizer: NameSanitizer::new()?,
            pool,
        })
    }

    /// Creates the schema, dropping any existing players and matches.
    pub fn init_schema(&self) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        database::setup::reset_database(&mut conn)
    }

    /// Registers a player under a sanitized name. Names need not be
    /// unique; the database assigns the id.
    pub fn register_player(&self, name: &str) -> Result<Player> {
        let clean_name = self.sanitizer.clean(name);
        let mut conn = database::get_connection(&self.pool)?;
        let player = database::players::insert_player(&mut conn, &clean_name)?;
        info!("Registered player {} (id {})", player.name, player.id);
        Ok(player)
    }

    pub fn count_players(&self) -> Result<i64> {
        let mut conn = database::get_connection(&self.pool)?;
        database::players::count(&mut conn)
    }

    /// Appends one match outcome. Unknown player ids are rejected by the
    /// schema's foreign keys, not checked here.
    pub fn record_match(&self, winner_id: i64, loser_id: i64, is_draw: bool) -> Result<Match> {
        let mut conn = database::get_connection(&self.pool)?;
        let m = database::matches::insert_match(&mut conn, winner_id, loser_id, is_draw)?;
        info!(
            "Recorded match {} vs {} (draw: {})",
            m.winner_id, m.loser_id, m.is_draw
        );
        Ok(m)
    }

    pub fn reset_matches(&self) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let removed = database::matches::delete_all(&mut conn)?;
        info!("Cleared {} match records", removed);
        Ok(())
    }

    /// Clears all players; their matches cascade away with them.
    pub fn reset_players(&self) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let removed = database::players::delete_all(&mut conn)?;
        info!("Cleared {} players", removed);
        Ok(())
    }

    pub fn win_count_standings(&self) -> Result<Vec<WinCountRow>> {
        self.standings.win_count()
    }

    pub fn score_standings(&self) -> Result<Vec<ScoreRow>> {
        self.standings.score()
    }

    pub fn omw_standings(&self) -> Result<Vec<OmwRow>> {
        self.standings.omw()
    }

    /// Next-round pairings: fetch the ranking for the chosen variant and
    /// pair adjacent positions.
    pub fn pairings(&self, variant: RankingVariant) -> Result<PairingRound> {
        let seeds: Vec<Seed> = match variant {
            RankingVariant::WinCount => {
                self.standings.win_count()?.iter().map(Seed::from).collect()
            }
            RankingVariant::Score => {
                self.standings.score()?.iter().map(Seed::from).collect()
            }
            RankingVariant::Omw => {
                self.standings.omw()?.iter().map(Seed::from).collect()
            }
        };

        Ok(pairing::adjacent_pairs(&seeds))
    }
}
