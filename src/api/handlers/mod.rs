use crate::services::TournamentService;

pub mod admin;
pub mod matches;
pub mod players;
pub mod standings;

pub struct AppState {
    pub service: TournamentService,
}
