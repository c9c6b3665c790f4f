pub mod server;
pub mod tournament;

pub use server::ServerService;
pub use tournament::TournamentService;
