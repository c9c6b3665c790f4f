pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod pairing;
pub mod sanitize;
pub mod services;
pub mod standings;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::services::server::ServerService;
use crate::services::tournament::TournamentService;
use crate::standings::RankingVariant;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_init() -> Result<()> {
    open_service()?.init_schema()
}

pub fn handle_register(name: &str) -> Result<()> {
    let player = open_service()?.register_player(name)?;
    println!("Registered {} with id {}", player.name, player.id);
    Ok(())
}

pub fn handle_record(winner_id: i64, loser_id: i64, draw: bool) -> Result<()> {
    let m = open_service()?.record_match(winner_id, loser_id, draw)?;
    if m.is_draw {
        println!("Recorded draw between {} and {}", m.winner_id, m.loser_id);
    } else {
        println!("Recorded win for {} over {}", m.winner_id, m.loser_id);
    }
    Ok(())
}

pub fn handle_count() -> Result<()> {
    let count = open_service()?.count_players()?;
    println!("{}", count);
    Ok(())
}

pub fn handle_standings(variant: RankingVariant) -> Result<()> {
    let service = open_service()?;
    match variant {
        RankingVariant::WinCount => {
            for (i, row) in service.win_count_standings()?.iter().enumerate() {
                println!(
                    "{:>3}. {} (id {}) - {} wins, {} played",
                    i + 1,
                    row.name,
                    row.player_id,
                    row.wins,
                    row.matches_played
                );
            }
        }
        RankingVariant::Score => {
            for (i, row) in service.score_standings()?.iter().enumerate() {
                println!(
                    "{:>3}. {} (id {}) - {} points, {} played",
                    i + 1,
                    row.name,
                    row.player_id,
                    row.score,
                    row.matches_played
                );
            }
        }
        RankingVariant::Omw => {
            for (i, row) in service.omw_standings()?.iter().enumerate() {
                println!(
                    "{:>3}. {} (id {}) - {} wins, {:.3} omw",
                    i + 1,
                    row.name,
                    row.player_id,
                    row.wins,
                    row.omw
                );
            }
        }
    }
    Ok(())
}

pub fn handle_pairings(variant: RankingVariant) -> Result<()> {
    let round = open_service()?.pairings(variant)?;
    for (i, p) in round.pairings.iter().enumerate() {
        println!(
            "{:>3}. {} (id {}) vs {} (id {})",
            i + 1,
            p.first_name,
            p.first_id,
            p.second_name,
            p.second_id
        );
    }
    if let Some(seed) = &round.unpaired {
        println!("Unpaired: {} (id {})", seed.name, seed.player_id);
    }
    Ok(())
}

pub fn handle_reset_matches() -> Result<()> {
    open_service()?.reset_matches()?;
    println!("All match records cleared");
    Ok(())
}

pub fn handle_reset_players() -> Result<()> {
    open_service()?.reset_players()?;
    println!("All players cleared");
    Ok(())
}

fn open_service() -> Result<TournamentService> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.database.path)?;
    TournamentService::new(pool)
}
