use anyhow::Result;

use swiss_tournament::cli::Command;
use swiss_tournament::{
    handle_count, handle_init, handle_pairings, handle_record, handle_register,
    handle_reset_matches, handle_reset_players, handle_serve, handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Init => handle_init(),
        Command::Register { name } => handle_register(name),
        Command::Record {
            winner_id,
            loser_id,
            draw,
        } => handle_record(*winner_id, *loser_id, *draw),
        Command::Count => handle_count(),
        Command::Standings { variant } => handle_standings(*variant),
        Command::Pairings { variant } => handle_pairings(*variant),
        Command::ResetMatches => handle_reset_matches(),
        Command::ResetPlayers => handle_reset_players(),
    }
}
