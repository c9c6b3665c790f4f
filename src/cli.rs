use clap::builder::PossibleValue;
use clap::{Parser, Subcommand, ValueEnum};

use crate::standings::RankingVariant;

// Keeps the standings module free of CLI concerns
impl ValueEnum for RankingVariant {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            RankingVariant::WinCount,
            RankingVariant::Score,
            RankingVariant::Omw,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = PossibleValue::new(self.as_str());
        Some(match self {
            RankingVariant::WinCount => value.help("Wins descending"),
            RankingVariant::Score => {
                value.help("Score descending, where a win is worth 1 and a draw 0.5")
            }
            RankingVariant::Omw => {
                value.help("Wins descending, opponent match win average as tiebreak")
            }
        })
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "swiss-system tournament tracker")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the JSON API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Create the database schema (drops existing data)
    Init,
    /// Register a player
    Register {
        /// Display name; markup is stripped before storage
        name: String,
    },
    /// Record a match outcome
    Record {
        /// Id of the winner (or first participant of a draw)
        winner_id: i64,
        /// Id of the loser (or second participant of a draw)
        loser_id: i64,
        /// Record the match as a draw
        #[arg(long)]
        draw: bool,
    },
    /// Print the number of registered players
    Count,
    /// Print current standings
    Standings {
        #[arg(short, long, value_enum, default_value_t = RankingVariant::WinCount)]
        variant: RankingVariant,
    },
    /// Print next-round pairings derived from current standings
    Pairings {
        #[arg(short, long, value_enum, default_value_t = RankingVariant::WinCount)]
        variant: RankingVariant,
    },
    /// Clear all match records
    ResetMatches,
    /// Clear all players (and with them, all matches)
    ResetPlayers,
}
