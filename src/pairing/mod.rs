use log::warn;

use crate::standings::types::{OmwRow, PlayerId, ScoreRow, WinCountRow};

/// One entry of a ranked list, reduced to what pairing needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Seed {
    pub player_id: PlayerId,
    pub name: String,
}

/// A single next-round matchup.
#[derive(Debug, Clone, PartialEq)]
pub struct Pairing {
    pub first_id: PlayerId,
    pub first_name: String,
    pub second_id: PlayerId,
    pub second_name: String,
}

/// One round of pairings. `unpaired` carries the trailing player of an
/// odd-length ranking; callers decide what to do with them.
#[derive(Debug, Clone, PartialEq)]
pub struct PairingRound {
    pub pairings: Vec<Pairing>,
    pub unpaired: Option<Seed>,
}

/// Pairs consecutive entries of an already-ranked list: (1st, 2nd),
/// (3rd, 4th), and so on. Each player meets the nearest-ranked neighbour
/// still available, which is the Swiss-system goal of matching equal or
/// nearly-equal records. The input must already be sorted by the desired
/// metric, descending; no sorting happens here.
///
/// Pairing history is not consulted, so rematches are possible.
///
/// An odd-length input yields (N-1)/2 pairings and the last-ranked player
/// is returned in `unpaired` rather than dropped on the floor.
pub fn adjacent_pairs(seeds: &[Seed]) -> PairingRound {
    let mut chunks = seeds.chunks_exact(2);

    let pairings = chunks
        .by_ref()
        .map(|pair| Pairing {
            first_id: pair[0].player_id,
            first_name: pair[0].name.clone(),
            second_id: pair[1].player_id,
            second_name: pair[1].name.clone(),
        })
        .collect();

    let unpaired = chunks.remainder().first().cloned();
    if let Some(seed) = &unpaired {
        warn!(
            "Odd number of ranked players; {} (id {}) is left unpaired this round",
            seed.name, seed.player_id
        );
    }

    PairingRound { pairings, unpaired }
}

impl From<&WinCountRow> for Seed {
    fn from(row: &WinCountRow) -> Self {
        Seed {
            player_id: row.player_id,
            name: row.name.clone(),
        }
    }
}

impl From<&ScoreRow> for Seed {
    fn from(row: &ScoreRow) -> Self {
        Seed {
            player_id: row.player_id,
            name: row.name.clone(),
        }
    }
}

impl From<&OmwRow> for Seed {
    fn from(row: &OmwRow) -> Self {
        Seed {
            player_id: row.player_id,
            name: row.name.clone(),
        }
    }
}
