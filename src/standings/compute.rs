use std::collections::HashMap;

use crate::database::models::{Match, Player};

use super::types::{OmwRow, PlayerId, ScoreRow, WinCountRow};

/// Per-player totals aggregated from the match log.
#[derive(Debug, Default, Clone)]
struct Tally {
    wins: i64,
    draws: i64,
    played: i64,
}

fn build_tallies(players: &[Player], matches: &[Match]) -> HashMap<PlayerId, Tally> {
    let mut tallies: HashMap<PlayerId, Tally> = players
        .iter()
        .map(|p| (p.id, Tally::default()))
        .collect();

    for m in matches {
        for id in [m.winner_id, m.loser_id] {
            let tally = tallies.entry(id).or_default();
            tally.played += 1;
            if m.is_draw {
                tally.draws += 1;
            }
        }
        if !m.is_draw {
            tallies.entry(m.winner_id).or_default().wins += 1;
        }
    }

    tallies
}

/// Opponents faced by each player, one entry per encounter. A repeated
/// opponent appears once per match played, which weights their win record
/// accordingly in the OMW average.
fn build_opponents(matches: &[Match]) -> HashMap<PlayerId, Vec<PlayerId>> {
    let mut opponents: HashMap<PlayerId, Vec<PlayerId>> = HashMap::new();
    for m in matches {
        opponents.entry(m.winner_id).or_default().push(m.loser_id);
        opponents.entry(m.loser_id).or_default().push(m.winner_id);
    }
    opponents
}

/// Ranking by plain win count, descending. Ties keep registration order.
pub fn win_count_standings(players: &[Player], matches: &[Match]) -> Vec<WinCountRow> {
    let tallies = build_tallies(players, matches);

    let mut rows: Vec<WinCountRow> = players
        .iter()
        .map(|p| {
            let tally = tallies.get(&p.id).cloned().unwrap_or_default();
            WinCountRow {
                player_id: p.id,
                name: p.name.clone(),
                wins: tally.wins,
                matches_played: tally.played,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.wins.cmp(&a.wins));
    rows
}

/// Draw-aware ranking: score = 1 per win + 0.5 per draw, descending.
pub fn score_standings(players: &[Player], matches: &[Match]) -> Vec<ScoreRow> {
    let tallies = build_tallies(players, matches);

    let mut rows: Vec<ScoreRow> = players
        .iter()
        .map(|p| {
            let tally = tallies.get(&p.id).cloned().unwrap_or_default();
            ScoreRow {
                player_id: p.id,
                name: p.name.clone(),
                score: tally.wins as f64 + 0.5 * tally.draws as f64,
                matches_played: tally.played,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.score.total_cmp(&a.score));
    rows
}

/// Win-count ranking refined by opponent match win average: wins
/// descending, then the average win count of all opponents faced,
/// descending. Players with no matches get an OMW of 0.
pub fn omw_standings(players: &[Player], matches: &[Match]) -> Vec<OmwRow> {
    let tallies = build_tallies(players, matches);
    let opponents = build_opponents(matches);

    let mut rows: Vec<OmwRow> = players
        .iter()
        .map(|p| {
            let tally = tallies.get(&p.id).cloned().unwrap_or_default();
            OmwRow {
                player_id: p.id,
                name: p.name.clone(),
                wins: tally.wins,
                omw: opponent_win_average(p.id, &opponents, &tallies),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.wins.cmp(&a.wins).then(b.omw.total_cmp(&a.omw)));
    rows
}

fn opponent_win_average(
    player_id: PlayerId,
    opponents: &HashMap<PlayerId, Vec<PlayerId>>,
    tallies: &HashMap<PlayerId, Tally>,
) -> f64 {
    let Some(faced) = opponents.get(&player_id) else {
        return 0.0;
    };
    if faced.is_empty() {
        return 0.0;
    }

    let total_wins: i64 = faced
        .iter()
        .map(|id| tallies.get(id).map_or(0, |t| t.wins))
        .sum();

    total_wins as f64 / faced.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: i64, name: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
            created_at: None,
        }
    }

    fn decisive(winner_id: i64, loser_id: i64) -> Match {
        Match {
            id: 0,
            winner_id,
            loser_id,
            is_draw: false,
            created_at: None,
        }
    }

    fn draw(first: i64, second: i64) -> Match {
        Match {
            id: 0,
            winner_id: first,
            loser_id: second,
            is_draw: true,
            created_at: None,
        }
    }

    fn four_players() -> Vec<Player> {
        vec![
            player(1, "Alice"),
            player(2, "Bob"),
            player(3, "Carol"),
            player(4, "Dave"),
        ]
    }

    #[test]
    fn win_count_orders_winners_first() {
        let players = four_players();
        let matches = vec![decisive(1, 2), decisive(3, 4)];

        let rows = win_count_standings(&players, &matches);

        let ids: Vec<i64> = rows.iter().map(|r| r.player_id).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
        assert_eq!(rows[0].wins, 1);
        assert_eq!(rows[2].wins, 0);
        assert!(rows.iter().all(|r| r.matches_played == 1));
    }

    #[test]
    fn win_count_with_no_matches_zeroes_everyone() {
        let players = vec![player(1, "Alice"), player(2, "Bob")];

        let rows = win_count_standings(&players, &[]);

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.wins == 0 && r.matches_played == 0));
        // Registration order survives the stable sort
        assert_eq!(rows[0].player_id, 1);
    }

    #[test]
    fn draw_counts_as_half_a_win_in_score() {
        let players = four_players();
        let matches = vec![decisive(1, 2), draw(3, 4)];

        let rows = score_standings(&players, &matches);

        assert_eq!(rows[0].player_id, 1);
        assert_eq!(rows[0].score, 1.0);
        let carol = rows.iter().find(|r| r.player_id == 3).unwrap();
        let dave = rows.iter().find(|r| r.player_id == 4).unwrap();
        assert_eq!(carol.score, 0.5);
        assert_eq!(dave.score, 0.5);
        let bob = rows.iter().find(|r| r.player_id == 2).unwrap();
        assert_eq!(bob.score, 0.0);
    }

    #[test]
    fn total_score_equals_matches_played() {
        let players = four_players();
        let matches = vec![decisive(1, 2), draw(3, 4), decisive(1, 3), draw(2, 4)];

        let rows = score_standings(&players, &matches);

        let total: f64 = rows.iter().map(|r| r.score).sum();
        assert_eq!(total, matches.len() as f64);
    }

    #[test]
    fn draw_is_not_a_win_for_either_participant() {
        let players = vec![player(1, "Alice"), player(2, "Bob")];
        let matches = vec![draw(1, 2)];

        let rows = win_count_standings(&players, &matches);

        assert!(rows.iter().all(|r| r.wins == 0 && r.matches_played == 1));
    }

    #[test]
    fn omw_breaks_ties_between_equal_win_counts() {
        // A beats B, C beats D, then A beats C. Zero-win group is B and
        // D: B faced A (2 wins) for an OMW of 2.0, D faced C (1 win) for
        // 1.0, so B ranks ahead of D.
        let players = four_players();
        let matches = vec![decisive(1, 2), decisive(3, 4), decisive(1, 3)];

        let rows = omw_standings(&players, &matches);

        let ids: Vec<i64> = rows.iter().map(|r| r.player_id).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);

        let bob = rows.iter().find(|r| r.player_id == 2).unwrap();
        let dave = rows.iter().find(|r| r.player_id == 4).unwrap();
        assert_eq!(bob.omw, 2.0);
        assert_eq!(dave.omw, 1.0);
        assert!(bob.omw > dave.omw);
    }

    #[test]
    fn omw_never_reorders_distinct_win_counts() {
        let players = four_players();
        let matches = vec![
            decisive(1, 2),
            decisive(1, 3),
            decisive(1, 4),
            decisive(2, 3),
        ];

        let rows = omw_standings(&players, &matches);

        for window in rows.windows(2) {
            assert!(window[0].wins >= window[1].wins);
        }
        assert_eq!(rows[0].player_id, 1);
        assert_eq!(rows[1].player_id, 2);
    }

    #[test]
    fn repeated_opponent_weights_omw_per_encounter() {
        // B plays A twice and C once. A has 2 wins, C has 1.
        // B's OMW = (2 + 2 + 1) / 3.
        let players = vec![player(1, "A"), player(2, "B"), player(3, "C")];
        let matches = vec![
            decisive(1, 2),
            decisive(1, 2),
            decisive(3, 2),
        ];

        let rows = omw_standings(&players, &matches);

        let b = rows.iter().find(|r| r.player_id == 2).unwrap();
        assert_eq!(b.omw, 5.0 / 3.0);
    }
}
