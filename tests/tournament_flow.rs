use swiss_tournament::database;
use swiss_tournament::services::TournamentService;
use swiss_tournament::standings::RankingVariant;

fn fresh_service() -> TournamentService {
    let pool = database::create_memory_pool().unwrap();
    let service = TournamentService::new(pool).unwrap();
    service.init_schema().unwrap();
    service
}

#[test]
fn register_count_and_reset_cycle() {
    let service = fresh_service();
    assert_eq!(service.count_players().unwrap(), 0);

    service.register_player("Melpomene Murray").unwrap();
    service.register_player("Randy Schwartz").unwrap();
    assert_eq!(service.count_players().unwrap(), 2);

    service.reset_players().unwrap();
    assert_eq!(service.count_players().unwrap(), 0);
}

#[test]
fn names_are_sanitized_before_storage() {
    let service = fresh_service();
    let player = service
        .register_player("<b>Bruno</b> <script>alert('x')</script>Walton")
        .unwrap();
    assert_eq!(player.name, "Bruno Walton");
}

#[test]
fn duplicate_names_are_allowed() {
    let service = fresh_service();
    let first = service.register_player("Jane Doe").unwrap();
    let second = service.register_player("Jane Doe").unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(service.count_players().unwrap(), 2);
}

#[test]
fn recording_a_match_with_unknown_player_fails() {
    let service = fresh_service();
    let player = service.register_player("Only One").unwrap();
    let result = service.record_match(player.id, player.id + 999, false);
    assert!(result.is_err());
}

#[test]
fn winners_rank_above_losers_and_pair_together() {
    let service = fresh_service();
    let a = service.register_player("A").unwrap();
    let b = service.register_player("B").unwrap();
    let c = service.register_player("C").unwrap();
    let d = service.register_player("D").unwrap();

    service.record_match(a.id, b.id, false).unwrap();
    service.record_match(c.id, d.id, false).unwrap();

    let rows = service.win_count_standings().unwrap();
    let wins: Vec<i64> = rows.iter().map(|r| r.wins).collect();
    assert_eq!(wins, vec![1, 1, 0, 0]);

    let round = service.pairings(RankingVariant::WinCount).unwrap();
    assert_eq!(round.pairings.len(), 2);
    assert!(round.unpaired.is_none());

    // The two winners meet, and so do the two losers
    let first = &round.pairings[0];
    let second = &round.pairings[1];
    let mut winners = [first.first_id, first.second_id];
    winners.sort_unstable();
    assert_eq!(winners, [a.id, c.id]);
    let mut losers = [second.first_id, second.second_id];
    losers.sort_unstable();
    assert_eq!(losers, [b.id, d.id]);
}

#[test]
fn two_players_with_no_matches_get_one_pairing() {
    let service = fresh_service();
    let a = service.register_player("A").unwrap();
    let b = service.register_player("B").unwrap();

    let rows = service.win_count_standings().unwrap();
    assert!(rows.iter().all(|r| r.wins == 0));

    let round = service.pairings(RankingVariant::WinCount).unwrap();
    assert_eq!(round.pairings.len(), 1);
    let pairing = &round.pairings[0];
    let mut ids = [pairing.first_id, pairing.second_id];
    ids.sort_unstable();
    assert_eq!(ids, [a.id, b.id]);
}

#[test]
fn odd_player_count_reports_the_unpaired_player() {
    let service = fresh_service();
    for name in ["A", "B", "C"] {
        service.register_player(name).unwrap();
    }

    let round = service.pairings(RankingVariant::Score).unwrap();
    assert_eq!(round.pairings.len(), 1);
    assert!(round.unpaired.is_some());
}

#[test]
fn score_standings_split_draws_evenly() {
    let service = fresh_service();
    let a = service.register_player("A").unwrap();
    let b = service.register_player("B").unwrap();
    let c = service.register_player("C").unwrap();
    let d = service.register_player("D").unwrap();

    service.record_match(a.id, b.id, false).unwrap();
    service.record_match(c.id, d.id, true).unwrap();

    let rows = service.score_standings().unwrap();
    let total: f64 = rows.iter().map(|r| r.score).sum();
    assert_eq!(total, 2.0);

    assert_eq!(rows[0].player_id, a.id);
    assert_eq!(rows[0].score, 1.0);
    let bottom = rows.last().unwrap();
    assert_eq!(bottom.player_id, b.id);
    assert_eq!(bottom.score, 0.0);
}

#[test]
fn omw_orders_equal_win_counts_by_opponent_strength() {
    let service = fresh_service();
    let a = service.register_player("A").unwrap();
    let b = service.register_player("B").unwrap();
    let c = service.register_player("C").unwrap();
    let d = service.register_player("D").unwrap();

    service.record_match(a.id, b.id, false).unwrap();
    service.record_match(c.id, d.id, false).unwrap();
    service.record_match(a.id, c.id, false).unwrap();

    let rows = service.omw_standings().unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.player_id).collect();
    // B lost only to A (2 wins), D lost only to C (1 win), so B edges D
    assert_eq!(ids, vec![a.id, c.id, b.id, d.id]);
}

#[test]
fn standings_are_idempotent_between_writes() {
    let service = fresh_service();
    let a = service.register_player("A").unwrap();
    let b = service.register_player("B").unwrap();
    service.record_match(a.id, b.id, false).unwrap();

    let first: Vec<(i64, i64)> = service
        .win_count_standings()
        .unwrap()
        .iter()
        .map(|r| (r.player_id, r.wins))
        .collect();
    let second: Vec<(i64, i64)> = service
        .win_count_standings()
        .unwrap()
        .iter()
        .map(|r| (r.player_id, r.wins))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn reset_matches_keeps_players_but_clears_history() {
    let service = fresh_service();
    let a = service.register_player("A").unwrap();
    let b = service.register_player("B").unwrap();
    service.record_match(a.id, b.id, false).unwrap();

    service.reset_matches().unwrap();

    assert_eq!(service.count_players().unwrap(), 2);
    let rows = service.win_count_standings().unwrap();
    assert!(rows.iter().all(|r| r.wins == 0 && r.matches_played == 0));
}
