//! Integration tests for race points and match aggregation.

use proptest::prelude::*;
use race_tournament::{
    calculate_match_score, calculate_race_points, Player, PlayerId, PointsMap, RaceResult,
    StageConfig,
};
use std::collections::HashMap;
use uuid::Uuid;

fn roster(players: &[Player]) -> HashMap<PlayerId, Player> {
    players.iter().map(|p| (p.id, p.clone())).collect()
}

fn race(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn points_of(results: &[RaceResult], id: PlayerId) -> u32 {
    results.iter().find(|r| r.player_id == id).unwrap().points_awarded
}

#[test]
fn default_map_by_rank_and_zero_beyond() {
    let players: Vec<Player> = (0..6).map(|i| Player::new(format!("P{i}"))).collect();
    let results: Vec<RaceResult> = players
        .iter()
        .enumerate()
        .map(|(i, p)| RaceResult::new(race(1), p.id, i as u32 + 1))
        .collect();

    let scored = calculate_race_points(results, &roster(&players), &StageConfig::default());
    let points: Vec<u32> = scored.iter().map(|r| r.points_awarded).collect();
    assert_eq!(points, vec![9, 5, 3, 2, 1, 0]);
}

#[test]
fn results_come_back_sorted_by_rank() {
    let a = Player::new("A");
    let b = Player::new("B");
    let c = Player::new("C");
    let results = vec![
        RaceResult::new(race(1), c.id, 3),
        RaceResult::new(race(1), a.id, 1),
        RaceResult::new(race(1), b.id, 2),
    ];
    let scored = calculate_race_points(results, &roster(&[a.clone(), b, c]), &StageConfig::default());
    assert_eq!(scored[0].player_id, a.id);
    assert_eq!(scored.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn npc_scores_normally_unless_exclusion_enabled() {
    let bot = Player::npc("Bot");
    let a = Player::new("A");
    let b = Player::new("B");
    let players = roster(&[bot.clone(), a.clone(), b.clone()]);
    let results = vec![
        RaceResult::new(race(1), bot.id, 1),
        RaceResult::new(race(1), a.id, 2),
        RaceResult::new(race(1), b.id, 3),
    ];

    let scored = calculate_race_points(results.clone(), &players, &StageConfig::default());
    assert_eq!(points_of(&scored, bot.id), 9);
    assert_eq!(points_of(&scored, a.id), 5);

    let config = StageConfig {
        exclude_npcs: true,
        ..StageConfig::default()
    };
    let scored = calculate_race_points(results, &players, &config);
    assert_eq!(points_of(&scored, bot.id), 0);
    assert_eq!(points_of(&scored, a.id), 9);
    assert_eq!(points_of(&scored, b.id), 5);
}

#[test]
fn unknown_player_is_excluded_when_exclusion_enabled() {
    let a = Player::new("A");
    let stranger = Uuid::new_v4();
    let config = StageConfig {
        exclude_npcs: true,
        ..StageConfig::default()
    };
    let results = vec![
        RaceResult::new(race(1), stranger, 1),
        RaceResult::new(race(1), a.id, 2),
    ];
    let scored = calculate_race_points(results, &roster(&[a.clone()]), &config);
    assert_eq!(points_of(&scored, stranger), 0);
    assert_eq!(points_of(&scored, a.id), 9);
}

#[test]
fn custom_points_map_is_used() {
    let a = Player::new("A");
    let b = Player::new("B");
    let config = StageConfig {
        points_map: PointsMap::new([(1, 12), (2, 7)]),
        ..StageConfig::default()
    };
    let results = vec![
        RaceResult::new(race(1), a.id, 1),
        RaceResult::new(race(1), b.id, 2),
    ];
    let scored = calculate_race_points(results, &roster(&[a.clone(), b.clone()]), &config);
    assert_eq!(points_of(&scored, a.id), 12);
    assert_eq!(points_of(&scored, b.id), 7);
}

#[test]
fn ace_bonus_for_winning_every_race() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let results = vec![
        RaceResult::scored(race(1), a, 1, 9),
        RaceResult::scored(race(1), b, 2, 5),
        RaceResult::scored(race(2), a, 1, 9),
        RaceResult::scored(race(2), b, 2, 5),
    ];
    let config = StageConfig {
        ace_bonus_points: 7,
        ..StageConfig::default()
    };

    let scores = calculate_match_score(&results, &config);
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].player_id, a);
    assert_eq!(scores[0].total_points, 25);
    assert_eq!(scores[0].wins, 2);
    assert!(scores[0].is_ace);
    assert_eq!(scores[1].player_id, b);
    assert_eq!(scores[1].total_points, 10);
    assert_eq!(scores[1].wins, 0);
    assert!(!scores[1].is_ace);
}

#[test]
fn no_ace_without_a_strict_majority() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let results = vec![
        RaceResult::scored(race(1), a, 1, 9),
        RaceResult::scored(race(1), b, 2, 5),
        RaceResult::scored(race(2), b, 1, 9),
        RaceResult::scored(race(2), a, 2, 5),
    ];
    let config = StageConfig {
        ace_bonus_points: 7,
        ..StageConfig::default()
    };
    let scores = calculate_match_score(&results, &config);
    assert!(scores.iter().all(|s| !s.is_ace && s.wins == 1 && s.total_points == 14));
}

#[test]
fn race_without_positive_points_awards_no_win() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let results = vec![
        RaceResult::scored(race(1), a, 1, 0),
        RaceResult::scored(race(1), b, 2, 0),
    ];
    let scores = calculate_match_score(&results, &StageConfig::default());
    assert!(scores.iter().all(|s| s.wins == 0 && !s.is_ace));
}

#[test]
fn tied_top_score_gives_every_leader_a_win() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let c = Uuid::new_v4();
    let results = vec![
        RaceResult::scored(race(1), a, 1, 9),
        RaceResult::scored(race(1), b, 2, 9),
        RaceResult::scored(race(1), c, 3, 3),
    ];
    let scores = calculate_match_score(&results, &StageConfig::default());
    let wins: HashMap<PlayerId, u32> = scores.iter().map(|s| (s.player_id, s.wins)).collect();
    assert_eq!(wins[&a], 1);
    assert_eq!(wins[&b], 1);
    assert_eq!(wins[&c], 0);
}

fn three_race_match() -> Vec<RaceResult> {
    let ids = [Uuid::from_u128(10), Uuid::from_u128(11), Uuid::from_u128(12)];
    let table = [[9, 5, 3], [5, 9, 3], [9, 3, 5]];
    let mut results = Vec::new();
    for (r, row) in table.iter().enumerate() {
        for (p, &pts) in row.iter().enumerate() {
            results.push(RaceResult::scored(race(r as u128 + 1), ids[p], 1, pts));
        }
    }
    results
}

proptest! {
    #[test]
    fn match_score_ignores_input_order(shuffled in Just(three_race_match()).prop_shuffle()) {
        let config = StageConfig { ace_bonus_points: 4, ..StageConfig::default() };
        let expected = calculate_match_score(&three_race_match(), &config);
        prop_assert_eq!(calculate_match_score(&shuffled, &config), expected);
    }

    #[test]
    fn race_points_never_exceed_map_total(n in 1usize..9, npc_mask in 0u16..512) {
        let players: Vec<Player> = (0..n)
            .map(|i| if npc_mask & (1 << i) != 0 { Player::npc(format!("N{i}")) } else { Player::new(format!("P{i}")) })
            .collect();
        let results: Vec<RaceResult> = players
            .iter()
            .enumerate()
            .map(|(i, p)| RaceResult::new(race(1), p.id, i as u32 + 1))
            .collect();
        let config = StageConfig { exclude_npcs: true, ..StageConfig::default() };
        let scored = calculate_race_points(results, &roster(&players), &config);

        let total: u32 = scored.iter().map(|r| r.points_awarded).sum();
        prop_assert!(total <= config.points_map.total());

        let real: Vec<u32> = scored
            .iter()
            .filter(|r| !players.iter().any(|p| p.id == r.player_id && p.is_npc))
            .map(|r| r.points_awarded)
            .collect();
        prop_assert!(real.windows(2).all(|w| w[0] >= w[1]));
        let expected: Vec<u32> = (1..=real.len() as u32).map(|pos| config.points_map.points_for(pos)).collect();
        prop_assert_eq!(real, expected);
    }
}
