//! Integration tests for group schedule generation.

use proptest::prelude::*;
use race_tournament::{
    generate_matches_for_group, EngineError, ErrorKind, GameMatch, Group, MatchStatus, PlayerId,
    GROUP_SIZE, MATCHES_PER_GROUP,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use uuid::Uuid;

fn group_of(n: usize) -> Group {
    let ids: Vec<PlayerId> = (0..n).map(|_| Uuid::new_v4()).collect();
    Group::new(Uuid::new_v4(), "Group A", ids)
}

fn pair_counts(matches: &[GameMatch]) -> HashMap<(PlayerId, PlayerId), u32> {
    let mut counts = HashMap::new();
    for m in matches {
        let p = m.participants;
        for (i, j) in [(0, 1), (0, 2), (1, 2)] {
            let key = if p[i] < p[j] { (p[i], p[j]) } else { (p[j], p[i]) };
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

fn check_balanced(group: &Group, matches: &[GameMatch]) {
    assert_eq!(matches.len(), MATCHES_PER_GROUP);

    let mut appearances: HashMap<PlayerId, u32> = HashMap::new();
    for m in matches {
        assert_ne!(m.participants[0], m.participants[1]);
        assert_ne!(m.participants[0], m.participants[2]);
        assert_ne!(m.participants[1], m.participants[2]);
        for id in m.participants {
            *appearances.entry(id).or_insert(0) += 1;
        }
    }
    assert_eq!(appearances.len(), GROUP_SIZE);
    for id in &group.player_ids {
        assert_eq!(appearances[id], 5);
    }

    let pairs = pair_counts(matches);
    assert_eq!(pairs.len(), 15);
    assert!(pairs.values().all(|&c| c == 2));
}

#[test]
fn six_players_get_ten_balanced_matches() {
    let group = group_of(6);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let matches = generate_matches_for_group(&group, &mut rng).unwrap();
    check_balanced(&group, &matches);
}

#[test]
fn matches_are_named_in_schedule_order() {
    let group = group_of(6);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let matches = generate_matches_for_group(&group, &mut rng).unwrap();
    for (k, m) in matches.iter().enumerate() {
        assert_eq!(m.name, format!("Group A - Match {}", k + 1));
        assert_eq!(m.group_id, group.id);
        assert_eq!(m.status, MatchStatus::Pending);
    }
    // Position 0 of the design opens the schedule with positions 1 and 2.
    assert_eq!(
        matches[0].participants,
        [group.player_ids[0], group.player_ids[1], group.player_ids[2]]
    );
}

#[test]
fn every_match_is_hosted_by_one_of_its_players() {
    let group = group_of(6);
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let matches = generate_matches_for_group(&group, &mut rng).unwrap();

    let mut host_counts: HashMap<PlayerId, u32> = HashMap::new();
    for m in &matches {
        let host = m.host_player_id.expect("host assigned");
        assert!(m.has_participant(host));
        *host_counts.entry(host).or_insert(0) += 1;
    }
    assert_eq!(host_counts.values().sum::<u32>(), MATCHES_PER_GROUP as u32);
    assert!(host_counts.values().all(|&c| c <= 3));
}

#[test]
fn first_match_host_is_a_fresh_player_and_second_avoids_them() {
    let group = group_of(6);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let matches = generate_matches_for_group(&group, &mut rng).unwrap();
    let first = matches[0].host_player_id.unwrap();
    let second = matches[1].host_player_id.unwrap();
    // Match 2 shares two players with match 1; the first host has count 1, others 0.
    assert_ne!(first, second);
}

#[test]
fn same_seed_gives_same_hosts() {
    let group = group_of(6);
    let hosts = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate_matches_for_group(&group, &mut rng)
            .unwrap()
            .iter()
            .map(|m| m.host_player_id)
            .collect::<Vec<_>>()
    };
    assert_eq!(hosts(42), hosts(42));
}

#[test]
fn wrong_group_size_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for n in [0, 5, 7] {
        let err = generate_matches_for_group(&group_of(n), &mut rng).unwrap_err();
        assert_eq!(
            err,
            EngineError::WrongGroupSize {
                group: "Group A".into(),
                expected: 6,
                found: n,
            }
        );
        assert_eq!(err.kind(), ErrorKind::Precondition);
    }
}

#[test]
fn duplicate_player_is_rejected() {
    let mut group = group_of(6);
    group.player_ids[5] = group.player_ids[0];
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        generate_matches_for_group(&group, &mut rng),
        Err(EngineError::DuplicateParticipant(group.player_ids[0]))
    );
}

proptest! {
    #[test]
    fn schedule_is_balanced_for_any_seed(seed in any::<u64>()) {
        let group = group_of(6);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let matches = generate_matches_for_group(&group, &mut rng).unwrap();
        check_balanced(&group, &matches);
    }
}
