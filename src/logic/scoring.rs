//! Race points (with rank-shift) and per-match aggregation (wins, ace bonus).

use crate::models::{MatchScore, Player, PlayerId, RaceId, RaceResult, StageConfig};
use std::collections::{BTreeMap, HashMap};

/// Whether a participant is left out of placements and points.
///
/// Only stages with `exclude_npcs` set leave anyone out; then NPCs and players
/// missing from the lookup score nothing.
fn is_excluded(player_id: PlayerId, players: &HashMap<PlayerId, Player>, config: &StageConfig) -> bool {
    config.exclude_npcs && players.get(&player_id).map_or(true, |p| p.is_npc)
}

/// Fill in `points_awarded` for every result of one race.
///
/// Results come back sorted by raw rank. Placements are counted over scoring
/// participants only, so an excluded player finishing ahead does not push the
/// next real player down (rank-shift).
pub fn calculate_race_points(
    mut results: Vec<RaceResult>,
    players: &HashMap<PlayerId, Player>,
    config: &StageConfig,
) -> Vec<RaceResult> {
    results.sort_by_key(|r| r.rank);

    let mut placement = 1;
    for res in &mut results {
        if is_excluded(res.player_id, players, config) {
            res.points_awarded = 0;
            continue;
        }
        res.points_awarded = config.points_map.points_for(placement);
        placement += 1;
    }
    results
}

#[derive(Default)]
struct Tally {
    points: u32,
    wins: u32,
}

/// Aggregate all race results of one match into per-player scores.
///
/// A race is won by whoever holds its top `points_awarded` (several players on
/// a tie), unless that top is 0. Winning more than half of the races makes a
/// player an ace and adds `ace_bonus_points`.
///
/// Sorted by total desc, then wins desc, then player id; the output does not
/// depend on the order of `race_results`.
pub fn calculate_match_score(race_results: &[RaceResult], config: &StageConfig) -> Vec<MatchScore> {
    let mut races: BTreeMap<RaceId, Vec<&RaceResult>> = BTreeMap::new();
    let mut tallies: BTreeMap<PlayerId, Tally> = BTreeMap::new();

    for res in race_results {
        races.entry(res.race_id).or_default().push(res);
        tallies.entry(res.player_id).or_default().points += res.points_awarded;
    }

    for results in races.values() {
        let best = results.iter().map(|r| r.points_awarded).max().unwrap_or(0);
        if best == 0 {
            continue;
        }
        for res in results.iter().filter(|r| r.points_awarded == best) {
            if let Some(t) = tallies.get_mut(&res.player_id) {
                t.wins += 1;
            }
        }
    }

    let race_count = races.len() as u32;
    let mut scores: Vec<MatchScore> = tallies
        .into_iter()
        .map(|(player_id, t)| {
            let is_ace = t.wins * 2 > race_count;
            let bonus = if is_ace { config.ace_bonus_points } else { 0 };
            MatchScore {
                player_id,
                total_points: t.points + bonus,
                wins: t.wins,
                is_ace,
            }
        })
        .collect();

    scores.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then(b.wins.cmp(&a.wins))
            .then(a.player_id.cmp(&b.player_id))
    });
    scores
}
