//! Race submission: turn a finishing order into scored results for a match.

use crate::logic::scoring::calculate_race_points;
use crate::models::{
    EngineError, MatchRecord, MatchStatus, Player, PlayerId, Race, RaceResult, StageConfig,
};
use std::collections::{HashMap, HashSet};

/// Record one race of a match from its finishing order (first to last).
///
/// Any results already stored for the same race are replaced, so submitting a
/// race twice leaves one set of results. A pending match becomes ready.
/// Returns the newly scored results, sorted by rank.
pub fn record_race(
    record: &mut MatchRecord,
    race: &Race,
    rankings: &[PlayerId],
    players: &HashMap<PlayerId, Player>,
    config: &StageConfig,
) -> Result<Vec<RaceResult>, EngineError> {
    if race.match_id != record.game.id {
        return Err(EngineError::RaceNotInMatch {
            race_id: race.id,
            match_id: record.game.id,
        });
    }

    let mut seen = HashSet::with_capacity(rankings.len());
    for &player_id in rankings {
        if !record.game.has_participant(player_id) {
            return Err(EngineError::PlayerNotInMatch {
                player_id,
                match_id: record.game.id,
            });
        }
        if !seen.insert(player_id) {
            return Err(EngineError::DuplicateRaceEntry(player_id));
        }
    }

    let results: Vec<RaceResult> = rankings
        .iter()
        .enumerate()
        .map(|(i, &player_id)| RaceResult::new(race.id, player_id, i as u32 + 1))
        .collect();
    let scored = calculate_race_points(results, players, config);

    let before = record.results.len();
    record.results.retain(|r| r.race_id != race.id);
    if record.results.len() != before {
        log::debug!("{}: replaced results of race {}", record.game.name, race.race_number);
    }
    record.results.extend(scored.iter().cloned());

    if record.game.status == MatchStatus::Pending {
        record.game.status = MatchStatus::Ready;
    }
    Ok(scored)
}
