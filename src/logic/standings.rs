//! Stage leaderboard: match scores summed per player, dominance bonus, ranking.

use crate::logic::progression::{calculate_dominance_bonus, count_first_places};
use crate::logic::scoring::calculate_match_score;
use crate::models::{
    EngineError, Group, GroupId, MatchRecord, Player, PlayerId, RaceResult, Stage, StageRecord,
    StageStanding,
};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Leaderboard order: points desc, wins desc, name asc, id asc.
pub fn compare_standings(a: &StageStanding, b: &StageStanding) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then(b.wins.cmp(&a.wins))
        .then_with(|| a.player_name.cmp(&b.player_name))
        .then(a.player_id.cmp(&b.player_id))
}

fn sort_and_rank(standings: &mut [StageStanding]) {
    standings.sort_by(compare_standings);
    for (i, s) in standings.iter_mut().enumerate() {
        s.rank = i as u32 + 1;
    }
}

#[derive(Default)]
struct Row {
    points: u32,
    wins: u32,
    matches_played: u32,
}

/// Reject results from non-participants and doubled entries within a race.
fn check_match_results(record: &MatchRecord) -> Result<(), EngineError> {
    let mut entries = HashSet::with_capacity(record.results.len());
    for res in &record.results {
        if !record.game.has_participant(res.player_id) {
            return Err(EngineError::PlayerNotInMatch {
                player_id: res.player_id,
                match_id: record.game.id,
            });
        }
        if !entries.insert((res.race_id, res.player_id)) {
            return Err(EngineError::DuplicateRaceEntry(res.player_id));
        }
    }
    Ok(())
}

/// Ranked standings over every match of a stage.
///
/// Every player with at least one recorded result appears; `players` must
/// contain each of them. The stage rules are validated first.
pub fn get_stage_standings(
    stage: &Stage,
    players: &[Player],
    matches: &[MatchRecord],
) -> Result<Vec<StageStanding>, EngineError> {
    let config = &stage.config;
    config.validate()?;
    let roster: HashMap<PlayerId, &Player> = players.iter().map(|p| (p.id, p)).collect();
    let mut rows: BTreeMap<PlayerId, Row> = BTreeMap::new();

    for record in matches {
        check_match_results(record)?;
        for score in calculate_match_score(&record.results, config) {
            let row = rows.entry(score.player_id).or_default();
            row.points += score.total_points;
            row.wins += score.wins;
            row.matches_played += 1;
        }
    }

    let all_results: Vec<RaceResult> = matches
        .iter()
        .flat_map(|m| m.results.iter().cloned())
        .collect();

    let mut standings = Vec::with_capacity(rows.len());
    for (player_id, row) in rows {
        let player = roster
            .get(&player_id)
            .ok_or(EngineError::UnknownPlayer(player_id))?;
        let bonus = calculate_dominance_bonus(config, player_id, row.matches_played, &all_results);
        if bonus > 0 {
            log::debug!("{}: dominance bonus +{}", player.name, bonus);
        }
        standings.push(StageStanding {
            player_id,
            player_name: player.name.clone(),
            rank: 0,
            total_points: row.points + bonus,
            wins: row.wins,
            matches_played: row.matches_played,
            first_places: count_first_places(config, player_id, &all_results),
        });
    }

    sort_and_rank(&mut standings);
    log::debug!("{}: standings over {} matches, {} players", stage.name, matches.len(), standings.len());
    Ok(standings)
}

/// Group view of stage standings: the group's members, re-ranked from 1.
pub fn group_standings(stage_standings: &[StageStanding], group: &Group) -> Vec<StageStanding> {
    let mut view: Vec<StageStanding> = stage_standings
        .iter()
        .filter(|s| group.contains(s.player_id))
        .cloned()
        .collect();
    sort_and_rank(&mut view);
    view
}

/// Group view looked up by id within a stage record.
pub fn group_standings_by_id(
    record: &StageRecord,
    players: &[Player],
    group_id: GroupId,
) -> Result<Vec<StageStanding>, EngineError> {
    let group = record
        .groups
        .iter()
        .find(|g| g.id == group_id)
        .ok_or(EngineError::GroupNotFound(group_id))?;
    let standings = get_stage_standings(&record.stage, players, &record.matches)?;
    Ok(group_standings(&standings, group))
}
