//! Qualification out of a stage: advancement rules, dominance bonus, wildcards.

use crate::logic::standings::{compare_standings, get_stage_standings, group_standings};
use crate::models::{
    AdvancementRule, EngineError, GroupId, Player, PlayerId, Qualifier, RaceResult, StageConfig,
    StageRecord, StageStanding, WildcardRule, WildcardStrategy, NEXT_STAGE, WILDCARD,
};
use std::collections::HashSet;

/// Qualifiers of one group, given its standings sorted by rank.
///
/// No rule means nobody qualifies.
pub fn determine_group_qualifiers(
    rule: Option<&AdvancementRule>,
    sorted_standings: &[StageStanding],
) -> Vec<Qualifier> {
    match rule {
        None => {
            log::warn!("No advancement rule configured, no qualifiers");
            Vec::new()
        }
        Some(AdvancementRule::TopN { value }) => sorted_standings
            .iter()
            .filter(|s| s.rank <= *value)
            .map(|s| Qualifier::new(s.player_id, NEXT_STAGE))
            .collect(),
        Some(AdvancementRule::PositionMap { map }) => sorted_standings
            .iter()
            .filter_map(|s| map.get(s.rank).map(|dest| Qualifier::new(s.player_id, dest)))
            .collect(),
    }
}

/// Race results of `player_id` worth the top of the points map.
pub fn count_first_places(config: &StageConfig, player_id: PlayerId, results: &[RaceResult]) -> u32 {
    let top = config.points_map.max_points();
    if top == 0 {
        return 0;
    }
    results
        .iter()
        .filter(|r| r.player_id == player_id && r.points_awarded == top)
        .count() as u32
}

/// Stage bonus for first places beyond half of the player's matches.
///
/// With `t = matches / 2` (rounded down) and `f` first places, the bonus is
/// `(f - t) * 2` when `f > t`. Zero unless the stage enables `dominance_bonus`.
pub fn calculate_dominance_bonus(
    config: &StageConfig,
    player_id: PlayerId,
    player_match_count: u32,
    all_race_results: &[RaceResult],
) -> u32 {
    if !config.has_dominance_bonus() || player_match_count == 0 {
        return 0;
    }
    let first_places = count_first_places(config, player_id, all_race_results);
    let threshold = player_match_count / 2;
    if first_places > threshold {
        (first_places - threshold) * 2
    } else {
        0
    }
}

/// Extra qualifiers from players every group rule left out.
pub fn select_wildcards(
    rule: &WildcardRule,
    group_views: &[Vec<StageStanding>],
    qualified: &HashSet<PlayerId>,
) -> Vec<Qualifier> {
    match rule.strategy {
        WildcardStrategy::GlobalBestLosers => {
            let mut pool: Vec<&StageStanding> = group_views
                .iter()
                .flatten()
                .filter(|s| !qualified.contains(&s.player_id))
                .collect();
            pool.sort_by(|a, b| compare_standings(a, b));
            pool.into_iter()
                .take(rule.wildcard_count as usize)
                .map(|s| Qualifier::new(s.player_id, WILDCARD))
                .collect()
        }
    }
}

/// Every qualifier of a finished stage: group rules first, then wildcards.
pub fn stage_qualifiers(record: &StageRecord, players: &[Player]) -> Result<Vec<Qualifier>, EngineError> {
    let group_ids: HashSet<GroupId> = record.groups.iter().map(|g| g.id).collect();
    if let Some(stray) = record.matches.iter().find(|m| !group_ids.contains(&m.game.group_id)) {
        return Err(EngineError::ResultOutsideStage(stray.game.id));
    }

    let config = &record.stage.config;
    let standings = get_stage_standings(&record.stage, players, &record.matches)?;
    let views: Vec<Vec<StageStanding>> = record
        .groups
        .iter()
        .map(|g| group_standings(&standings, g))
        .collect();

    let mut qualifiers: Vec<Qualifier> = views
        .iter()
        .flat_map(|view| determine_group_qualifiers(config.advancement.as_ref(), view))
        .collect();

    if let Some(rule) = &config.wildcard_rules {
        let taken: HashSet<PlayerId> = qualifiers.iter().map(|q| q.player_id).collect();
        qualifiers.extend(select_wildcards(rule, &views, &taken));
    }

    log::info!("{}: {} qualifiers", record.stage.name, qualifiers.len());
    Ok(qualifiers)
}
