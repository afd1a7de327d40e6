//! Stage rosters and the pot-based group draw.

use crate::logic::progression::stage_qualifiers;
use crate::models::{
    Draw, DrawnGroup, EngineError, Player, PlayerId, SeedLevel, Stage, StageRecord,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// "Group A" for index 0, ..., "Group Z", "Group AA", "Group AB", ...
pub fn group_name(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    let label: String = letters.into_iter().rev().collect();
    format!("Group {}", label)
}

/// Players who may be drawn into `stage`.
///
/// 1. Opening stage: everyone except super-seeds.
/// 2. Stage 2: qualifiers of stage 1 plus every super-seed.
/// 3. Later stages: qualifiers of the previous stage only.
///
/// `prior` must be the record of the stage right before `stage`. Qualifiers
/// keep their group/rank order; a player reachable twice is listed once.
pub fn get_eligible_players(
    stage: &Stage,
    all_players: &[Player],
    prior: Option<&StageRecord>,
) -> Result<Vec<Player>, EngineError> {
    if stage.is_first() {
        let eligible: Vec<Player> = all_players
            .iter()
            .filter(|p| p.seed_level != SeedLevel::SuperSeed)
            .cloned()
            .collect();
        log::info!("{}: {} eligible players (opening stage)", stage.name, eligible.len());
        return Ok(eligible);
    }

    let prior = prior.ok_or(EngineError::PriorStageMissing {
        sequence_order: stage.sequence_order,
    })?;
    let expected = stage.sequence_order - 1;
    if prior.stage.sequence_order != expected {
        return Err(EngineError::PriorStageMismatch {
            expected,
            found: prior.stage.sequence_order,
        });
    }

    let roster: HashMap<PlayerId, &Player> = all_players.iter().map(|p| (p.id, p)).collect();
    let mut seen = HashSet::new();
    let mut eligible = Vec::new();

    for q in stage_qualifiers(prior, all_players)? {
        let player = roster
            .get(&q.player_id)
            .ok_or(EngineError::UnknownPlayer(q.player_id))?;
        if seen.insert(player.id) {
            eligible.push((*player).clone());
        }
    }
    let promoted = eligible.len();

    if stage.sequence_order == 2 {
        for p in all_players.iter().filter(|p| p.seed_level == SeedLevel::SuperSeed) {
            if seen.insert(p.id) {
                eligible.push(p.clone());
            }
        }
    }

    log::info!(
        "{}: {} eligible players ({} promoted from {})",
        stage.name,
        eligible.len(),
        promoted,
        prior.stage.name
    );
    Ok(eligible)
}

/// Split `players` into `num_groups` groups.
///
/// Pot A (head seeds) is shuffled and dealt one per group; head seeds beyond
/// `num_groups` drop into Pot B. Pot B is shuffled and dealt round-robin from
/// the first group. Every call reshuffles.
pub fn perform_draw<R: Rng + ?Sized>(
    players: &[Player],
    num_groups: usize,
    rng: &mut R,
) -> Result<Draw, EngineError> {
    if num_groups == 0 {
        return Err(EngineError::InvalidGroupCount);
    }
    let mut seen = HashSet::with_capacity(players.len());
    for p in players {
        if !seen.insert(p.id) {
            return Err(EngineError::DuplicateParticipant(p.id));
        }
    }

    let (mut pot_a, mut pot_b): (Vec<Player>, Vec<Player>) = players
        .iter()
        .cloned()
        .partition(|p| p.seed_level == SeedLevel::HeadSeed);

    let mut groups: Vec<DrawnGroup> = (0..num_groups)
        .map(|i| DrawnGroup {
            name: group_name(i),
            players: Vec::new(),
        })
        .collect();

    pot_a.shuffle(rng);
    if pot_a.len() > num_groups {
        log::debug!("{} head seeds over group count, moved to Pot B", pot_a.len() - num_groups);
        pot_b.extend(pot_a.drain(num_groups..));
    }
    for (group, seed) in groups.iter_mut().zip(pot_a) {
        group.players.push(seed);
    }

    pot_b.shuffle(rng);
    for (i, player) in pot_b.into_iter().enumerate() {
        groups[i % num_groups].players.push(player);
    }

    log::info!("Drew {} players into {} groups", players.len(), num_groups);
    Ok(Draw { groups })
}
