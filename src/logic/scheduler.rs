//! Group schedule: ten three-player matches over six players, with host balancing.

use crate::models::{EngineError, GameMatch, Group, PlayerId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Players a group must have to be scheduled.
pub const GROUP_SIZE: usize = 6;

/// Matches produced per group.
pub const MATCHES_PER_GROUP: usize = 10;

/// Balanced block design over positions 0..6: each position plays 5 matches
/// and each pair of positions meets in exactly 2 of them.
const TRIADS: [[usize; 3]; MATCHES_PER_GROUP] = [
    [0, 1, 2],
    [0, 1, 3],
    [0, 2, 4],
    [0, 3, 5],
    [0, 4, 5],
    [1, 2, 5],
    [1, 3, 4],
    [1, 4, 5],
    [2, 3, 4],
    [2, 3, 5],
];

/// Build the fixed ten-match schedule for a six-player group.
///
/// Position `i` of the design is `group.player_ids[i]`. Each match is hosted by
/// whichever of its players has hosted least so far; ties are broken with `rng`.
/// Matches come back in schedule order, named "<group> - Match <k>".
pub fn generate_matches_for_group<R: Rng + ?Sized>(
    group: &Group,
    rng: &mut R,
) -> Result<Vec<GameMatch>, EngineError> {
    let players: &[PlayerId] = &group.player_ids;
    if players.len() != GROUP_SIZE {
        return Err(EngineError::WrongGroupSize {
            group: group.name.clone(),
            expected: GROUP_SIZE,
            found: players.len(),
        });
    }
    let mut seen = HashSet::with_capacity(GROUP_SIZE);
    for &id in players {
        if !seen.insert(id) {
            return Err(EngineError::DuplicateParticipant(id));
        }
    }

    let mut host_counts = [0u32; GROUP_SIZE];
    let mut matches = Vec::with_capacity(MATCHES_PER_GROUP);

    for (k, &triad) in TRIADS.iter().enumerate() {
        let fewest = triad.iter().map(|&i| host_counts[i]).min().unwrap_or(0);
        let tied: Vec<usize> = triad
            .iter()
            .copied()
            .filter(|&i| host_counts[i] == fewest)
            .collect();
        let host = tied.choose(rng).copied().unwrap_or(triad[0]);
        host_counts[host] += 1;

        let mut game = GameMatch::new(
            group.id,
            format!("{} - Match {}", group.name, k + 1),
            triad.map(|i| players[i]),
        );
        game.host_player_id = Some(players[host]);
        matches.push(game);
    }

    log::info!(
        "Scheduled {} matches for {} (host counts {:?})",
        matches.len(),
        group.name,
        host_counts
    );
    Ok(matches)
}
