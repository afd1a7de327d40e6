//! Derived views: per-match scores, stage standings, qualifiers.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Destination given to `top_n` qualifiers.
pub const NEXT_STAGE: &str = "next_stage";

/// Destination given to wildcard qualifiers.
pub const WILDCARD: &str = "wildcard";

/// One player's aggregate over all races of one match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub player_id: PlayerId,
    /// Race points plus the ace bonus, if earned.
    pub total_points: u32,
    pub wins: u32,
    pub is_ace: bool,
}

/// A row of the stage (or group) leaderboard. Recomputed on every query.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StageStanding {
    pub player_id: PlayerId,
    pub player_name: String,
    /// 1-based position after sorting.
    pub rank: u32,
    pub total_points: u32,
    pub wins: u32,
    pub matches_played: u32,
    pub first_places: u32,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Qualifier {
    pub player_id: PlayerId,
    pub destination: String,
}

impl Qualifier {
    pub fn new(player_id: PlayerId, destination: impl Into<String>) -> Self {
        Self {
            player_id,
            destination: destination.into(),
        }
    }
}
