//! Match (three-player game), its races, and per-race results.

use crate::models::group::GroupId;
use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Unique identifier for a race within a match.
pub type RaceId = Uuid;

/// Number of players in every match.
pub const PLAYERS_PER_MATCH: usize = 3;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    /// At least one race has been recorded.
    Ready,
    Finished,
}

/// A single match: three players from one group racing several times.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub group_id: GroupId,
    /// e.g. "Group A - Match 3".
    pub name: String,
    pub participants: [PlayerId; PLAYERS_PER_MATCH],
    /// Player who opens the game room.
    pub host_player_id: Option<PlayerId>,
    pub status: MatchStatus,
}

impl GameMatch {
    pub fn new(
        group_id: GroupId,
        name: impl Into<String>,
        participants: [PlayerId; PLAYERS_PER_MATCH],
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            group_id,
            name: name.into(),
            participants,
            host_player_id: None,
            status: MatchStatus::Pending,
        }
    }

    pub fn has_participant(&self, player_id: PlayerId) -> bool {
        self.participants.contains(&player_id)
    }

    /// Close the match; no-op if already finished.
    pub fn finish(&mut self) {
        self.status = MatchStatus::Finished;
    }
}

/// One timed race, identified by `(match_id, race_number)`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub id: RaceId,
    pub match_id: MatchId,
    /// 1-based.
    pub race_number: u32,
}

impl Race {
    pub fn new(match_id: MatchId, race_number: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            match_id,
            race_number,
        }
    }
}

/// One player's finish in one race.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    pub race_id: RaceId,
    pub player_id: PlayerId,
    /// Raw finishing position, 1 = best, before any rank-shift.
    pub rank: u32,
    /// Filled in by the scoring engine only.
    #[serde(default)]
    pub points_awarded: u32,
}

impl RaceResult {
    /// Unscored result with a raw rank.
    pub fn new(race_id: RaceId, player_id: PlayerId, rank: u32) -> Self {
        Self {
            race_id,
            player_id,
            rank,
            points_awarded: 0,
        }
    }

    /// Result with points already awarded (e.g. loaded back from storage).
    pub fn scored(race_id: RaceId, player_id: PlayerId, rank: u32, points_awarded: u32) -> Self {
        Self {
            race_id,
            player_id,
            rank,
            points_awarded,
        }
    }
}

/// A match together with every race result recorded for it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchRecord {
    pub game: GameMatch,
    #[serde(default)]
    pub results: Vec<RaceResult>,
}

impl MatchRecord {
    pub fn new(game: GameMatch) -> Self {
        Self {
            game,
            results: Vec::new(),
        }
    }
}
