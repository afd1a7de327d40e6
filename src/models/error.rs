//! Engine errors.

use crate::models::game::{MatchId, RaceId};
use crate::models::group::GroupId;
use crate::models::player::PlayerId;
use thiserror::Error;

/// Broad category of an [`EngineError`], for callers deciding how to report it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Stage rules are missing or malformed.
    Configuration,
    /// Caller-supplied input does not meet an operation's contract.
    Precondition,
    /// Recorded data contradicts itself; standings would be wrong.
    DataInconsistency,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EngineError {
    #[error("Malformed stage rules: {0}")]
    MalformedConfig(String),

    #[error("Invalid points map: {0}")]
    InvalidPointsMap(String),

    #[error("Invalid advancement rule: {0}")]
    InvalidAdvancement(String),

    #[error("Invalid wildcard rule: {0}")]
    InvalidWildcard(String),

    #[error("Group count must be at least 1")]
    InvalidGroupCount,

    #[error("{group} has {found} players, schedule needs exactly {expected}")]
    WrongGroupSize {
        group: String,
        expected: usize,
        found: usize,
    },

    #[error("Player {0} listed twice")]
    DuplicateParticipant(PlayerId),

    #[error("Stage {sequence_order} needs the results of the previous stage")]
    PriorStageMissing { sequence_order: u32 },

    #[error("Expected results of stage {expected}, got stage {found}")]
    PriorStageMismatch { expected: u32, found: u32 },

    #[error("Player {0} not found in roster")]
    UnknownPlayer(PlayerId),

    #[error("Group {0} not found")]
    GroupNotFound(GroupId),

    #[error("Player {player_id} is not a participant of match {match_id}")]
    PlayerNotInMatch {
        player_id: PlayerId,
        match_id: MatchId,
    },

    #[error("Player {0} has more than one result in the same race")]
    DuplicateRaceEntry(PlayerId),

    #[error("Race {race_id} belongs to another match than {match_id}")]
    RaceNotInMatch { race_id: RaceId, match_id: MatchId },

    #[error("Match {0} does not belong to any group of this stage")]
    ResultOutsideStage(MatchId),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        use EngineError::*;
        match self {
            MalformedConfig(_)
            | InvalidPointsMap(_)
            | InvalidAdvancement(_)
            | InvalidWildcard(_)
            | InvalidGroupCount => ErrorKind::Configuration,
            WrongGroupSize { .. }
            | DuplicateParticipant(_)
            | PriorStageMissing { .. }
            | PriorStageMismatch { .. }
            | UnknownPlayer(_)
            | GroupNotFound(_) => ErrorKind::Precondition,
            PlayerNotInMatch { .. }
            | DuplicateRaceEntry(_)
            | RaceNotInMatch { .. }
            | ResultOutsideStage(_) => ErrorKind::DataInconsistency,
        }
    }
}
