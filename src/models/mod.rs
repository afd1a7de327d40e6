//! Data structures for the racing tournament: players, groups, matches, stages, standings.

mod draw;
mod error;
mod game;
mod group;
mod player;
mod stage;
mod standing;

pub use draw::{Draw, DrawnGroup};
pub use error::{EngineError, ErrorKind};
pub use game::{
    GameMatch, MatchId, MatchRecord, MatchStatus, Race, RaceId, RaceResult, PLAYERS_PER_MATCH,
};
pub use group::{Group, GroupId};
pub use player::{Player, PlayerId, SeedLevel};
pub use stage::{
    AdvancementRule, BonusRule, PointsMap, RankMap, Stage, StageConfig, StageId, StageRecord,
    WildcardRule, WildcardStrategy, DEFAULT_GROUP_COUNT,
};
pub use standing::{MatchScore, Qualifier, StageStanding, NEXT_STAGE, WILDCARD};
