//! Racing tournament engine: library with models and scoring/progression logic.

pub mod logic;
pub mod models;

pub use logic::{
    calculate_dominance_bonus, calculate_match_score, calculate_race_points, compare_standings,
    count_first_places, determine_group_qualifiers, generate_matches_for_group,
    get_eligible_players, get_stage_standings, group_name, group_standings, group_standings_by_id,
    perform_draw, record_race, select_wildcards, stage_qualifiers, GROUP_SIZE, MATCHES_PER_GROUP,
};
pub use models::{
    AdvancementRule, BonusRule, Draw, DrawnGroup, EngineError, ErrorKind, GameMatch, Group,
    GroupId, MatchId, MatchRecord, MatchScore, MatchStatus, Player, PlayerId, PointsMap,
    Qualifier, Race, RaceId, RaceResult, RankMap, SeedLevel, Stage, StageConfig, StageId,
    StageRecord, StageStanding, WildcardRule, WildcardStrategy, DEFAULT_GROUP_COUNT, NEXT_STAGE,
    PLAYERS_PER_MATCH, WILDCARD,
};
