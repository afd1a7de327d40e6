//! Tournament engine logic: scoring, scheduling, draw, standings, progression.

mod draw;
mod progression;
mod races;
mod scheduler;
mod scoring;
mod standings;

pub use draw::{get_eligible_players, group_name, perform_draw};
pub use progression::{
    calculate_dominance_bonus, count_first_places, determine_group_qualifiers, select_wildcards,
    stage_qualifiers,
};
pub use races::record_race;
pub use scheduler::{generate_matches_for_group, GROUP_SIZE, MATCHES_PER_GROUP};
pub use scoring::{calculate_match_score, calculate_race_points};
pub use standings::{compare_standings, get_stage_standings, group_standings, group_standings_by_id};
