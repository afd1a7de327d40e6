//! Stage and its rules document (`rules_config`).

use crate::models::error::EngineError;
use crate::models::game::MatchRecord;
use crate::models::group::Group;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Unique identifier for a stage.
pub type StageId = Uuid;

pub const DEFAULT_GROUP_COUNT: usize = 14;

/// Finishing position (1-based, after rank-shift) to points.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointsMap(BTreeMap<u32, u32>);

impl Default for PointsMap {
    fn default() -> Self {
        Self(BTreeMap::from([(1, 9), (2, 5), (3, 3), (4, 2), (5, 1)]))
    }
}

impl PointsMap {
    pub fn new(entries: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Points for a placement; unmapped placements score 0.
    pub fn points_for(&self, placement: u32) -> u32 {
        self.0.get(&placement).copied().unwrap_or(0)
    }

    /// Highest value in the map, i.e. what a first place is worth.
    pub fn max_points(&self) -> u32 {
        self.0.values().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.0.is_empty() {
            return Err(EngineError::InvalidPointsMap("map is empty".into()));
        }
        if self.0.contains_key(&0) {
            return Err(EngineError::InvalidPointsMap("positions start at 1".into()));
        }
        Ok(())
    }
}

/// Explicit rank to destination routing. JSON keys are strings (`"1"`).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct RankMap(BTreeMap<u32, String>);

impl RankMap {
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = (u32, S)>) -> Self {
        Self(entries.into_iter().map(|(r, d)| (r, d.into())).collect())
    }

    pub fn get(&self, rank: u32) -> Option<&str> {
        self.0.get(&rank).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<BTreeMap<String, String>> for RankMap {
    type Error = String;

    fn try_from(raw: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        raw.into_iter()
            .map(|(k, v)| {
                k.trim()
                    .parse::<u32>()
                    .map(|rank| (rank, v))
                    .map_err(|_| format!("rank key {:?} is not a number", k))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Self)
    }
}

impl From<RankMap> for BTreeMap<String, String> {
    fn from(m: RankMap) -> Self {
        m.0.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }
}

/// Which ranks of a group proceed, and where to.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AdvancementRule {
    /// Ranks 1..=value qualify for the next stage.
    TopN { value: u32 },
    /// Only ranks present in the map qualify, each to its own destination.
    PositionMap { map: RankMap },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BonusRule {
    /// Extra points for first places beyond half of the matches played.
    DominanceBonus,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WildcardStrategy {
    /// Best non-qualifiers across all groups of the stage.
    #[default]
    GlobalBestLosers,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WildcardRule {
    pub wildcard_count: u32,
    #[serde(default)]
    pub strategy: WildcardStrategy,
}

/// Stage rules as stored by the caller. Every key is optional; unknown keys are rejected.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StageConfig {
    pub group_count: usize,
    pub points_map: PointsMap,
    pub ace_bonus_points: u32,
    pub bonus_rules: Vec<BonusRule>,
    pub advancement: Option<AdvancementRule>,
    pub wildcard_rules: Option<WildcardRule>,
    /// NPC participants score 0 and do not consume a placement.
    pub exclude_npcs: bool,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            group_count: DEFAULT_GROUP_COUNT,
            points_map: PointsMap::default(),
            ace_bonus_points: 0,
            bonus_rules: Vec::new(),
            advancement: None,
            wildcard_rules: None,
            exclude_npcs: false,
        }
    }
}

impl StageConfig {
    /// Parse a `rules_config` JSON document and validate it.
    pub fn from_json(doc: &serde_json::Value) -> Result<Self, EngineError> {
        let config: StageConfig = serde_json::from_value(doc.clone())
            .map_err(|e| EngineError::MalformedConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn has_dominance_bonus(&self) -> bool {
        self.bonus_rules.contains(&BonusRule::DominanceBonus)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.group_count == 0 {
            return Err(EngineError::InvalidGroupCount);
        }
        self.points_map.validate()?;
        match &self.advancement {
            Some(AdvancementRule::TopN { value: 0 }) => {
                return Err(EngineError::InvalidAdvancement("top_n value must be at least 1".into()));
            }
            Some(AdvancementRule::PositionMap { map }) if map.is_empty() => {
                return Err(EngineError::InvalidAdvancement("position_map is empty".into()));
            }
            _ => {}
        }
        if let Some(w) = &self.wildcard_rules {
            if w.wildcard_count == 0 {
                return Err(EngineError::InvalidWildcard("wildcard_count must be at least 1".into()));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    pub name: String,
    /// 1 for the opening stage.
    pub sequence_order: u32,
    #[serde(default, rename = "rules_config", alias = "config")]
    pub config: StageConfig,
}

impl Stage {
    pub fn new(name: impl Into<String>, sequence_order: u32, config: StageConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sequence_order,
            config,
        }
    }

    pub fn is_first(&self) -> bool {
        self.sequence_order <= 1
    }
}

/// Everything recorded for a stage: its groups and their matches with results.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StageRecord {
    pub stage: Stage,
    pub groups: Vec<Group>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}
