//! Player and SeedLevel.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in groups, matches and results).
pub type PlayerId = Uuid;

/// Seed status used by the draw and stage eligibility.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SeedLevel {
    #[default]
    Unseeded,
    /// Group-head seed: goes into Pot A.
    HeadSeed,
    /// Bye: skips the first stage and joins at stage 2.
    SuperSeed,
}

impl TryFrom<u8> for SeedLevel {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(SeedLevel::Unseeded),
            1 => Ok(SeedLevel::HeadSeed),
            2 => Ok(SeedLevel::SuperSeed),
            other => Err(format!("unknown seed level {}", other)),
        }
    }
}

impl From<SeedLevel> for u8 {
    fn from(s: SeedLevel) -> u8 {
        match s {
            SeedLevel::Unseeded => 0,
            SeedLevel::HeadSeed => 1,
            SeedLevel::SuperSeed => 2,
        }
    }
}

/// A registered player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub seed_level: SeedLevel,
    /// Filler participant; only matters when the stage excludes NPCs from scoring.
    #[serde(default)]
    pub is_npc: bool,
}

impl Player {
    /// Create an unseeded, non-NPC player with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            seed_level: SeedLevel::Unseeded,
            is_npc: false,
        }
    }

    pub fn with_seed(name: impl Into<String>, seed_level: SeedLevel) -> Self {
        Self {
            seed_level,
            ..Self::new(name)
        }
    }

    pub fn npc(name: impl Into<String>) -> Self {
        Self {
            is_npc: true,
            ..Self::new(name)
        }
    }
}
