//! Draw result: group name to drawn players, in group-letter order.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawnGroup {
    pub name: String,
    /// Head seed first when the group received one.
    pub players: Vec<Player>,
}

/// Output of one draw. Not idempotent: snapshot it before committing.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Draw {
    pub groups: Vec<DrawnGroup>,
}

impl Draw {
    pub fn get(&self, name: &str) -> Option<&DrawnGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every drawn player id, group by group.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.groups.iter().flat_map(|g| g.players.iter().map(|p| p.id))
    }
}
