//! Group of players drawn together for one stage.

use crate::models::player::PlayerId;
use crate::models::stage::StageId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a group.
pub type GroupId = Uuid;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub stage_id: StageId,
    /// "Group A", "Group B", ...
    pub name: String,
    /// Membership in draw order; fixed once the draw is committed.
    pub player_ids: Vec<PlayerId>,
}

impl Group {
    pub fn new(stage_id: StageId, name: impl Into<String>, player_ids: Vec<PlayerId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            stage_id,
            name: name.into(),
            player_ids,
        }
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.player_ids.contains(&player_id)
    }
}
