//! Customer action entity

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ActionType, EntityId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: EntityId,
    /// 1-based position in the action list
    pub priority: u8,
    pub target: String,
    #[serde(rename = "type")]
    pub action_type: ActionType,
}

impl Action {
    pub fn is_target_valid(&self) -> bool {
        self.action_type.validate_target(&self.target)
    }
}
