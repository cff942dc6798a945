//! Action List Manager
//!
//! Ordered customer actions. Priorities always read `1..=N` in list order,
//! whatever edit came last.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Action;
use crate::domain::value_objects::{ActionType, EntityId};
use crate::error::{CampaignError, Result};

/// Most actions a campaign can chain before the game
pub const MAX_ACTIONS: usize = 3;

/// Ordered list of at most [`MAX_ACTIONS`] actions
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Action>", into = "Vec<Action>")]
pub struct ActionList {
    actions: Vec<Action>,
}

impl ActionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single stored action, renumbered
    pub(crate) fn single(action: Action) -> Self {
        let mut list = Self { actions: vec![action] };
        list.renumber();
        list
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.actions.len() >= MAX_ACTIONS
    }

    pub fn get(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    pub fn priorities(&self) -> Vec<u8> {
        self.actions.iter().map(|a| a.priority).collect()
    }

    /// Label shown above the action at `index`
    pub fn order_label(index: usize) -> &'static str {
        match index {
            0 => "Première action",
            1 => "Deuxième action",
            _ => "Dernière action",
        }
    }

    /// Append an action after validating its target
    pub fn add(&mut self, action_type: ActionType, target: impl Into<String>) -> Result<Action> {
        if self.is_full() {
            return Err(CampaignError::ActionLimitReached { max: MAX_ACTIONS });
        }

        let target = target.into();
        check_target(action_type, &target)?;
        let priority = u8::try_from(self.actions.len() + 1)
            .map_err(|_| CampaignError::ActionLimitReached { max: MAX_ACTIONS })?;

        let action = Action {
            id: EntityId::new(),
            priority,
            target,
            action_type,
        };
        self.actions.push(action.clone());
        Ok(action)
    }

    /// Remove the action at `index` and close the gap in priorities
    pub fn remove(&mut self, index: usize) -> Result<Action> {
        if index >= self.actions.len() {
            return Err(CampaignError::ActionNotFound(index));
        }
        let removed = self.actions.remove(index);
        self.renumber();
        Ok(removed)
    }

    /// Move the action at `from` to position `to`
    pub fn move_action(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.actions.len();
        if from >= len {
            return Err(CampaignError::ActionNotFound(from));
        }
        if to >= len {
            return Err(CampaignError::ActionNotFound(to));
        }
        if from == to {
            return Ok(());
        }

        let action = self.actions.remove(from);
        self.actions.insert(to, action);
        self.renumber();
        Ok(())
    }

    pub fn update_target(&mut self, index: usize, target: impl Into<String>) -> Result<()> {
        let action = self.actions.get_mut(index).ok_or(CampaignError::ActionNotFound(index))?;
        let target = target.into();
        check_target(action.action_type, &target)?;
        action.target = target;
        Ok(())
    }

    /// First action whose target no longer matches its platform
    pub fn validate(&self) -> Result<()> {
        if self.actions.len() > MAX_ACTIONS {
            return Err(CampaignError::ActionLimitReached { max: MAX_ACTIONS });
        }
        self.actions
            .iter()
            .try_for_each(|a| check_target(a.action_type, &a.target))
    }

    fn renumber(&mut self) {
        for (priority, action) in (1..=u8::MAX).zip(self.actions.iter_mut()) {
            action.priority = priority;
        }
    }
}

fn check_target(action_type: ActionType, target: &str) -> Result<()> {
    if action_type.validate_target(target) {
        Ok(())
    } else {
        Err(CampaignError::InvalidTarget {
            action_type,
            message: action_type.target_error(),
        })
    }
}

impl TryFrom<Vec<Action>> for ActionList {
    type Error = CampaignError;

    /// Stored priorities are not trusted: list order wins.
    fn try_from(actions: Vec<Action>) -> Result<Self> {
        if actions.len() > MAX_ACTIONS {
            return Err(CampaignError::ActionLimitReached { max: MAX_ACTIONS });
        }
        let mut list = Self { actions };
        list.renumber();
        Ok(list)
    }
}

impl From<ActionList> for Vec<Action> {
    fn from(list: ActionList) -> Self {
        list.actions
    }
}

impl<'a> IntoIterator for &'a ActionList {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
