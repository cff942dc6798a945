//! Condition policy
//!
//! Global toggles of the conditions and rewards sections, gathered in one
//! value that the gift and condition rules take as an argument.

use serde::{Deserialize, Serialize};

/// Which toggle wins when both "all gains" and "minimum purchase" are on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionPrecedence {
    /// Minimum purchase always dominates
    #[default]
    MinPurchaseFirst,
    /// "Pour tous les gains" is checked before minimum purchase
    AllConditionsFirst,
}

impl std::str::FromStr for ConditionPrecedence {
    type Err = super::ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match super::catalog::normalize_code(s).as_str() {
            "MIN_PURCHASE_FIRST" | "MIN_PURCHASE" => Ok(Self::MinPurchaseFirst),
            "ALL_CONDITIONS_FIRST" | "ALL_CONDITIONS" => Ok(Self::AllConditionsFirst),
            _ => Err(super::ParseCodeError::new("precedence", s)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionPolicy {
    /// "Pour tous les gains"
    pub all_conditions: bool,
    pub min_purchase: bool,
    /// Free text as typed by the operator, empty reads as 0
    pub min_purchase_amount: String,
    /// "Jeu 100% gagnant"
    pub win_rate: bool,
    #[serde(default)]
    pub precedence: ConditionPrecedence,
}

impl ConditionPolicy {
    /// Amount shown in the minimum-purchase label
    pub fn amount_label(&self) -> &str {
        if self.min_purchase_amount.is_empty() {
            "0"
        } else {
            &self.min_purchase_amount
        }
    }
}
