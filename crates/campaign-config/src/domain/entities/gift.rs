//! Gift entity (prize tier)

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EntityId, GiftType, StockLimit};

/// Prize tier a customer may win
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gift {
    pub id: EntityId,
    pub icon: String,
    pub initial_limit: StockLimit,
    pub limit: StockLimit,
    pub name: String,
    #[serde(rename = "type")]
    pub gift_type: GiftType,
}

impl Gift {
    pub const LOSS_NAME: &'static str = "Perte";
    pub const LOSS_ICON: &'static str = "❌";

    /// The synthetic "no prize" slot
    pub fn loss_slot() -> Self {
        Self {
            id: EntityId::new(),
            icon: Self::LOSS_ICON.to_string(),
            initial_limit: StockLimit::Unlimited,
            limit: StockLimit::Unlimited,
            name: Self::LOSS_NAME.to_string(),
            gift_type: GiftType::Loss,
        }
    }

    pub fn is_loss(&self) -> bool {
        self.gift_type.is_loss()
    }

    pub fn is_unlimited(&self) -> bool {
        self.limit.is_unlimited()
    }

    /// Name used by retrieval conditions: the gift name, or its type code
    /// while the operator has not named it yet.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.gift_type.code()
        } else {
            &self.name
        }
    }

    pub(crate) fn set_limit(&mut self, limit: StockLimit) {
        self.limit = limit;
        self.initial_limit = limit;
    }

    /// Pin the loss slot's identity fields, returns whether anything moved
    pub(crate) fn pin_loss_fields(&mut self) -> bool {
        let pinned = self.name == Self::LOSS_NAME
            && self.icon == Self::LOSS_ICON
            && self.is_unlimited()
            && self.initial_limit.is_unlimited();
        if !pinned {
            self.name = Self::LOSS_NAME.to_string();
            self.icon = Self::LOSS_ICON.to_string();
            self.set_limit(StockLimit::Unlimited);
        }
        !pinned
    }
}

/// Operator input for a new gift
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftDraft {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub gift_type: GiftType,
    #[serde(default)]
    pub limit: StockLimit,
    #[serde(default)]
    pub icon: Option<String>,
}

impl GiftDraft {
    pub const DEFAULT_ICON: &'static str = "🎁";

    pub fn named(name: impl Into<String>, gift_type: GiftType, limit: StockLimit) -> Self {
        Self { name: name.into(), gift_type, limit, icon: None }
    }

    pub(crate) fn into_gift(self) -> Gift {
        Gift {
            id: EntityId::new(),
            icon: self.icon.unwrap_or_else(|| Self::DEFAULT_ICON.to_string()),
            initial_limit: self.limit,
            limit: self.limit,
            name: self.name,
            gift_type: self.gift_type,
        }
    }
}

impl Default for GiftDraft {
    /// Blank row added by "Ajouter un gain"
    fn default() -> Self {
        Self {
            name: String::new(),
            gift_type: GiftType::Eat,
            limit: StockLimit::Finite(1),
            icon: None,
        }
    }
}
