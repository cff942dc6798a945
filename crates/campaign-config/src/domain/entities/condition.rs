//! Retrieval condition entity

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::EntityId;

/// Redemption requirement attached to one gift, matched by gift name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub id: EntityId,
    pub name: String,
    pub value: String,
}

impl Condition {
    pub const NONE: &'static str = "Aucune";
    pub const ALL_GAINS: &'static str = "Pour tous les gains";

    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { id: EntityId::new(), name: name.into(), value: value.into() }
    }

    pub fn min_purchase(amount: &str) -> String {
        format!("Achat minimum de {}€", amount)
    }
}
