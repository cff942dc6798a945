//! Data Transfer Objects (DTOs)
//!
//! Objects for transferring data across boundaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::aggregates::{Campaign, CampaignConfiguration};
use crate::domain::entities::GiftDraft;
use crate::domain::value_objects::{
    ActionType, ConditionPrecedence, GameType, GiftType, Profile, StockLimit,
};

// =============================================================================
// Commands
// =============================================================================

/// One operator edit, as sent by the form or read from a script
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditCommand {
    SetWinRate { enabled: bool },
    SetAllConditions { enabled: bool },
    SetMinPurchase { enabled: bool },
    SetMinPurchaseAmount { amount: String },
    SetPrecedence { precedence: ConditionPrecedence },

    AddGift { gift: GiftDraft },
    RemoveGift { index: usize },
    RenameGift { index: usize, name: String },
    SetGiftType { index: usize, gift_type: GiftType },
    SetGiftIcon { index: usize, icon: String },
    SetGiftLimit { index: usize, limit: StockLimit },
    SetGiftUnlimited { index: usize, unlimited: bool },

    AddAction { action_type: ActionType, target: String },
    RemoveAction { index: usize },
    MoveAction { from: usize, to: usize },
    UpdateActionTarget { index: usize, target: String },

    SelectGame { game: GameType },
    SetColors { primary: String, secondary: String },
    SetProfile { profile: Profile },
    SetLogoUri { uri: String },
    SetDisabled { disabled: bool },
    SetLabel { label: String },
    SetEnabled { enabled: bool },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigurePinCommand {
    pub pin: String,
    pub confirmation: String,
}

// =============================================================================
// Views (Read Models)
// =============================================================================

/// Immutable copy of a campaign handed to the submission handler
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignSnapshot {
    pub id: String,
    pub profile: Profile,
    pub configuration: CampaignConfiguration,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub enabled: bool,
    pub label: String,
    #[serde(rename = "placeId")]
    pub place_id: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl From<&Campaign> for CampaignSnapshot {
    fn from(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id().to_string(),
            profile: campaign.profile(),
            configuration: campaign.configuration().clone(),
            created_at: campaign.created_at(),
            created_by: campaign.created_by().to_string(),
            enabled: campaign.is_enabled(),
            label: campaign.label().to_string(),
            place_id: campaign.place_id().to_string(),
            updated_at: campaign.updated_at(),
            updated_by: campaign.updated_by().to_string(),
        }
    }
}

/// Banner the editor shows next to the form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Advisory {
    PinNotConfigured,
    WinRateActive,
    BasicProfileRestrictions,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Self::PinNotConfigured => {
                "Votre Code PIN n'est pas configuré. Activez-le pour sécuriser la récupération des cadeaux par vos clients."
            }
            Self::WinRateActive => {
                "Mode 100% gagnant activé : tous les joueurs remporteront un prix. Au moins un gain doit être en quantité illimitée."
            }
            Self::BasicProfileRestrictions => {
                "Passez au profil Premium pour débloquer tous les types de jeux et la personnalisation des couleurs."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_command_wire_format() {
        let json = r#"{"command": "add_action", "action_type": "TIKTOK", "target": "https://tiktok.com/@frite"}"#;
        let command: EditCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            command,
            EditCommand::AddAction {
                action_type: ActionType::Tiktok,
                target: "https://tiktok.com/@frite".into(),
            }
        );
    }

    #[test]
    fn test_add_gift_command_fills_draft_defaults() {
        let json = r#"{"command": "add_gift", "gift": {"name": "Boisson"}}"#;
        let command: EditCommand = serde_json::from_str(json).unwrap();
        let EditCommand::AddGift { gift } = command else {
            panic!("expected add_gift");
        };
        assert_eq!(gift.gift_type, GiftType::Eat);
        assert_eq!(gift.limit, StockLimit::Finite(1));
    }

    #[test]
    fn test_snapshot_uses_form_field_names() {
        let campaign = Campaign::default_for(Profile::Premium);
        let json = serde_json::to_value(CampaignSnapshot::from(&campaign)).unwrap();

        assert_eq!(json["placeId"], "place1");
        assert_eq!(json["profile"], "PREMIUM");
        assert_eq!(json["label"], "Ma Campagne");
        assert!(json["configuration"]["retrievalConditions"].is_array());
    }
}
