//! Domain Events
//!
//! Events raised by the campaign aggregate, drained on save and handed to
//! the event publisher.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_objects::{
    ActionType, ConditionPolicy, EntityId, GameType, Profile, StockLimit,
};

/// All domain events in the campaign bounded context
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    Campaign(CampaignEvent),
    Gift(GiftEvent),
    Action(ActionEvent),
}

/// Campaign-level events
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CampaignEvent {
    Created {
        campaign_id: EntityId,
        profile: Profile,
        created_at: DateTime<Utc>,
    },

    GameSelected {
        campaign_id: EntityId,
        from: GameType,
        to: GameType,
    },

    ColorsChanged {
        campaign_id: EntityId,
        primary: String,
        secondary: String,
    },

    ProfileChanged {
        campaign_id: EntityId,
        from: Profile,
        to: Profile,
    },

    PolicyChanged {
        campaign_id: EntityId,
        policy: ConditionPolicy,
    },

    ConditionsResynced {
        campaign_id: EntityId,
        count: usize,
    },

    LogoChanged {
        campaign_id: EntityId,
        logo_uri: String,
    },

    GameDisabledChanged {
        campaign_id: EntityId,
        disabled: bool,
    },

    Relabeled {
        campaign_id: EntityId,
        old_label: String,
        new_label: String,
    },

    EnabledChanged {
        campaign_id: EntityId,
        enabled: bool,
    },

    PinConfigured {
        campaign_id: EntityId,
        configured_at: DateTime<Utc>,
    },

    Submitted {
        campaign_id: EntityId,
        submitted_at: DateTime<Utc>,
    },
}

/// Gift list events, including the ones raised by normalization
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GiftEvent {
    Added {
        gift_id: EntityId,
        name: String,
    },

    Removed {
        gift_id: EntityId,
    },

    LimitChanged {
        gift_id: EntityId,
        old_limit: StockLimit,
        new_limit: StockLimit,
    },

    Renamed {
        gift_id: EntityId,
        old_name: String,
        new_name: String,
    },

    IconChanged {
        gift_id: EntityId,
        icon: String,
    },

    LossSlotInserted {
        gift_id: EntityId,
    },

    LossSlotsRemoved {
        count: usize,
    },

    CoercedUnlimited {
        gift_id: EntityId,
    },
}

/// Action list events
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionEvent {
    Added {
        action_id: EntityId,
        action_type: ActionType,
        priority: u8,
    },

    Removed {
        action_id: EntityId,
    },

    Moved {
        action_id: EntityId,
        from: u8,
        to: u8,
    },

    TargetUpdated {
        action_id: EntityId,
    },
}

impl DomainEvent {
    /// Stable event name, used as the log/event-bus subject
    pub fn name(&self) -> &'static str {
        match self {
            Self::Campaign(e) => match e {
                CampaignEvent::Created { .. } => "campaign.created",
                CampaignEvent::GameSelected { .. } => "campaign.game_selected",
                CampaignEvent::ColorsChanged { .. } => "campaign.colors_changed",
                CampaignEvent::ProfileChanged { .. } => "campaign.profile_changed",
                CampaignEvent::PolicyChanged { .. } => "campaign.policy_changed",
                CampaignEvent::ConditionsResynced { .. } => "campaign.conditions_resynced",
                CampaignEvent::LogoChanged { .. } => "campaign.logo_changed",
                CampaignEvent::GameDisabledChanged { .. } => "campaign.game_disabled_changed",
                CampaignEvent::Relabeled { .. } => "campaign.relabeled",
                CampaignEvent::EnabledChanged { .. } => "campaign.enabled_changed",
                CampaignEvent::PinConfigured { .. } => "campaign.pin_configured",
                CampaignEvent::Submitted { .. } => "campaign.submitted",
            },
            Self::Gift(e) => match e {
                GiftEvent::Added { .. } => "gift.added",
                GiftEvent::Removed { .. } => "gift.removed",
                GiftEvent::LimitChanged { .. } => "gift.limit_changed",
                GiftEvent::Renamed { .. } => "gift.renamed",
                GiftEvent::IconChanged { .. } => "gift.icon_changed",
                GiftEvent::LossSlotInserted { .. } => "gift.loss_slot_inserted",
                GiftEvent::LossSlotsRemoved { .. } => "gift.loss_slots_removed",
                GiftEvent::CoercedUnlimited { .. } => "gift.coerced_unlimited",
            },
            Self::Action(e) => match e {
                ActionEvent::Added { .. } => "action.added",
                ActionEvent::Removed { .. } => "action.removed",
                ActionEvent::Moved { .. } => "action.moved",
                ActionEvent::TargetUpdated { .. } => "action.target_updated",
            },
        }
    }
}
