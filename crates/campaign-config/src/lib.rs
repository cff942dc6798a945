//! Loyalty Campaign Configuration Engine
//!
//! Consistency engine behind the campaign configuration form of a gamified
//! loyalty product: customer actions, a game, prize tiers ("gifts") with
//! stock limits and the retrieval conditions gating redemption.
//!
//! ## Architecture
//!
//! - **Domain Layer**: the `Campaign` aggregate, gift/condition/action
//!   entities, value objects and the rule services
//! - **Application Layer**: the editor service, edit commands and snapshots
//! - **Ports Layer**: inbound use cases, outbound submission/PIN/event ports
//! - **Infrastructure Layer**: tracing-backed and in-memory adapters
//!
//! ## Rules
//!
//! - **Gift-Set Normalizer**: loss slot and unlimited-gift invariants
//! - **Condition Synchronizer**: one retrieval condition per gift
//! - **Action List Manager**: at most three actions, priorities `1..=N`
//!
//! Every edit runs both gift and condition rules before it returns, so a
//! caller never observes a half-settled configuration.

pub mod domain;
pub mod application;
pub mod ports;
pub mod infrastructure;
pub mod error;

// Re-exports for convenience
pub use domain::aggregates::{Campaign, CampaignConfiguration, ActionList, Reconciliation, MAX_ACTIONS};
pub use domain::entities::{Action, Condition, Gift, GiftDraft};
pub use domain::value_objects::{
    ActionType, Colors, ConditionPolicy, ConditionPrecedence, EntityId, GameType, GiftType,
    HexColor, PinCode, PinError, Profile, StockLimit,
};
pub use domain::services::{ConditionSynchronizer, GiftSetNormalizer, NormalizedGifts};
pub use domain::events::{ActionEvent, CampaignEvent, DomainEvent, GiftEvent};
pub use application::{Advisory, CampaignEditorService, CampaignSnapshot, ConfigurePinCommand, EditCommand};
pub use ports::inbound::{CampaignEditorUseCases, UseCaseError};
pub use ports::outbound::{EventPublisher, OutboundError, PinConfiguredHandler, SubmissionHandler};
pub use error::{CampaignError, Result};
