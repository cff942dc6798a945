//! Campaign Aggregate
//!
//! Aggregate root for one loyalty campaign. Every command validates first,
//! mutates second and reconciles last, so a rejected command leaves the
//! campaign untouched and an accepted one leaves it consistent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::action_list::ActionList;
use crate::domain::entities::{Action, Condition, Gift, GiftDraft};
use crate::domain::events::{ActionEvent, CampaignEvent, DomainEvent, GiftEvent};
use crate::domain::services::{ConditionSynchronizer, GiftSetNormalizer};
use crate::domain::value_objects::{
    ActionType, Colors, ConditionPolicy, ConditionPrecedence, EntityId, GameType, GiftType,
    HexColor, Profile, StockLimit,
};
use crate::error::{CampaignError, Result};

// =============================================================================
// Configuration
// =============================================================================

/// The value under edit
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignConfiguration {
    pub actions: ActionList,
    pub colors: Colors,
    pub disabled: bool,
    pub game_type: GameType,
    pub gifts: Vec<Gift>,
    #[serde(rename = "retrievalConditions")]
    pub retrieval_conditions: Vec<Condition>,
    pub logo_uri: String,
    #[serde(default)]
    pub policy: ConditionPolicy,
}

/// What a reconcile pass changed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub loss_inserted: Option<EntityId>,
    pub loss_removed: usize,
    pub coerced_unlimited: Option<EntityId>,
    pub loss_repinned: bool,
    pub conditions_replaced: bool,
}

impl Reconciliation {
    pub fn is_noop(&self) -> bool {
        self.loss_inserted.is_none()
            && self.loss_removed == 0
            && self.coerced_unlimited.is_none()
            && !self.loss_repinned
            && !self.conditions_replaced
    }
}

impl CampaignConfiguration {
    /// Sample configuration a new campaign starts from
    pub fn seeded() -> Self {
        let action = Action {
            id: EntityId::from_string("1"),
            priority: 1,
            target: "https://google.com/biz".to_string(),
            action_type: ActionType::GoogleReview,
        };
        let gift = Gift {
            id: EntityId::from_string("1"),
            icon: "🍟".to_string(),
            initial_limit: StockLimit::Finite(15),
            limit: StockLimit::Finite(15),
            name: "Frite".to_string(),
            gift_type: GiftType::Eat,
        };
        let condition = Condition {
            id: EntityId::from_string("1"),
            name: "Frite".to_string(),
            value: Condition::NONE.to_string(),
        };

        Self {
            actions: ActionList::single(action),
            gifts: vec![gift],
            retrieval_conditions: vec![condition],
            ..Default::default()
        }
    }

    /// Gift list first, then conditions from the updated gifts
    pub fn reconcile(&mut self) -> Reconciliation {
        let normalized = GiftSetNormalizer::normalize(&self.gifts, self.policy.win_rate);
        let mut outcome = Reconciliation {
            loss_inserted: normalized.loss_inserted,
            loss_removed: normalized.loss_removed,
            coerced_unlimited: normalized.coerced_unlimited,
            loss_repinned: normalized.loss_repinned,
            conditions_replaced: false,
        };
        self.gifts = normalized.gifts;

        if let Some(conditions) =
            ConditionSynchronizer::synchronize(&self.gifts, &self.retrieval_conditions, &self.policy)
        {
            self.retrieval_conditions = conditions;
            outcome.conditions_replaced = true;
        }

        outcome
    }

    /// Action rules a stored configuration may have drifted from
    pub fn validate(&self) -> Result<()> {
        self.actions.validate()
    }

    /// Valid actions, and a reconcile pass would leave it as is
    pub fn is_consistent(&self) -> bool {
        let mut copy = self.clone();
        self.validate().is_ok() && copy.reconcile().is_noop()
    }

    pub fn regular_gifts(&self) -> impl Iterator<Item = &Gift> {
        self.gifts.iter().filter(|g| !g.is_loss())
    }

    pub fn loss_slot(&self) -> Option<&Gift> {
        self.gifts.iter().find(|g| g.is_loss())
    }
}

// =============================================================================
// Aggregate root
// =============================================================================

/// Campaign aggregate root
#[derive(Clone, Debug)]
pub struct Campaign {
    id: EntityId,
    profile: Profile,
    label: String,
    place_id: String,
    enabled: bool,
    configuration: CampaignConfiguration,
    pin_configured: bool,
    created_at: DateTime<Utc>,
    created_by: String,
    updated_at: DateTime<Utc>,
    updated_by: String,
    events: Vec<DomainEvent>,
}

impl Campaign {
    pub const DEFAULT_LABEL: &'static str = "Ma Campagne";
    pub const DEFAULT_PLACE: &'static str = "place1";

    /// Create a campaign from the sample configuration
    pub fn create(
        profile: Profile,
        label: impl Into<String>,
        place_id: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        let created_by = created_by.into();

        let mut campaign = Self {
            id: EntityId::new(),
            profile,
            label: label.into(),
            place_id: place_id.into(),
            enabled: true,
            configuration: CampaignConfiguration::seeded(),
            pin_configured: false,
            created_at: now,
            created_by: created_by.clone(),
            updated_at: now,
            updated_by: created_by,
            events: vec![],
        };

        campaign.raise_event(DomainEvent::Campaign(CampaignEvent::Created {
            campaign_id: campaign.id.clone(),
            profile,
            created_at: now,
        }));
        campaign.reconcile();

        campaign
    }

    /// Campaign as the form shows it on first load
    pub fn default_for(profile: Profile) -> Self {
        Self::create(profile, Self::DEFAULT_LABEL, Self::DEFAULT_PLACE, "user")
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> &EntityId { &self.id }
    pub fn profile(&self) -> Profile { self.profile }
    pub fn label(&self) -> &str { &self.label }
    pub fn place_id(&self) -> &str { &self.place_id }
    pub fn is_enabled(&self) -> bool { self.enabled }
    pub fn configuration(&self) -> &CampaignConfiguration { &self.configuration }
    pub fn policy(&self) -> &ConditionPolicy { &self.configuration.policy }
    pub fn gifts(&self) -> &[Gift] { &self.configuration.gifts }
    pub fn conditions(&self) -> &[Condition] { &self.configuration.retrieval_conditions }
    pub fn actions(&self) -> &ActionList { &self.configuration.actions }
    pub fn game_type(&self) -> GameType { self.configuration.game_type }
    pub fn colors(&self) -> &Colors { &self.configuration.colors }
    pub fn is_pin_configured(&self) -> bool { self.pin_configured }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn created_by(&self) -> &str { &self.created_by }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }
    pub fn updated_by(&self) -> &str { &self.updated_by }
    pub fn pending_events(&self) -> &[DomainEvent] { &self.events }

    // =========================================================================
    // Condition policy
    // =========================================================================

    /// Toggle "Jeu 100% gagnant"
    pub fn set_win_rate(&mut self, win_rate: bool) -> Result<()> {
        if win_rate && self.configuration.regular_gifts().next().is_none() {
            return Err(CampaignError::UnlimitedGiftRequired);
        }
        self.update_policy(|p| p.win_rate = win_rate);
        Ok(())
    }

    /// Toggle "Pour tous les gains"
    pub fn set_all_conditions(&mut self, enabled: bool) {
        self.update_policy(|p| p.all_conditions = enabled);
    }

    pub fn set_min_purchase(&mut self, enabled: bool) {
        self.update_policy(|p| p.min_purchase = enabled);
    }

    pub fn set_min_purchase_amount(&mut self, amount: impl Into<String>) {
        let amount = amount.into();
        self.update_policy(|p| p.min_purchase_amount = amount.trim().to_string());
    }

    pub fn set_precedence(&mut self, precedence: ConditionPrecedence) {
        self.update_policy(|p| p.precedence = precedence);
    }

    fn update_policy(&mut self, change: impl FnOnce(&mut ConditionPolicy)) {
        let before = self.configuration.policy.clone();
        change(&mut self.configuration.policy);
        if self.configuration.policy == before {
            return;
        }

        self.touch();
        self.raise_event(DomainEvent::Campaign(CampaignEvent::PolicyChanged {
            campaign_id: self.id.clone(),
            policy: self.configuration.policy.clone(),
        }));
        self.reconcile();
    }

    // =========================================================================
    // Gifts
    // =========================================================================

    /// Append a gift, returns its id
    pub fn add_gift(&mut self, draft: GiftDraft) -> Result<EntityId> {
        if draft.gift_type.is_loss() {
            return Err(CampaignError::ReservedGiftType);
        }

        let gift = draft.into_gift();
        let id = gift.id.clone();
        self.raise_event(DomainEvent::Gift(GiftEvent::Added {
            gift_id: id.clone(),
            name: gift.name.clone(),
        }));
        self.configuration.gifts.push(gift);
        self.touch();
        self.reconcile();

        Ok(id)
    }

    pub fn remove_gift(&mut self, index: usize) -> Result<Gift> {
        GiftSetNormalizer::check_removal(&self.configuration.gifts, index, self.configuration.policy.win_rate)?;

        let removed = self.configuration.gifts.remove(index);
        self.raise_event(DomainEvent::Gift(GiftEvent::Removed { gift_id: removed.id.clone() }));
        self.touch();
        self.reconcile();

        Ok(removed)
    }

    pub fn rename_gift(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        let gift = self.regular_gift_mut(index)?;
        let new_name = name.into();
        if gift.name == new_name {
            return Ok(());
        }

        let old_name = std::mem::replace(&mut gift.name, new_name.clone());
        let gift_id = gift.id.clone();
        self.raise_event(DomainEvent::Gift(GiftEvent::Renamed { gift_id, old_name, new_name }));
        self.touch();
        self.reconcile();

        Ok(())
    }

    pub fn set_gift_type(&mut self, index: usize, gift_type: GiftType) -> Result<()> {
        if gift_type.is_loss() {
            return Err(CampaignError::ReservedGiftType);
        }
        let gift = self.regular_gift_mut(index)?;
        gift.gift_type = gift_type;
        self.touch();
        self.reconcile();
        Ok(())
    }

    pub fn set_gift_icon(&mut self, index: usize, icon: impl Into<String>) -> Result<()> {
        let gift = self.regular_gift_mut(index)?;
        let icon = icon.into();
        if gift.icon == icon {
            return Ok(());
        }
        gift.icon = icon.clone();
        let gift_id = gift.id.clone();

        self.raise_event(DomainEvent::Gift(GiftEvent::IconChanged { gift_id, icon }));
        self.touch();
        Ok(())
    }

    /// Set both the current and initial stock of a gift
    pub fn set_gift_limit(&mut self, index: usize, limit: StockLimit) -> Result<()> {
        GiftSetNormalizer::check_limit_change(
            &self.configuration.gifts,
            index,
            limit,
            self.configuration.policy.win_rate,
        )?;

        let gift = &mut self.configuration.gifts[index];
        let old_limit = gift.limit;
        if old_limit == limit && gift.initial_limit == limit {
            return Ok(());
        }
        gift.set_limit(limit);
        let gift_id = gift.id.clone();

        self.raise_event(DomainEvent::Gift(GiftEvent::LimitChanged {
            gift_id,
            old_limit,
            new_limit: limit,
        }));
        self.touch();
        self.reconcile();

        Ok(())
    }

    /// "Illimité" checkbox. Unchecking resets the stock to 1.
    pub fn set_gift_unlimited(&mut self, index: usize, unlimited: bool) -> Result<()> {
        let limit = if unlimited { StockLimit::Unlimited } else { StockLimit::Finite(1) };
        self.set_gift_limit(index, limit)
    }

    fn regular_gift_mut(&mut self, index: usize) -> Result<&mut Gift> {
        let gift = self
            .configuration
            .gifts
            .get_mut(index)
            .ok_or(CampaignError::GiftNotFound(index))?;
        if gift.is_loss() {
            return Err(CampaignError::LossGiftLocked);
        }
        Ok(gift)
    }

    // =========================================================================
    // Actions
    // =========================================================================

    pub fn add_action(&mut self, action_type: ActionType, target: impl Into<String>) -> Result<EntityId> {
        let action = self.configuration.actions.add(action_type, target)?;
        self.raise_event(DomainEvent::Action(ActionEvent::Added {
            action_id: action.id.clone(),
            action_type,
            priority: action.priority,
        }));
        self.touch();
        Ok(action.id)
    }

    pub fn remove_action(&mut self, index: usize) -> Result<Action> {
        let removed = self.configuration.actions.remove(index)?;
        self.raise_event(DomainEvent::Action(ActionEvent::Removed { action_id: removed.id.clone() }));
        self.touch();
        Ok(removed)
    }

    pub fn move_action(&mut self, from: usize, to: usize) -> Result<()> {
        self.configuration.actions.move_action(from, to)?;
        if from == to {
            return Ok(());
        }

        if let Some(moved) = self.configuration.actions.get(to) {
            let event = ActionEvent::Moved {
                action_id: moved.id.clone(),
                from: from as u8 + 1,
                to: moved.priority,
            };
            self.raise_event(DomainEvent::Action(event));
        }
        self.touch();
        Ok(())
    }

    pub fn update_action_target(&mut self, index: usize, target: impl Into<String>) -> Result<()> {
        self.configuration.actions.update_target(index, target)?;
        if let Some(action) = self.configuration.actions.get(index) {
            let action_id = action.id.clone();
            self.raise_event(DomainEvent::Action(ActionEvent::TargetUpdated { action_id }));
        }
        self.touch();
        Ok(())
    }

    // =========================================================================
    // Game, profile and branding
    // =========================================================================

    pub fn select_game(&mut self, game: GameType) -> Result<()> {
        if !self.profile.allows_game(game) {
            return Err(CampaignError::PremiumRequired(game.label()));
        }

        let from = self.configuration.game_type;
        if from == game {
            return Ok(());
        }
        self.configuration.game_type = game;
        self.touch();
        self.raise_event(DomainEvent::Campaign(CampaignEvent::GameSelected {
            campaign_id: self.id.clone(),
            from,
            to: game,
        }));

        Ok(())
    }

    pub fn set_colors(&mut self, primary: &str, secondary: &str) -> Result<()> {
        if !self.profile.can_customize() {
            return Err(CampaignError::PremiumRequired("Couleurs du logo"));
        }

        let colors = Colors {
            primary: HexColor::parse(primary)?,
            secondary: HexColor::parse(secondary)?,
        };
        if colors == self.configuration.colors {
            return Ok(());
        }

        self.raise_event(DomainEvent::Campaign(CampaignEvent::ColorsChanged {
            campaign_id: self.id.clone(),
            primary: colors.primary.to_string(),
            secondary: colors.secondary.to_string(),
        }));
        self.configuration.colors = colors;
        self.touch();

        Ok(())
    }

    /// Switch tier. A basic campaign falls back to the wheel.
    pub fn set_profile(&mut self, profile: Profile) {
        let from = self.profile;
        if from == profile {
            return;
        }

        self.profile = profile;
        self.raise_event(DomainEvent::Campaign(CampaignEvent::ProfileChanged {
            campaign_id: self.id.clone(),
            from,
            to: profile,
        }));

        if !profile.allows_game(self.configuration.game_type) {
            let previous = self.configuration.game_type;
            self.configuration.game_type = GameType::Wheel;
            self.raise_event(DomainEvent::Campaign(CampaignEvent::GameSelected {
                campaign_id: self.id.clone(),
                from: previous,
                to: GameType::Wheel,
            }));
        }
        self.touch();
    }

    pub fn set_logo_uri(&mut self, uri: impl Into<String>) {
        let logo_uri = uri.into();
        if self.configuration.logo_uri == logo_uri {
            return;
        }
        self.configuration.logo_uri = logo_uri.clone();
        self.raise_event(DomainEvent::Campaign(CampaignEvent::LogoChanged {
            campaign_id: self.id.clone(),
            logo_uri,
        }));
        self.touch();
    }

    /// Game switched off for customers
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.configuration.disabled == disabled {
            return;
        }
        self.configuration.disabled = disabled;
        self.raise_event(DomainEvent::Campaign(CampaignEvent::GameDisabledChanged {
            campaign_id: self.id.clone(),
            disabled,
        }));
        self.touch();
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        let new_label = label.into();
        if self.label == new_label {
            return;
        }
        let old_label = std::mem::replace(&mut self.label, new_label.clone());
        self.raise_event(DomainEvent::Campaign(CampaignEvent::Relabeled {
            campaign_id: self.id.clone(),
            old_label,
            new_label,
        }));
        self.touch();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        self.raise_event(DomainEvent::Campaign(CampaignEvent::EnabledChanged {
            campaign_id: self.id.clone(),
            enabled,
        }));
        self.touch();
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    pub fn record_pin_configured(&mut self) {
        let now = Utc::now();
        self.pin_configured = true;
        self.raise_event(DomainEvent::Campaign(CampaignEvent::PinConfigured {
            campaign_id: self.id.clone(),
            configured_at: now,
        }));
    }

    pub fn mark_submitted(&mut self, by: impl Into<String>) {
        let now = Utc::now();
        self.updated_by = by.into();
        self.updated_at = now;
        self.raise_event(DomainEvent::Campaign(CampaignEvent::Submitted {
            campaign_id: self.id.clone(),
            submitted_at: now,
        }));
    }

    // =========================================================================
    // Event Management
    // =========================================================================

    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    /// Put back events that could not be published, ahead of newer ones
    pub fn restore_events(&mut self, mut events: Vec<DomainEvent>) {
        events.append(&mut self.events);
        self.events = events;
    }

    fn raise_event(&mut self, event: DomainEvent) {
        self.events.push(event);
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn reconcile(&mut self) {
        let outcome = self.configuration.reconcile();
        if outcome.is_noop() {
            return;
        }

        tracing::debug!(
            campaign_id = %self.id,
            loss_inserted = outcome.loss_inserted.is_some(),
            loss_removed = outcome.loss_removed,
            coerced_unlimited = outcome.coerced_unlimited.is_some(),
            conditions_replaced = outcome.conditions_replaced,
            "Reconciled campaign configuration"
        );

        if let Some(gift_id) = outcome.loss_inserted {
            self.raise_event(DomainEvent::Gift(GiftEvent::LossSlotInserted { gift_id }));
        }
        if outcome.loss_removed > 0 {
            self.raise_event(DomainEvent::Gift(GiftEvent::LossSlotsRemoved {
                count: outcome.loss_removed,
            }));
        }
        if let Some(gift_id) = outcome.coerced_unlimited {
            self.raise_event(DomainEvent::Gift(GiftEvent::CoercedUnlimited { gift_id }));
        }
        if outcome.conditions_replaced {
            self.raise_event(DomainEvent::Campaign(CampaignEvent::ConditionsResynced {
                campaign_id: self.id.clone(),
                count: self.configuration.retrieval_conditions.len(),
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::MAX_ACTIONS;
    use proptest::prelude::*;

    fn campaign() -> Campaign {
        Campaign::default_for(Profile::Premium)
    }

    fn names(gifts: &[Gift]) -> Vec<&str> {
        gifts.iter().map(|g| g.name.as_str()).collect()
    }

    fn loss_count(campaign: &Campaign) -> usize {
        campaign.gifts().iter().filter(|g| g.is_loss()).count()
    }

    #[test]
    fn test_default_campaign_is_reconciled() {
        let campaign = campaign();

        assert_eq!(campaign.label(), "Ma Campagne");
        assert_eq!(campaign.place_id(), "place1");
        assert_eq!(names(campaign.gifts()), ["Frite", "Perte"]);
        assert_eq!(campaign.conditions().len(), 2);
        assert_eq!(campaign.conditions()[0].id.as_str(), "1");
        assert_eq!(campaign.conditions()[1].name, "Perte");
        assert_eq!(campaign.actions().priorities(), vec![1]);
        assert!(campaign.configuration().is_consistent());
    }

    #[test]
    fn test_scenario_toggle_win_rate_on() {
        let mut campaign = campaign();
        campaign.set_win_rate(true).unwrap();

        assert_eq!(names(campaign.gifts()), ["Frite"]);
        assert_eq!(campaign.gifts()[0].limit, StockLimit::Unlimited);
        assert_eq!(campaign.gifts()[0].initial_limit, StockLimit::Unlimited);
        assert_eq!(campaign.conditions().len(), 1);
    }

    #[test]
    fn test_scenario_toggle_win_rate_back_off() {
        let mut campaign = campaign();
        campaign.set_win_rate(true).unwrap();
        campaign.set_win_rate(false).unwrap();

        assert_eq!(names(campaign.gifts()), ["Frite", "Perte"]);
        assert_eq!(campaign.gifts()[0].limit, StockLimit::Unlimited);
    }

    #[test]
    fn test_scenario_last_unlimited_gift_cannot_be_removed() {
        let mut campaign = campaign();
        campaign.set_win_rate(true).unwrap();
        campaign
            .add_gift(GiftDraft::named("Boisson", GiftType::Drink, StockLimit::Finite(1)))
            .unwrap();

        let before = campaign.gifts().to_vec();
        assert_eq!(campaign.remove_gift(0), Err(CampaignError::UnlimitedGiftRequired));
        assert_eq!(campaign.gifts(), before.as_slice());

        let removed = campaign.remove_gift(1).unwrap();
        assert_eq!(removed.name, "Boisson");
        assert_eq!(names(campaign.gifts()), ["Frite"]);
    }

    #[test]
    fn test_loss_slot_is_locked() {
        let mut campaign = campaign();
        assert_eq!(campaign.remove_gift(1), Err(CampaignError::LossGiftLocked));
        assert_eq!(campaign.rename_gift(1, "Rien"), Err(CampaignError::LossGiftLocked));
        assert_eq!(campaign.set_gift_limit(1, StockLimit::Finite(3)), Err(CampaignError::LossGiftLocked));
        assert_eq!(loss_count(&campaign), 1);
    }

    #[test]
    fn test_loss_type_is_reserved() {
        let mut campaign = campaign();
        let draft = GiftDraft::named("Rien", GiftType::Loss, StockLimit::Unlimited);
        assert_eq!(campaign.add_gift(draft), Err(CampaignError::ReservedGiftType));
        assert_eq!(campaign.set_gift_type(0, GiftType::Loss), Err(CampaignError::ReservedGiftType));
    }

    #[test]
    fn test_unchecking_last_unlimited_is_rejected() {
        let mut campaign = campaign();
        campaign.set_win_rate(true).unwrap();

        assert_eq!(campaign.set_gift_unlimited(0, false), Err(CampaignError::UnlimitedGiftRequired));
        assert!(campaign.gifts()[0].is_unlimited());
    }

    #[test]
    fn test_unchecking_unlimited_resets_stock_to_one() {
        let mut campaign = campaign();
        campaign.set_gift_unlimited(0, true).unwrap();
        campaign.set_gift_unlimited(0, false).unwrap();

        assert_eq!(campaign.gifts()[0].limit, StockLimit::Finite(1));
        assert_eq!(campaign.gifts()[0].initial_limit, StockLimit::Finite(1));
    }

    #[test]
    fn test_win_rate_needs_a_regular_gift() {
        let mut campaign = campaign();
        campaign.remove_gift(0).unwrap();

        assert_eq!(campaign.set_win_rate(true), Err(CampaignError::UnlimitedGiftRequired));
        assert_eq!(loss_count(&campaign), 1);
        assert!(!campaign.policy().win_rate);
    }

    #[test]
    fn test_min_purchase_overrides_all_gains() {
        let mut campaign = campaign();
        campaign.set_all_conditions(true);
        assert!(campaign.conditions().iter().all(|c| c.value == "Pour tous les gains"));

        campaign.set_min_purchase(true);
        campaign.set_min_purchase_amount("10");
        assert!(campaign.conditions().iter().all(|c| c.value == "Achat minimum de 10€"));

        campaign.set_precedence(ConditionPrecedence::AllConditionsFirst);
        assert!(campaign.conditions().iter().all(|c| c.value == "Pour tous les gains"));
    }

    #[test]
    fn test_rename_resyncs_conditions() {
        let mut campaign = campaign();
        campaign.rename_gift(0, "Burger").unwrap();

        let condition_names: Vec<_> = campaign.conditions().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(condition_names, ["Burger", "Perte"]);
    }

    #[test]
    fn test_unnamed_gift_condition_uses_type_code() {
        let mut campaign = campaign();
        campaign.add_gift(GiftDraft::default()).unwrap();

        let last = campaign.conditions().last().unwrap();
        assert_eq!(last.name, "EAT");
    }

    #[test]
    fn test_basic_profile_restrictions() {
        let mut campaign = Campaign::default_for(Profile::Basic);

        assert!(matches!(campaign.select_game(GameType::Mystery), Err(CampaignError::PremiumRequired(_))));
        assert!(matches!(
            campaign.set_colors("#000000", "#FFFFFF"),
            Err(CampaignError::PremiumRequired(_))
        ));
        assert_eq!(campaign.game_type(), GameType::Wheel);
        assert!(campaign.select_game(GameType::Wheel).is_ok());
    }

    #[test]
    fn test_downgrade_falls_back_to_wheel() {
        let mut campaign = campaign();
        campaign.select_game(GameType::Card).unwrap();
        campaign.set_profile(Profile::Basic);
        assert_eq!(campaign.game_type(), GameType::Wheel);
    }

    #[test]
    fn test_colors_are_validated() {
        let mut campaign = campaign();
        assert!(matches!(campaign.set_colors("#12345", "#FFFFFF"), Err(CampaignError::InvalidColor(_))));
        campaign.set_colors("#123456", "#abcdef").unwrap();
        assert_eq!(campaign.colors().secondary.as_str(), "#abcdef");
    }

    #[test]
    fn test_events_are_raised_and_drained() {
        let mut campaign = campaign();
        campaign.set_win_rate(true).unwrap();

        let events = campaign.take_events();
        let names: Vec<_> = events.iter().map(DomainEvent::name).collect();
        assert!(names.contains(&"campaign.created"));
        assert!(names.contains(&"gift.loss_slots_removed"));
        assert!(names.contains(&"gift.coerced_unlimited"));
        assert!(campaign.take_events().is_empty());
    }

    #[test]
    fn test_rejected_command_raises_nothing() {
        let mut campaign = campaign();
        campaign.take_events();

        let _ = campaign.remove_gift(1);
        let _ = campaign.add_action(ActionType::Instagram, "nope");
        assert!(campaign.pending_events().is_empty());
    }

    #[test]
    fn test_branding_edits_raise_events() {
        let mut campaign = campaign();
        campaign.take_events();

        campaign.set_gift_icon(0, "🍔").unwrap();
        campaign.set_logo_uri("https://cdn.example.com/logo.png");
        campaign.set_disabled(true);
        campaign.set_label("Printemps");
        campaign.set_enabled(false);

        let names: Vec<_> = campaign.take_events().iter().map(DomainEvent::name).collect();
        assert_eq!(
            names,
            [
                "gift.icon_changed",
                "campaign.logo_changed",
                "campaign.game_disabled_changed",
                "campaign.relabeled",
                "campaign.enabled_changed",
            ]
        );

        campaign.set_label("Printemps");
        campaign.set_gift_icon(0, "🍔").unwrap();
        assert!(campaign.pending_events().is_empty());
    }

    #[test]
    fn test_restored_events_keep_their_order() {
        let mut campaign = campaign();
        let drained = campaign.take_events();
        campaign.set_label("Été");

        campaign.restore_events(drained.clone());

        let events = campaign.take_events();
        assert_eq!(events.len(), drained.len() + 1);
        assert_eq!(&events[..drained.len()], drained.as_slice());
        assert_eq!(events.last().map(DomainEvent::name), Some("campaign.relabeled"));
    }

    #[test]
    fn test_stale_action_target_is_inconsistent() {
        let mut json = serde_json::to_value(campaign().configuration()).unwrap();
        json["actions"][0]["target"] = "nope".into();
        let config: CampaignConfiguration = serde_json::from_value(json).unwrap();

        assert!(matches!(config.validate(), Err(CampaignError::InvalidTarget { .. })));
        assert!(!config.is_consistent());
    }

    #[test]
    fn test_configuration_wire_format() {
        let json = serde_json::to_value(campaign().configuration()).unwrap();
        assert!(json["retrievalConditions"].is_array());
        assert_eq!(json["game_type"], "WHEEL");
        assert_eq!(json["gifts"][1]["limit"], -1);
        assert_eq!(json["actions"][0]["priority"], 1);
    }

    // =========================================================================
    // Properties
    // =========================================================================

    #[derive(Clone, Debug)]
    enum Op {
        WinRate(bool),
        AllConditions(bool),
        MinPurchase(bool),
        Amount(u16),
        AddGift(String, Option<u32>),
        RemoveGift(usize),
        Unlimited(usize, bool),
        Limit(usize, u32),
        Rename(usize, String),
        AddAction(usize),
        RemoveAction(usize),
        MoveAction(usize, usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<bool>().prop_map(Op::WinRate),
            any::<bool>().prop_map(Op::AllConditions),
            any::<bool>().prop_map(Op::MinPurchase),
            (0u16..500).prop_map(Op::Amount),
            ("[A-Za-z]{0,6}", proptest::option::of(0u32..50)).prop_map(|(n, l)| Op::AddGift(n, l)),
            (0usize..6).prop_map(Op::RemoveGift),
            (0usize..6, any::<bool>()).prop_map(|(i, u)| Op::Unlimited(i, u)),
            (0usize..6, 0u32..50).prop_map(|(i, l)| Op::Limit(i, l)),
            (0usize..6, "[A-Za-z]{0,6}").prop_map(|(i, n)| Op::Rename(i, n)),
            (0usize..4).prop_map(Op::AddAction),
            (0usize..4).prop_map(Op::RemoveAction),
            (0usize..4, 0usize..4).prop_map(|(f, t)| Op::MoveAction(f, t)),
        ]
    }

    fn apply(campaign: &mut Campaign, op: Op) {
        let _ = match op {
            Op::WinRate(on) => campaign.set_win_rate(on),
            Op::AllConditions(on) => {
                campaign.set_all_conditions(on);
                Ok(())
            }
            Op::MinPurchase(on) => {
                campaign.set_min_purchase(on);
                Ok(())
            }
            Op::Amount(n) => {
                campaign.set_min_purchase_amount(n.to_string());
                Ok(())
            }
            Op::AddGift(name, limit) => {
                let limit = limit.map_or(StockLimit::Unlimited, StockLimit::Finite);
                campaign.add_gift(GiftDraft::named(name, GiftType::Eat, limit)).map(|_| ())
            }
            Op::RemoveGift(i) => campaign.remove_gift(i).map(|_| ()),
            Op::Unlimited(i, on) => campaign.set_gift_unlimited(i, on),
            Op::Limit(i, n) => campaign.set_gift_limit(i, StockLimit::Finite(n)),
            Op::Rename(i, name) => campaign.rename_gift(i, name),
            Op::AddAction(t) => campaign
                .add_action(ActionType::ALL[t], ActionType::ALL[t].target_placeholder())
                .map(|_| ()),
            Op::RemoveAction(i) => campaign.remove_action(i).map(|_| ()),
            Op::MoveAction(from, to) => campaign.move_action(from, to),
        };
    }

    fn sorted(mut names: Vec<String>) -> Vec<String> {
        names.sort();
        names
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_invariants_hold_after_any_edit_sequence(ops in proptest::collection::vec(op(), 0..40)) {
            let mut campaign = campaign();

            for op in ops {
                apply(&mut campaign, op);

                let config = campaign.configuration();
                let losses = loss_count(&campaign);
                if config.policy.win_rate {
                    prop_assert_eq!(losses, 0);
                    prop_assert!(GiftSetNormalizer::unlimited_count(&config.gifts) >= 1);
                } else {
                    prop_assert_eq!(losses, 1);
                }

                let gift_names = sorted(config.gifts.iter().map(|g| g.display_name().to_string()).collect());
                let condition_names = sorted(config.retrieval_conditions.iter().map(|c| c.name.clone()).collect());
                prop_assert_eq!(gift_names, condition_names);

                let mut ids: Vec<_> = config.retrieval_conditions.iter().map(|c| c.id.clone()).collect();
                ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
                ids.dedup();
                prop_assert_eq!(ids.len(), config.retrieval_conditions.len());

                let expected: Vec<u8> = (1..=config.actions.len() as u8).collect();
                prop_assert_eq!(config.actions.priorities(), expected);
                prop_assert!(config.actions.len() <= MAX_ACTIONS);
            }
        }

        #[test]
        fn prop_reconcile_is_idempotent(ops in proptest::collection::vec(op(), 0..30)) {
            let mut campaign = campaign();
            for op in ops {
                apply(&mut campaign, op);
            }

            let mut copy = campaign.configuration().clone();
            let outcome = copy.reconcile();
            prop_assert!(outcome.is_noop());
            prop_assert_eq!(&copy, campaign.configuration());
        }
    }
}
