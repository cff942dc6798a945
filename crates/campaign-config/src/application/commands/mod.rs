//! Command handlers
//!
//! The editor service owns one campaign, runs operator edits against it and
//! talks to the outbound ports on PIN configuration and save.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::application::dto::*;
use crate::domain::aggregates::Campaign;
use crate::domain::value_objects::{PinCode, Profile};
use crate::error::CampaignError;
use crate::ports::inbound::{CampaignEditorUseCases, UseCaseError};
use crate::ports::outbound::{EventPublisher, PinConfiguredHandler, SubmissionHandler};

/// Campaign editor application service
pub struct CampaignEditorService {
    campaign: RwLock<Campaign>,
    submission_handler: Arc<dyn SubmissionHandler>,
    pin_handler: Arc<dyn PinConfiguredHandler>,
    event_publisher: Arc<dyn EventPublisher>,
    editor: String,
}

impl CampaignEditorService {
    pub fn new(
        campaign: Campaign,
        submission_handler: Arc<dyn SubmissionHandler>,
        pin_handler: Arc<dyn PinConfiguredHandler>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            campaign: RwLock::new(campaign),
            submission_handler,
            pin_handler,
            event_publisher,
            editor: "user".to_string(),
        }
    }

    /// Name recorded as `updated_by` on save
    pub fn with_editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = editor.into();
        self
    }

    /// Run one edit against the campaign
    pub fn execute(&self, command: EditCommand) -> Result<CampaignSnapshot, CampaignError> {
        let mut campaign = self.campaign.write();

        if let Err(e) = dispatch(&mut campaign, command.clone()) {
            warn!(
                campaign_id = %campaign.id(),
                ?command,
                error = %e,
                "Edit rejected"
            );
            return Err(e);
        }

        Ok(CampaignSnapshot::from(&*campaign))
    }

    /// Run a batch of edits, stopping at the first rejection
    pub fn execute_all(
        &self,
        commands: impl IntoIterator<Item = EditCommand>,
    ) -> Result<CampaignSnapshot, CampaignError> {
        let mut snapshot = self.snapshot();
        for command in commands {
            snapshot = self.execute(command)?;
        }
        Ok(snapshot)
    }

    pub fn snapshot(&self) -> CampaignSnapshot {
        CampaignSnapshot::from(&*self.campaign.read())
    }

    pub fn current_advisories(&self) -> Vec<Advisory> {
        let campaign = self.campaign.read();
        let mut advisories = Vec::new();

        if !campaign.is_pin_configured() {
            advisories.push(Advisory::PinNotConfigured);
        }
        if campaign.policy().win_rate {
            advisories.push(Advisory::WinRateActive);
        }
        if campaign.profile() == Profile::Basic {
            advisories.push(Advisory::BasicProfileRestrictions);
        }

        advisories
    }
}

fn dispatch(campaign: &mut Campaign, command: EditCommand) -> Result<(), CampaignError> {
    match command {
        EditCommand::SetWinRate { enabled } => campaign.set_win_rate(enabled)?,
        EditCommand::SetAllConditions { enabled } => campaign.set_all_conditions(enabled),
        EditCommand::SetMinPurchase { enabled } => campaign.set_min_purchase(enabled),
        EditCommand::SetMinPurchaseAmount { amount } => campaign.set_min_purchase_amount(amount),
        EditCommand::SetPrecedence { precedence } => campaign.set_precedence(precedence),

        EditCommand::AddGift { gift } => {
            campaign.add_gift(gift)?;
        }
        EditCommand::RemoveGift { index } => {
            campaign.remove_gift(index)?;
        }
        EditCommand::RenameGift { index, name } => campaign.rename_gift(index, name)?,
        EditCommand::SetGiftType { index, gift_type } => campaign.set_gift_type(index, gift_type)?,
        EditCommand::SetGiftIcon { index, icon } => campaign.set_gift_icon(index, icon)?,
        EditCommand::SetGiftLimit { index, limit } => campaign.set_gift_limit(index, limit)?,
        EditCommand::SetGiftUnlimited { index, unlimited } => {
            campaign.set_gift_unlimited(index, unlimited)?
        }

        EditCommand::AddAction { action_type, target } => {
            campaign.add_action(action_type, target)?;
        }
        EditCommand::RemoveAction { index } => {
            campaign.remove_action(index)?;
        }
        EditCommand::MoveAction { from, to } => campaign.move_action(from, to)?,
        EditCommand::UpdateActionTarget { index, target } => {
            campaign.update_action_target(index, target)?
        }

        EditCommand::SelectGame { game } => campaign.select_game(game)?,
        EditCommand::SetColors { primary, secondary } => campaign.set_colors(&primary, &secondary)?,
        EditCommand::SetProfile { profile } => campaign.set_profile(profile),
        EditCommand::SetLogoUri { uri } => campaign.set_logo_uri(uri),
        EditCommand::SetDisabled { disabled } => campaign.set_disabled(disabled),
        EditCommand::SetLabel { label } => campaign.set_label(label),
        EditCommand::SetEnabled { enabled } => campaign.set_enabled(enabled),
    }

    Ok(())
}

#[async_trait]
impl CampaignEditorUseCases for CampaignEditorService {
    async fn apply(&self, command: EditCommand) -> Result<CampaignSnapshot, UseCaseError> {
        self.execute(command).map_err(UseCaseError::from)
    }

    async fn configure_pin(&self, command: ConfigurePinCommand) -> Result<(), UseCaseError> {
        let pin = PinCode::new(&command.pin, &command.confirmation)
            .map_err(CampaignError::from)?;

        self.pin_handler.on_pin_configured(&pin).await?;

        let campaign_id = {
            let mut campaign = self.campaign.write();
            campaign.record_pin_configured();
            campaign.id().clone()
        };
        info!(campaign_id = %campaign_id, "PIN configured");

        Ok(())
    }

    async fn save(&self) -> Result<CampaignSnapshot, UseCaseError> {
        let snapshot = self.snapshot();
        snapshot.configuration.validate()?;
        if !snapshot.configuration.is_consistent() {
            return Err(UseCaseError::ValidationError(
                "configuration is not reconciled".into(),
            ));
        }

        self.submission_handler.submit(snapshot.clone()).await?;

        let (snapshot, events) = {
            let mut campaign = self.campaign.write();
            campaign.mark_submitted(self.editor.clone());
            (CampaignSnapshot::from(&*campaign), campaign.take_events())
        };

        let event_count = events.len();
        if let Err(e) = self.event_publisher.publish(events.clone()).await {
            self.campaign.write().restore_events(events);
            warn!(campaign_id = %snapshot.id, error = %e, "Event publishing failed");
            return Err(e.into());
        }

        info!(
            campaign_id = %snapshot.id,
            gifts = snapshot.configuration.gifts.len(),
            actions = snapshot.configuration.actions.len(),
            events = event_count,
            "Campaign saved"
        );

        Ok(snapshot)
    }

    async fn get_snapshot(&self) -> Result<CampaignSnapshot, UseCaseError> {
        Ok(self.snapshot())
    }

    async fn advisories(&self) -> Result<Vec<Advisory>, UseCaseError> {
        Ok(self.current_advisories())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ActionType, GiftType, StockLimit};
    use crate::domain::entities::GiftDraft;
    use crate::domain::DomainEvent;
    use crate::ports::outbound::OutboundError;
    use crate::infrastructure::{InMemoryEventPublisher, InMemoryPinHandler, InMemorySubmissionHandler};

    struct Harness {
        service: CampaignEditorService,
        submissions: Arc<InMemorySubmissionHandler>,
        pins: Arc<InMemoryPinHandler>,
        events: Arc<InMemoryEventPublisher>,
    }

    fn harness() -> Harness {
        let submissions = Arc::new(InMemorySubmissionHandler::new());
        let pins = Arc::new(InMemoryPinHandler::new());
        let events = Arc::new(InMemoryEventPublisher::new());
        let service = CampaignEditorService::new(
            Campaign::default_for(Profile::Premium),
            submissions.clone(),
            pins.clone(),
            events.clone(),
        );
        Harness { service, submissions, pins, events }
    }

    #[tokio::test]
    async fn test_apply_returns_reconciled_snapshot() {
        let h = harness();

        let snapshot = h.service.apply(EditCommand::SetWinRate { enabled: true }).await.unwrap();

        let gifts = &snapshot.configuration.gifts;
        assert_eq!(gifts.len(), 1);
        assert_eq!(gifts[0].limit, StockLimit::Unlimited);
    }

    #[tokio::test]
    async fn test_rejected_edit_maps_to_policy_error() {
        let h = harness();

        let err = h.service.apply(EditCommand::RemoveGift { index: 1 }).await.unwrap_err();

        assert!(matches!(err, UseCaseError::PolicyRejected(CampaignError::LossGiftLocked)));
        assert_eq!(err.advisory(), None);
        assert_eq!(h.service.snapshot().configuration.gifts.len(), 2);
    }

    #[tokio::test]
    async fn test_execute_all_stops_at_first_rejection() {
        let h = harness();

        let result = h.service.execute_all(vec![
            EditCommand::AddGift {
                gift: GiftDraft::named("Boisson", GiftType::Drink, StockLimit::Finite(3)),
            },
            EditCommand::AddAction {
                action_type: ActionType::Facebook,
                target: "https://example.com".into(),
            },
            EditCommand::SetLabel { label: "jamais".into() },
        ]);

        assert!(matches!(result, Err(CampaignError::InvalidTarget { .. })));
        let snapshot = h.service.snapshot();
        assert_eq!(snapshot.configuration.gifts.len(), 3);
        assert_eq!(snapshot.label, "Ma Campagne");
    }

    #[tokio::test]
    async fn test_configure_pin_calls_handler() {
        let h = harness();
        assert!(h.service.current_advisories().contains(&Advisory::PinNotConfigured));

        h.service
            .configure_pin(ConfigurePinCommand { pin: "2468".into(), confirmation: "2468".into() })
            .await
            .unwrap();

        assert_eq!(h.pins.configured(), vec!["2468".to_string()]);
        assert!(!h.service.current_advisories().contains(&Advisory::PinNotConfigured));
    }

    #[tokio::test]
    async fn test_bad_pin_never_reaches_handler() {
        let h = harness();

        let err = h
            .service
            .configure_pin(ConfigurePinCommand { pin: "2468".into(), confirmation: "2469".into() })
            .await
            .unwrap_err();

        assert!(matches!(err, UseCaseError::PolicyRejected(CampaignError::InvalidPin(_))));
        assert!(h.pins.configured().is_empty());
    }

    #[tokio::test]
    async fn test_save_submits_snapshot_and_publishes_events() {
        let h = harness().service_with_editor("marie");
        h.service.apply(EditCommand::SetMinPurchase { enabled: true }).await.unwrap();

        let saved = h.service.save().await.unwrap();

        let submitted = h.submissions.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].id, saved.id);
        assert_eq!(saved.updated_by, "marie");

        let names: Vec<_> = h.events.published().iter().map(|e| e.name()).collect();
        assert!(names.contains(&"campaign.submitted"));
        assert!(names.contains(&"campaign.policy_changed"));
    }

    #[tokio::test]
    async fn test_advisories_follow_state() {
        let h = harness();
        h.service.apply(EditCommand::SetWinRate { enabled: true }).await.unwrap();
        h.service.apply(EditCommand::SetProfile { profile: Profile::Basic }).await.unwrap();

        let advisories = h.service.advisories().await.unwrap();
        assert_eq!(
            advisories,
            vec![Advisory::PinNotConfigured, Advisory::WinRateActive, Advisory::BasicProfileRestrictions]
        );
    }

    /// Publisher that is down for the first `outages` calls
    struct FlakyPublisher {
        outages: parking_lot::Mutex<usize>,
        inner: InMemoryEventPublisher,
    }

    #[async_trait]
    impl EventPublisher for FlakyPublisher {
        async fn publish(&self, events: Vec<DomainEvent>) -> Result<(), OutboundError> {
            {
                let mut outages = self.outages.lock();
                if *outages > 0 {
                    *outages -= 1;
                    return Err(OutboundError::Unavailable("event bus down".into()));
                }
            }
            self.inner.publish(events).await
        }
    }

    #[tokio::test]
    async fn test_failed_publish_keeps_events_for_next_save() {
        let publisher = Arc::new(FlakyPublisher {
            outages: parking_lot::Mutex::new(1),
            inner: InMemoryEventPublisher::new(),
        });
        let service = CampaignEditorService::new(
            Campaign::default_for(Profile::Premium),
            Arc::new(InMemorySubmissionHandler::new()),
            Arc::new(InMemoryPinHandler::new()),
            publisher.clone(),
        );
        service.apply(EditCommand::SetLabel { label: "Printemps".into() }).await.unwrap();

        let err = service.save().await.unwrap_err();
        assert!(matches!(err, UseCaseError::Outbound(OutboundError::Unavailable(_))));
        assert!(publisher.inner.published().is_empty());

        service.save().await.unwrap();

        let names: Vec<_> = publisher.inner.published().iter().map(|e| e.name()).collect();
        assert_eq!(names.first(), Some(&"campaign.created"));
        assert!(names.contains(&"campaign.relabeled"));
        assert_eq!(names.iter().filter(|n| **n == "campaign.submitted").count(), 2);
    }

    impl Harness {
        fn service_with_editor(self, editor: &str) -> Self {
            Self { service: self.service.with_editor(editor), ..self }
        }
    }
}
