//! Tracing-backed adapters
//!
//! There is no campaign backend yet: a save is logged, as are PIN setups and
//! domain events.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::application::dto::CampaignSnapshot;
use crate::domain::value_objects::PinCode;
use crate::domain::DomainEvent;
use crate::ports::outbound::{EventPublisher, OutboundError, PinConfiguredHandler, SubmissionHandler};

/// Logs the submitted campaign as JSON
#[derive(Debug, Default)]
pub struct TracingSubmissionHandler;

#[async_trait]
impl SubmissionHandler for TracingSubmissionHandler {
    async fn submit(&self, snapshot: CampaignSnapshot) -> Result<(), OutboundError> {
        let payload = serde_json::to_string(&snapshot)
            .map_err(|e| OutboundError::Rejected(e.to_string()))?;
        info!(campaign_id = %snapshot.id, %payload, "Saving campaign");
        Ok(())
    }
}

/// Logs that a PIN was configured, never the PIN itself
#[derive(Debug, Default)]
pub struct TracingPinHandler;

#[async_trait]
impl PinConfiguredHandler for TracingPinHandler {
    async fn on_pin_configured(&self, pin: &PinCode) -> Result<(), OutboundError> {
        info!(length = pin.as_str().len(), "PIN configured");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct TracingEventPublisher;

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, events: Vec<DomainEvent>) -> Result<(), OutboundError> {
        for event in &events {
            debug!(event = event.name(), ?event, "Domain event");
        }
        Ok(())
    }
}
