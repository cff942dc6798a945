//! In-memory adapters (for testing and dry runs)

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::application::dto::CampaignSnapshot;
use crate::domain::value_objects::PinCode;
use crate::domain::DomainEvent;
use crate::ports::outbound::{EventPublisher, OutboundError, PinConfiguredHandler, SubmissionHandler};

/// Records every submitted snapshot
#[derive(Default)]
pub struct InMemorySubmissionHandler {
    submitted: RwLock<Vec<CampaignSnapshot>>,
}

impl InMemorySubmissionHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted(&self) -> Vec<CampaignSnapshot> {
        self.submitted.read().clone()
    }

    pub fn last(&self) -> Option<CampaignSnapshot> {
        self.submitted.read().last().cloned()
    }
}

#[async_trait]
impl SubmissionHandler for InMemorySubmissionHandler {
    async fn submit(&self, snapshot: CampaignSnapshot) -> Result<(), OutboundError> {
        self.submitted.write().push(snapshot);
        Ok(())
    }
}

/// Records configured PINs
#[derive(Default)]
pub struct InMemoryPinHandler {
    pins: RwLock<Vec<String>>,
}

impl InMemoryPinHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configured(&self) -> Vec<String> {
        self.pins.read().clone()
    }
}

#[async_trait]
impl PinConfiguredHandler for InMemoryPinHandler {
    async fn on_pin_configured(&self, pin: &PinCode) -> Result<(), OutboundError> {
        self.pins.write().push(pin.as_str().to_string());
        Ok(())
    }
}

/// Collects published events
#[derive(Default)]
pub struct InMemoryEventPublisher {
    events: RwLock<Vec<DomainEvent>>,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<DomainEvent> {
        self.events.read().clone()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, events: Vec<DomainEvent>) -> Result<(), OutboundError> {
        self.events.write().extend(events);
        Ok(())
    }
}
