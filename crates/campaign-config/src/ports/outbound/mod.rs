//! Outbound ports
//!
//! Hexagonal architecture: these are the interfaces that infrastructure must implement.

use async_trait::async_trait;

use crate::application::dto::CampaignSnapshot;
use crate::domain::value_objects::PinCode;
use crate::domain::DomainEvent;

/// Receives the campaign on save
#[async_trait]
pub trait SubmissionHandler: Send + Sync {
    async fn submit(&self, snapshot: CampaignSnapshot) -> Result<(), OutboundError>;
}

/// PIN subsystem callback
#[async_trait]
pub trait PinConfiguredHandler: Send + Sync {
    async fn on_pin_configured(&self, pin: &PinCode) -> Result<(), OutboundError>;
}

/// Event publisher port
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish domain events
    async fn publish(&self, events: Vec<DomainEvent>) -> Result<(), OutboundError>;
}

#[derive(Debug, Clone)]
pub enum OutboundError {
    Rejected(String),
    Unavailable(String),
}

impl std::error::Error for OutboundError {}

impl std::fmt::Display for OutboundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(e) => write!(f, "Rejected: {}", e),
            Self::Unavailable(e) => write!(f, "Unavailable: {}", e),
        }
    }
}
