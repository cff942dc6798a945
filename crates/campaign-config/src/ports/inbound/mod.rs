//! Inbound ports (Use case traits)
//!
//! Hexagonal architecture: application service interfaces.

use async_trait::async_trait;

use crate::application::dto::*;
use crate::error::CampaignError;
use crate::ports::outbound::OutboundError;

/// Campaign editor use cases
#[async_trait]
pub trait CampaignEditorUseCases: Send + Sync {
    /// Apply one edit, returns the reconciled campaign
    async fn apply(&self, command: EditCommand) -> Result<CampaignSnapshot, UseCaseError>;

    /// Validate a staff PIN and hand it to the PIN subsystem
    async fn configure_pin(&self, command: ConfigurePinCommand) -> Result<(), UseCaseError>;

    /// Submit the current campaign
    async fn save(&self) -> Result<CampaignSnapshot, UseCaseError>;

    /// Current campaign
    async fn get_snapshot(&self) -> Result<CampaignSnapshot, UseCaseError>;

    /// Banners to show next to the form
    async fn advisories(&self) -> Result<Vec<Advisory>, UseCaseError>;
}

#[derive(Debug, Clone)]
pub enum UseCaseError {
    PolicyRejected(CampaignError),
    ValidationError(String),
    Outbound(OutboundError),
}

impl UseCaseError {
    /// Operator-facing message, `None` for silent rejections
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            Self::PolicyRejected(e) => e.advisory(),
            Self::ValidationError(_) | Self::Outbound(_) => Some("Une erreur est survenue"),
        }
    }
}

impl From<CampaignError> for UseCaseError {
    fn from(e: CampaignError) -> Self {
        Self::PolicyRejected(e)
    }
}

impl From<OutboundError> for UseCaseError {
    fn from(e: OutboundError) -> Self {
        Self::Outbound(e)
    }
}

impl std::error::Error for UseCaseError {}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PolicyRejected(e) => write!(f, "Rejected: {}", e),
            Self::ValidationError(e) => write!(f, "Validation error: {}", e),
            Self::Outbound(e) => write!(f, "Outbound error: {}", e),
        }
    }
}
