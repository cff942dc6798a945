//! Policy rejections raised by campaign edits
//!
//! None of these are fatal: a rejected edit leaves the campaign untouched and
//! the caller shows [`CampaignError::advisory`] to the operator.

use thiserror::Error;

use crate::domain::value_objects::{ActionType, ColorError, PinError};

/// Campaign error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CampaignError {
    /// The loss slot is system-managed
    #[error("the loss slot is managed automatically")]
    LossGiftLocked,

    /// LOSS cannot be picked as a category for a regular gift
    #[error("gift type LOSS is reserved for the loss slot")]
    ReservedGiftType,

    /// 100%-winning games need at least one unlimited gift
    #[error("at least one gift must stay unlimited in 100% winning mode")]
    UnlimitedGiftRequired,

    /// No gift at this position
    #[error("gift not found at index {0}")]
    GiftNotFound(usize),

    /// No action at this position
    #[error("action not found at index {0}")]
    ActionNotFound(usize),

    /// The action list is full
    #[error("at most {max} actions can be configured")]
    ActionLimitReached { max: usize },

    /// Target does not match the platform URL pattern
    #[error("invalid {action_type} target: {message}")]
    InvalidTarget {
        action_type: ActionType,
        message: &'static str,
    },

    /// Feature gated behind the premium profile
    #[error("{0} requires the premium profile")]
    PremiumRequired(&'static str),

    /// Color is not `#RRGGBB`
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorError),

    /// PIN format or confirmation mismatch
    #[error("invalid PIN: {0}")]
    InvalidPin(#[from] PinError),
}

impl CampaignError {
    /// Operator-facing message, `None` when the rejection is silent.
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            Self::LossGiftLocked => None,
            Self::ReservedGiftType => Some("La perte est ajoutée automatiquement"),
            Self::UnlimitedGiftRequired => {
                Some("Au moins un gain doit être illimité en mode 100% gagnant")
            }
            Self::GiftNotFound(_) => Some("Gain introuvable"),
            Self::ActionNotFound(_) => Some("Action introuvable"),
            Self::ActionLimitReached { .. } => Some("Maximum 3 actions"),
            Self::InvalidTarget { message, .. } => Some(*message),
            Self::PremiumRequired(_) => Some("Fonctionnalité réservée au profil Premium"),
            Self::InvalidColor(_) => Some("Format hexadécimal requis (#RRGGBB)"),
            Self::InvalidPin(e) => Some(e.advisory()),
        }
    }
}

/// Result type for campaign edits
pub type Result<T> = std::result::Result<T, CampaignError>;
