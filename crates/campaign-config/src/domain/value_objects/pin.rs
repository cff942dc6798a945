//! Staff PIN Value Object
//!
//! Four-digit code staff enter at checkout to release a gift. Only the format
//! is checked here; storing the PIN belongs to the PIN subsystem.

use std::fmt;

/// Validated 4-digit PIN
#[derive(Clone, PartialEq, Eq)]
pub struct PinCode(String);

impl PinCode {
    pub const LENGTH: usize = 4;

    /// Validate a PIN against its confirmation
    pub fn new(pin: &str, confirmation: &str) -> Result<Self, PinError> {
        if pin.chars().count() != Self::LENGTH {
            return Err(PinError::WrongLength);
        }
        if !pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(PinError::NotNumeric);
        }
        if pin != confirmation {
            return Err(PinError::Mismatch);
        }
        Ok(Self(pin.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PinCode(****)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PinError {
    #[error("PIN must be exactly 4 digits long")]
    WrongLength,

    #[error("PIN must only contain digits")]
    NotNumeric,

    #[error("PIN and confirmation differ")]
    Mismatch,
}

impl PinError {
    pub fn advisory(&self) -> &'static str {
        match self {
            Self::WrongLength => "Le code PIN doit contenir 4 chiffres",
            Self::NotNumeric => "Le code PIN ne doit contenir que des chiffres",
            Self::Mismatch => "Les codes PIN ne correspondent pas",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pin() {
        let pin = PinCode::new("0427", "0427").unwrap();
        assert_eq!(pin.as_str(), "0427");
    }

    #[test]
    fn test_length() {
        assert_eq!(PinCode::new("123", "123"), Err(PinError::WrongLength));
        assert_eq!(PinCode::new("12345", "12345"), Err(PinError::WrongLength));
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(PinCode::new("12a4", "12a4"), Err(PinError::NotNumeric));
        assert_eq!(PinCode::new("１２３４", "１２３４"), Err(PinError::NotNumeric));
    }

    #[test]
    fn test_confirmation_must_match() {
        assert_eq!(PinCode::new("1234", "1243"), Err(PinError::Mismatch));
    }

    #[test]
    fn test_debug_masks_digits() {
        let pin = PinCode::new("9876", "9876").unwrap();
        assert!(!format!("{:?}", pin).contains("9876"));
    }
}
