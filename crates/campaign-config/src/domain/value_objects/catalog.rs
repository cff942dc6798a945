//! Catalog of games, gift categories and operator profiles
//!
//! Codes match the wire names used by the campaign form (`SLOT_MACHINE`,
//! `EAT`, `PREMIUM`, ...). Labels are the French display labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unknown catalog code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} code: {code}")]
pub struct ParseCodeError {
    pub kind: &'static str,
    pub code: String,
}

impl ParseCodeError {
    pub(crate) fn new(kind: &'static str, code: &str) -> Self {
        Self { kind, code: code.to_string() }
    }
}

/// Normalizes `slot-machine`, `Slot_Machine`, ... to `SLOT_MACHINE`.
pub(crate) fn normalize_code(raw: &str) -> String {
    raw.trim().replace('-', "_").to_ascii_uppercase()
}

// =============================================================================
// Games
// =============================================================================

/// Game played by customers once their actions are done
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameType {
    #[default]
    Wheel,
    SlotMachine,
    Mystery,
    Card,
}

impl GameType {
    /// Display order of the game picker
    pub const ALL: [GameType; 4] = [Self::Wheel, Self::Mystery, Self::SlotMachine, Self::Card];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Wheel => "WHEEL",
            Self::SlotMachine => "SLOT_MACHINE",
            Self::Mystery => "MYSTERY",
            Self::Card => "CARD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Wheel => "ROUE DE LA FORTUNE",
            Self::SlotMachine => "MACHINE À SOUS",
            Self::Mystery => "LES BOÎTES MYSTÈRES",
            Self::Card => "JEU DE CARTES",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Wheel => "🎡",
            Self::SlotMachine => "🎰",
            Self::Mystery => "📦",
            Self::Card => "🃏",
        }
    }

    pub fn accent_color(&self) -> &'static str {
        match self {
            Self::Wheel => "#4285F4",
            Self::SlotMachine => "#9C27B0",
            Self::Mystery => "#FF9800",
            Self::Card => "#2196F3",
        }
    }

    /// Only the wheel is available on the basic profile
    pub fn is_premium(&self) -> bool {
        !matches!(self, Self::Wheel)
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GameType {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "WHEEL" => Ok(Self::Wheel),
            "SLOT_MACHINE" => Ok(Self::SlotMachine),
            "MYSTERY" => Ok(Self::Mystery),
            "CARD" => Ok(Self::Card),
            _ => Err(ParseCodeError::new("game", s)),
        }
    }
}

// =============================================================================
// Gift categories
// =============================================================================

/// Prize category
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GiftType {
    #[default]
    Eat,
    Drink,
    Discount,
    /// The synthetic "no prize" slot
    Loss,
}

impl GiftType {
    pub const ALL: [GiftType; 4] = [Self::Eat, Self::Drink, Self::Discount, Self::Loss];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Eat => "EAT",
            Self::Drink => "DRINK",
            Self::Discount => "DISCOUNT",
            Self::Loss => "LOSS",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Eat => "Nourriture",
            Self::Drink => "Boisson",
            Self::Discount => "Réduction",
            Self::Loss => "Perte",
        }
    }

    pub fn is_loss(&self) -> bool {
        matches!(self, Self::Loss)
    }
}

impl fmt::Display for GiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GiftType {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "EAT" => Ok(Self::Eat),
            "DRINK" => Ok(Self::Drink),
            "DISCOUNT" => Ok(Self::Discount),
            "LOSS" => Ok(Self::Loss),
            _ => Err(ParseCodeError::new("gift type", s)),
        }
    }
}

// =============================================================================
// Profiles
// =============================================================================

/// Operator subscription tier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profile {
    #[default]
    Premium,
    Basic,
}

impl Profile {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Premium => "PREMIUM",
            Self::Basic => "BASIC",
        }
    }

    pub fn allows_game(&self, game: GameType) -> bool {
        matches!(self, Self::Premium) || !game.is_premium()
    }

    /// Logo colors and premium games
    pub fn can_customize(&self) -> bool {
        matches!(self, Self::Premium)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Profile {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "PREMIUM" => Ok(Self::Premium),
            "BASIC" => Ok(Self::Basic),
            _ => Err(ParseCodeError::new("profile", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        assert_eq!(serde_json::to_string(&GameType::SlotMachine).unwrap(), "\"SLOT_MACHINE\"");
        assert_eq!(serde_json::to_string(&GiftType::Loss).unwrap(), "\"LOSS\"");
        assert_eq!(serde_json::to_string(&Profile::Basic).unwrap(), "\"BASIC\"");
    }

    #[test]
    fn test_parse_is_lenient_on_case_and_dashes() {
        assert_eq!("slot-machine".parse::<GameType>().unwrap(), GameType::SlotMachine);
        assert_eq!(" drink ".parse::<GiftType>().unwrap(), GiftType::Drink);
        assert!("bingo".parse::<GameType>().is_err());
    }

    #[test]
    fn test_basic_profile_only_gets_the_wheel() {
        assert!(Profile::Basic.allows_game(GameType::Wheel));
        for game in [GameType::Mystery, GameType::SlotMachine, GameType::Card] {
            assert!(!Profile::Basic.allows_game(game));
            assert!(Profile::Premium.allows_game(game));
        }
    }
}
