//! Brand colors of the game

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid")
});

/// `#RRGGBB` color (case preserved)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(value: impl Into<String>) -> Result<Self, ColorError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(ColorError::Empty);
        }
        if !HEX_COLOR.is_match(&value) {
            return Err(ColorError::InvalidFormat(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Primary and secondary game colors
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub primary: HexColor,
    pub secondary: HexColor,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            primary: HexColor("#4285F4".into()),
            secondary: HexColor("#FF9800".into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color cannot be empty")]
    Empty,

    #[error("expected #RRGGBB, got {0:?}")]
    InvalidFormat(String),
}
