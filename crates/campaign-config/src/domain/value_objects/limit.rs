//! Stock limit of a gift
//!
//! On the wire a limit is an integer where `-1` means unlimited stock.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gift stock limit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum StockLimit {
    Unlimited,
    Finite(u32),
}

impl StockLimit {
    pub const UNLIMITED_CODE: i64 = -1;

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    pub fn as_i64(&self) -> i64 {
        match self {
            Self::Unlimited => Self::UNLIMITED_CODE,
            Self::Finite(n) => i64::from(*n),
        }
    }
}

impl Default for StockLimit {
    fn default() -> Self {
        Self::Finite(1)
    }
}

impl TryFrom<i64> for StockLimit {
    type Error = LimitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            Self::UNLIMITED_CODE => Ok(Self::Unlimited),
            n => u32::try_from(n)
                .map(Self::Finite)
                .map_err(|_| LimitError::OutOfRange(n)),
        }
    }
}

impl From<StockLimit> for i64 {
    fn from(limit: StockLimit) -> Self {
        limit.as_i64()
    }
}

impl fmt::Display for StockLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => write!(f, "Illimité"),
            Self::Finite(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitError {
    #[error("stock limit must be -1 or a natural number, got {0}")]
    OutOfRange(i64),
}
