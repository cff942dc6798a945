//! Domain services module
//!
//! Stateless rules the campaign aggregate runs after every edit.

pub mod condition_sync;
pub mod gift_normalizer;

pub use condition_sync::ConditionSynchronizer;
pub use gift_normalizer::{GiftSetNormalizer, NormalizedGifts};
