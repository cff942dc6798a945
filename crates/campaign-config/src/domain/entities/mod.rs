//! Entities owned by the campaign aggregate

pub mod action;
pub mod condition;
pub mod gift;

pub use action::Action;
pub use condition::Condition;
pub use gift::{Gift, GiftDraft};
