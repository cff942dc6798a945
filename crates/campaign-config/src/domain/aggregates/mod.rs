//! Aggregates module
//!
//! The campaign aggregate root and the action list it owns.

pub mod action_list;
pub mod campaign;

pub use action_list::{ActionList, MAX_ACTIONS};
pub use campaign::{Campaign, CampaignConfiguration, Reconciliation};
