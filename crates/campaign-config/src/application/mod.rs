//! Application layer
//!
//! Orchestrates campaign edits and coordinates the outbound ports.

pub mod commands;
pub mod dto;

pub use commands::CampaignEditorService;
pub use dto::*;
