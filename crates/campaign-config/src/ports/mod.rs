//! Ports layer
//!
//! Inbound use cases and the outbound collaborators infrastructure implements.

pub mod inbound;
pub mod outbound;
