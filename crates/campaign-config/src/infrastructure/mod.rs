//! Infrastructure layer
//!
//! Adapters for the outbound ports.

pub mod logging;
pub mod memory;

pub use logging::{TracingEventPublisher, TracingPinHandler, TracingSubmissionHandler};
pub use memory::{InMemoryEventPublisher, InMemoryPinHandler, InMemorySubmissionHandler};
