//! Domain module
//!
//! Contains all campaign rules following DDD principles.

pub mod aggregates;
pub mod entities;
pub mod value_objects;
pub mod events;
pub mod services;

pub use aggregates::*;
pub use entities::*;
pub use value_objects::*;
pub use events::*;
