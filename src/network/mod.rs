//! Network layer - HTTP exchange execution
//!
//! The Network actor receives exchange commands and sends back outcomes.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::{create_client, execute};
