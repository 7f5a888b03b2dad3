//! App layer - central state management and command processing
//!
//! The App actor receives UI events and exchange outcomes, updates the
//! forms and the output panel, and emits network commands and render state.

pub mod actor;
pub mod commands;
pub mod state;

pub use actor::AppActor;
pub use state::AppState;
