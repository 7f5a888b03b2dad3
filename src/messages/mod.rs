//! Messages passed between the UI, App, and Network actors.
//!
//! Key presses become `UiEvent`s, actions become `NetworkCommand`s, resolved
//! exchanges come back as `NetworkResponse`s and the UI only ever sees a
//! `RenderState` snapshot.

pub mod network;
pub mod render;
pub mod ui_events;

pub use network::{NetworkCommand, NetworkResponse};
pub use render::RenderState;
pub use ui_events::{ActionKind, UiEvent};
