//! # Postboard TUI
//!
//! A terminal demo that drives the JSONPlaceholder posts API.
//!
//! ## Features
//! - Five canned actions: fetch, legacy fetch, create, update, delete
//! - Form validation before any request leaves
//! - One shared Data Display panel, last response wins
//! - JSON syntax highlighting
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)
//!
//! The request/response policy lives in [`network::execute`]: it turns one
//! [`Request`] into one [`Outcome`] and never touches the UI.

pub mod api;
pub mod app;
pub mod config;
pub mod constants;
pub mod forms;
pub mod messages;
pub mod models;
pub mod network;
pub mod output;
pub mod ui;

// Re-export commonly used types
pub use api::PostsApi;
pub use app::{AppActor, AppState};
pub use config::Config;
pub use forms::{CreateForm, DeleteForm, UpdateForm, ValidationError};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Action, ExchangeStyle, FailureCategory, HttpMethod, Outcome, Request};
pub use network::NetworkActor;
pub use output::{classify_fetch_error, OutputBlock, OutputPanel, Tone};
