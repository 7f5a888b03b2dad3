//! App state - pure data structure with no I/O logic

use crate::api::PostsApi;
use crate::forms::{CreateForm, DeleteForm, UpdateForm};
use crate::messages::ui_events::{Field, InputMode};
use crate::messages::RenderState;
use crate::models::Exchange;
use crate::output::OutputPanel;

/// Main application state - pure data, no I/O
pub struct AppState {
    pub api: PostsApi,

    // Form fields
    pub create: CreateForm,
    pub update: UpdateForm,
    pub delete: DeleteForm,

    // UI state
    pub active_field: Field,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Output
    pub output: OutputPanel,
    pub output_scroll: u16,

    // Exchanges
    pub next_request_id: u64,
    pub in_flight: usize,
    pub last_exchange: Option<Exchange>,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PostsApi::default())
    }
}

impl AppState {
    pub fn new(api: PostsApi) -> Self {
        AppState {
            api,
            create: CreateForm::default(),
            update: UpdateForm::default(),
            delete: DeleteForm::default(),
            active_field: Field::PostTitle,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            output: OutputPanel::new(),
            output_scroll: 0,
            next_request_id: 1,
            in_flight: 0,
            last_exchange: None,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get the focused field content
    pub fn current_input(&self) -> &str {
        match self.active_field {
            Field::PostTitle => &self.create.title,
            Field::PostBody => &self.create.body,
            Field::PutId => &self.update.id,
            Field::PutTitle => &self.update.title,
            Field::PutBody => &self.update.body,
            Field::DeleteId => &self.delete.id,
        }
    }

    /// Get mutable reference to the focused field
    pub fn current_input_mut(&mut self) -> &mut String {
        match self.active_field {
            Field::PostTitle => &mut self.create.title,
            Field::PostBody => &mut self.create.body,
            Field::PutId => &mut self.update.id,
            Field::PutTitle => &mut self.update.title,
            Field::PutBody => &mut self.update.body,
            Field::DeleteId => &mut self.delete.id,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            create: self.create.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
            active_field: self.active_field,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            output: self.output.clone(),
            output_scroll: self.output_scroll,
            in_flight: self.in_flight,
            last_exchange: self.last_exchange.clone(),
            show_help: self.show_help,
        }
    }
}
