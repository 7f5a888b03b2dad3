//! Render state - data structure sent from App layer to UI for rendering

use crate::forms::{CreateForm, DeleteForm, UpdateForm};
use crate::messages::ui_events::{Field, InputMode};
use crate::models::Exchange;
use crate::output::OutputPanel;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
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
    pub in_flight: usize,
    pub last_exchange: Option<Exchange>,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            create: CreateForm::default(),
            update: UpdateForm::default(),
            delete: DeleteForm::default(),
            active_field: Field::PostTitle,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            output: OutputPanel::default(),
            output_scroll: 0,
            in_flight: 0,
            last_exchange: None,
            show_help: false,
        }
    }
}

impl RenderState {
    /// Current text of a form field
    pub fn field_value(&self, field: Field) -> &str {
        match field {
            Field::PostTitle => &self.create.title,
            Field::PostBody => &self.create.body,
            Field::PutId => &self.update.id,
            Field::PutTitle => &self.update.title,
            Field::PutBody => &self.update.body,
            Field::DeleteId => &self.delete.id,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}
