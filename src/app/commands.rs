//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::forms::ValidationError;
use crate::messages::ui_events::{ActionKind, InputMode};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{Action, Exchange, Outcome, Request};
use crate::output::{self, OutputBlock, Tone};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
        self.cursor_position = self.current_input().len();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
        self.cursor_position = self.current_input().len();
    }

    pub fn scroll_up(&mut self) {
        self.output_scroll = self.output_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.output_scroll = self.output_scroll.saturating_add(1);
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.current_input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.current_input_mut();
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Actions
    // ========================

    /// Validate the relevant form and build the command for one action.
    ///
    /// Returns `None` when the form was rejected; the rejection is already
    /// rendered.
    pub fn trigger(&mut self, kind: ActionKind) -> Option<NetworkCommand> {
        let prepared = match kind {
            ActionKind::FetchPost => Ok((Action::FetchPost, self.api.fetch_post())),
            ActionKind::FetchPostLegacy => {
                Ok((Action::FetchPostLegacy, self.api.fetch_post_legacy()))
            }
            ActionKind::CreatePost => {
                let draft = match self.create.validate() {
                    Ok(draft) => draft,
                    Err(e) => return self.reject(kind, e),
                };
                self.api
                    .create_post(&draft)
                    .map(|request| (Action::CreatePost, request))
            }
            ActionKind::UpdatePost => {
                let (id, draft) = match self.update.validate() {
                    Ok(valid) => valid,
                    Err(e) => return self.reject(kind, e),
                };
                self.api
                    .update_post(&id, &draft)
                    .map(|request| (Action::UpdatePost, request))
            }
            ActionKind::DeletePost => {
                let id = match self.delete.validate() {
                    Ok(id) => id,
                    Err(e) => return self.reject(kind, e),
                };
                let request = self.api.delete_post(&id);
                Ok((Action::DeletePost { id }, request))
            }
        };

        match prepared {
            Ok((action, request)) => Some(self.dispatch(action, request)),
            Err(e) => {
                self.output.replace(vec![OutputBlock::Notice {
                    tone: Tone::Error,
                    text: format!("Error: {}", e),
                }]);
                None
            }
        }
    }

    fn reject(&mut self, kind: ActionKind, error: ValidationError) -> Option<NetworkCommand> {
        tracing::debug!(action = kind.label(), %error, "Form rejected");
        output::render_validation_error(&mut self.output, &error);
        self.output_scroll = 0;
        None
    }

    fn dispatch(&mut self, action: Action, request: Request) -> NetworkCommand {
        let id = self.next_id();
        self.in_flight += 1;
        NetworkCommand::Execute {
            id,
            action,
            request,
        }
    }

    /// Render a resolved exchange over whatever is showing
    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::Completed {
                action,
                request,
                outcome,
                time_ms,
                ..
            } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.last_exchange = Some(Exchange {
                    method: request.method(),
                    url: request.url().to_string(),
                    status_code: match &outcome {
                        Outcome::Success { status_code, .. } => Some(*status_code),
                        Outcome::Failure { .. } => None,
                    },
                    time_ms,
                });
                output::render_outcome(&mut self.output, &action, &outcome);
                self.output_scroll = 0;
            }
        }
    }
}
