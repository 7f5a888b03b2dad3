//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::api::PostsApi;
use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        api: PostsApi,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(api),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Field navigation
            UiEvent::NextField => self.state.next_field(),
            UiEvent::PrevField => self.state.prev_field(),
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),

            // Input editing
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),

            // Buttons
            UiEvent::Trigger(kind) => {
                if let Some(cmd) = self.state.trigger(kind) {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ui_events::{key_to_ui_event, InputMode};
    use crate::messages::ActionKind;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[tokio::test]
    async fn test_rejected_form_sends_no_command() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (_net_resp_tx, net_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, mut net_cmd_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let actor = AppActor::new(
            PostsApi::new("http://localhost:3000/posts"),
            net_cmd_tx,
            render_tx,
        );
        let handle = tokio::spawn(actor.run(ui_rx, net_rx));

        ui_tx.send(UiEvent::Trigger(ActionKind::DeletePost)).unwrap();
        ui_tx.send(UiEvent::Trigger(ActionKind::FetchPost)).unwrap();
        ui_tx.send(UiEvent::Quit).unwrap();
        handle.await.unwrap();

        // Only the fetch reached the network, then shutdown
        assert!(matches!(
            net_cmd_rx.recv().await,
            Some(NetworkCommand::Execute { id: 1, .. })
        ));
        assert!(matches!(net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown)));

        let _initial = render_rx.recv().await.unwrap();
        let after_delete = render_rx.recv().await.unwrap();
        assert_eq!(after_delete.output.plain_text(), "Error: Post ID is required!");
        let after_fetch = render_rx.recv().await.unwrap();
        assert_eq!(after_fetch.in_flight, 1);
    }

    #[tokio::test]
    async fn test_digits_while_editing_are_typed_not_run() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (_net_resp_tx, net_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, mut net_cmd_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let actor = AppActor::new(
            PostsApi::new("http://localhost:3000/posts"),
            net_cmd_tx,
            render_tx,
        );
        let handle = tokio::spawn(actor.run(ui_rx, net_rx));

        let key = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        let typed = key_to_ui_event(key, InputMode::Editing, false).unwrap();
        ui_tx.send(UiEvent::StartEditing).unwrap();
        ui_tx.send(typed).unwrap();
        ui_tx.send(UiEvent::Quit).unwrap();
        handle.await.unwrap();

        assert!(matches!(net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown)));

        let mut last = render_rx.recv().await.unwrap();
        while let Ok(state) = render_rx.try_recv() {
            last = state;
        }
        assert_eq!(last.input_mode, InputMode::Editing);
        assert_eq!(last.create.title, "1");
        assert_eq!(last.in_flight, 0);
    }
}
