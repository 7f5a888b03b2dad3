//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which of the five actions to run
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActionKind {
    FetchPost,
    FetchPostLegacy,
    CreatePost,
    UpdatePost,
    DeletePost,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::FetchPost,
        ActionKind::FetchPostLegacy,
        ActionKind::CreatePost,
        ActionKind::UpdatePost,
        ActionKind::DeletePost,
    ];

    /// Number key that triggers the action
    pub fn key(&self) -> char {
        match self {
            ActionKind::FetchPost => '1',
            ActionKind::FetchPostLegacy => '2',
            ActionKind::CreatePost => '3',
            ActionKind::UpdatePost => '4',
            ActionKind::DeletePost => '5',
        }
    }

    pub fn from_key(c: char) -> Option<ActionKind> {
        ActionKind::ALL.into_iter().find(|kind| kind.key() == c)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::FetchPost => "Fetch Post 1",
            ActionKind::FetchPostLegacy => "Fetch Post 2 (legacy)",
            ActionKind::CreatePost => "Create Post",
            ActionKind::UpdatePost => "Update Post",
            ActionKind::DeletePost => "Delete Post",
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Field navigation
    NextField,
    PrevField,
    ScrollUp,
    ScrollDown,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Buttons
    Trigger(ActionKind),

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Form field with keyboard focus
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    PostTitle,
    PostBody,
    PutId,
    PutTitle,
    PutBody,
    DeleteId,
}

impl Field {
    pub fn next(&self) -> Field {
        match self {
            Field::PostTitle => Field::PostBody,
            Field::PostBody => Field::PutId,
            Field::PutId => Field::PutTitle,
            Field::PutTitle => Field::PutBody,
            Field::PutBody => Field::DeleteId,
            Field::DeleteId => Field::PostTitle,
        }
    }

    pub fn prev(&self) -> Field {
        match self {
            Field::PostTitle => Field::DeleteId,
            Field::PostBody => Field::PostTitle,
            Field::PutId => Field::PostBody,
            Field::PutTitle => Field::PutId,
            Field::PutBody => Field::PutTitle,
            Field::DeleteId => Field::PutBody,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::PostTitle => "Title",
            Field::PostBody => "Body",
            Field::PutId => "ID",
            Field::PutTitle => "Title",
            Field::PutBody => "Body",
            Field::DeleteId => "ID",
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, input_mode: InputMode, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char(c @ '1'..='5') => ActionKind::from_key(c).map(UiEvent::Trigger),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::BackTab => Some(UiEvent::PrevField),
            KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
            KeyCode::Up => Some(UiEvent::ScrollUp),
            KeyCode::Down => Some(UiEvent::ScrollDown),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::BackTab => Some(UiEvent::PrevField),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_keys_trigger_actions() {
        let event = key_to_ui_event(press(KeyCode::Char('3')), InputMode::Normal, false);
        assert!(matches!(event, Some(UiEvent::Trigger(ActionKind::CreatePost))));

        let event = key_to_ui_event(press(KeyCode::Char('6')), InputMode::Normal, false);
        assert!(event.is_none());
    }

    #[test]
    fn test_digits_are_text_while_editing() {
        let event = key_to_ui_event(press(KeyCode::Char('5')), InputMode::Editing, false);
        assert!(matches!(event, Some(UiEvent::CharInput('5'))));
    }

    #[test]
    fn test_help_swallows_keys() {
        let event = key_to_ui_event(press(KeyCode::Char('1')), InputMode::Normal, true);
        assert!(matches!(event, Some(UiEvent::CloseHelp)));
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(
            key_to_ui_event(key, InputMode::Editing, false),
            Some(UiEvent::Quit)
        ));
    }

    #[test]
    fn test_field_cycle_wraps() {
        let mut field = Field::PostTitle;
        for _ in 0..6 {
            field = field.next();
        }
        assert_eq!(field, Field::PostTitle);
        assert_eq!(Field::PostTitle.prev(), Field::DeleteId);
    }
}
