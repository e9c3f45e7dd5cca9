//! Input handling for the TUI application.
//!
//! Keys mean different things while a prompt is open, so mapping depends on
//! the current [`InputMode`].

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// What the keyboard is currently driving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Grid navigation and commands.
    #[default]
    Normal,
    /// Typing into the focused column's filter.
    EditingFilter,
    /// Typing a path to open.
    EnteringPath,
}

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
/// `Ctrl+C` quits from every mode.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg, mode: InputMode) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.key == KeyCode::Char('c') {
        return Some(AppMsg::Quit);
    }

    match mode {
        InputMode::Normal => map_normal_key(key),
        InputMode::EditingFilter => map_prompt_key(
            key.key,
            AppMsg::FilterInput,
            AppMsg::FilterBackspace,
            AppMsg::CommitFilter,
            AppMsg::CancelFilterEdit,
        ),
        InputMode::EnteringPath => map_prompt_key(
            key.key,
            AppMsg::PathInput,
            AppMsg::PathBackspace,
            AppMsg::SubmitPath,
            AppMsg::CancelPathEntry,
        ),
    }
}

fn map_normal_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::CursorLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::CursorRight),
        KeyCode::Char('n') | KeyCode::PageDown => Some(AppMsg::NextPage),
        KeyCode::Char('p') | KeyCode::PageUp => Some(AppMsg::PreviousPage),
        KeyCode::Char('g') | KeyCode::Home => Some(AppMsg::FirstPage),
        KeyCode::Char('G') | KeyCode::End => Some(AppMsg::LastPage),
        KeyCode::Char('+' | '=') => Some(AppMsg::GrowPageSize),
        KeyCode::Char('-') => Some(AppMsg::ShrinkPageSize),
        KeyCode::Char('S') => Some(AppMsg::AppendSort),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(AppMsg::AppendSort)
        }
        KeyCode::Char('s') => Some(AppMsg::ToggleSort),
        KeyCode::Enter => Some(AppMsg::ActivateCell),
        KeyCode::Char('/') => Some(AppMsg::StartFilterEdit),
        KeyCode::Char('x') => Some(AppMsg::ClearColumnFilter),
        KeyCode::Esc => Some(AppMsg::ClearAllFilters),
        KeyCode::Char('o') => Some(AppMsg::StartPathEntry),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

fn map_prompt_key(
    key: KeyCode,
    input: fn(char) -> AppMsg,
    backspace: AppMsg,
    submit: AppMsg,
    cancel: AppMsg,
) -> Option<AppMsg> {
    match key {
        KeyCode::Char(character) => Some(input(character)),
        KeyCode::Backspace => Some(backspace),
        KeyCode::Enter => Some(submit),
        KeyCode::Esc => Some(cancel),
        _ => None,
    }
}
