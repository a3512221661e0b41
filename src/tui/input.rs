//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Grid operation requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
    /// Sort by the named field.
    SortBy(&'static str),
    /// Switch to the next registered sort field.
    CycleSort,
    /// Flip the sort direction.
    ToggleReverse,
}

/// Maps a key press to an action. Holds no state of its own.
pub fn handle_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,

        // Row navigation
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Home | KeyCode::Char('g') => Action::Top,
        KeyCode::End | KeyCode::Char('G') => Action::Bottom,

        // Sorting
        KeyCode::Char('c') => Action::SortBy("cpu"),
        KeyCode::Char('m') => Action::SortBy("mem"),
        KeyCode::Char('x') => Action::SortBy("net"),
        KeyCode::Char('n') => Action::SortBy("name"),
        KeyCode::Char('i') => Action::SortBy("id"),
        KeyCode::Char('s') | KeyCode::Tab => Action::CycleSort,
        KeyCode::Char('r') => Action::ToggleReverse,

        _ => Action::None,
    }
}
