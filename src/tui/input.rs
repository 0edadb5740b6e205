//! Keyboard to remote-control input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::picker::{Direction, PickerInput};

/// Translate a key event into the picker inputs it stands for.
///
/// Terminals rarely report key releases, so a select press is expanded
/// into the full begin, end, confirm sequence.
pub fn map_key(key: KeyEvent) -> Vec<PickerInput> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => vec![PickerInput::Move(Direction::Left)],
        KeyCode::Right | KeyCode::Char('l') => vec![PickerInput::Move(Direction::Right)],
        KeyCode::Up | KeyCode::Char('k') => vec![PickerInput::Move(Direction::Up)],
        KeyCode::Down | KeyCode::Char('j') => vec![PickerInput::Move(Direction::Down)],
        KeyCode::Enter | KeyCode::Char(' ') => vec![
            PickerInput::SelectBegin,
            PickerInput::SelectEnd,
            PickerInput::Confirm,
        ],
        KeyCode::Esc | KeyCode::Backspace => vec![PickerInput::Back],
        _ => vec![],
    }
}
