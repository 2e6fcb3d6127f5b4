//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::table::types::Direction;

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.move_focused(Direction::Up);
        }
        KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.move_focused(Direction::Down);
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(Direction::Down),
        KeyCode::Char('K') => app.move_focused(Direction::Up),
        KeyCode::Char('J') => app.move_focused(Direction::Down),
        KeyCode::Char(' ') => app.toggle_cursor_column(),
        KeyCode::Char('s') => app.cycle_sort_field(),
        KeyCode::Char('o') => app.toggle_sort_order(),
        KeyCode::Char('p') => app.toggle_partition(),
        KeyCode::Char('+' | '=') => app.adjust_page_size(1),
        KeyCode::Char('-') => app.adjust_page_size(-1),
        KeyCode::Char('1') => app.switch_preset("routes"),
        KeyCode::Char('2') => app.switch_preset("routes_by_status"),
        KeyCode::Char('3') => app.switch_preset("directory"),
        KeyCode::Char('r') => app.restart(),
        _ => {}
    }
}
