//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::series::ViewMode;

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
        KeyCode::Char(' ') => app.toggle_pause(),
        KeyCode::Char('w') => app.set_mode(ViewMode::Week),
        KeyCode::Char('m') => app.set_mode(ViewMode::Month),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.toggle_device(index);
        }
        KeyCode::Char('r') => app.restart(),
        _ => {}
    }
}
