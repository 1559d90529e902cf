use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::*;

/// New-task line: Enter adds, Esc leaves
pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if let Some(id) = app.list.submit_input() {
                app.input_cursor = 0;
                app.focus_task(id);
            }
        }
        KeyCode::Esc => app.mode = Mode::Navigate,
        _ => {
            edit_line(app.list.input_mut(), &mut app.input_cursor, key);
        }
    }
}

/// Rename in progress: Enter or Esc commits (blur)
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.list.commit_edit();
            app.mode = Mode::Navigate;
        }
        _ => match app.list.edit_buffer_mut() {
            Some(buffer) => {
                edit_line(buffer, &mut app.edit_cursor, key);
            }
            // Edit target vanished
            None => app.mode = Mode::Navigate,
        },
    }
}
