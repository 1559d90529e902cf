use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Filter;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Movement
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.list.filtered_tasks().len().saturating_sub(1);
        }

        // Task actions
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.cursor_task_id() {
                app.list.toggle_complete(id);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.cursor_task_id() {
                app.list.delete_task(id);
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.cursor_task_id()
                && app.list.start_editing(id)
            {
                app.edit_cursor = app.list.editing().map_or(0, |e| e.buffer.len());
                app.mode = Mode::Edit;
            }
        }
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.input_cursor = app.list.input().len();
            app.mode = Mode::Input;
        }
        KeyCode::Char('C') => {
            let removed = app.list.clear_completed();
            if removed > 0 {
                app.status_message = Some(format!("cleared {} completed", removed));
            }
        }

        // Filters
        KeyCode::Char('1') => set_filter(app, Filter::All),
        KeyCode::Char('2') => set_filter(app, Filter::Incomplete),
        KeyCode::Char('3') => set_filter(app, Filter::Completed),
        KeyCode::Char('f') => set_filter(app, app.list.filter().next()),

        // Display
        KeyCode::Char('t') => app.toggle_dark_mode(),
        KeyCode::Char('?') => app.show_key_hints = !app.show_key_hints,
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: i32) {
    let len = app.list.filtered_tasks().len();
    if len == 0 {
        app.cursor = 0;
        return;
    }
    app.cursor = if delta < 0 {
        app.cursor.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        (app.cursor + delta as usize).min(len - 1)
    };
}

/// Change filter, keeping the cursor on the same task when it stays visible
fn set_filter(app: &mut App, filter: Filter) {
    let prev = app.cursor_task_id();
    app.list.set_filter(filter);
    app.cursor = 0;
    if let Some(id) = prev {
        app.focus_task(id);
    }
}
