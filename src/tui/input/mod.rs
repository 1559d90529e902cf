mod edit;
mod navigate;
mod text;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

#[allow(unused_imports)]
use edit::*;
#[allow(unused_imports)]
use navigate::*;
#[allow(unused_imports)]
use text::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        // Leaving mid-edit behaves like a blur
        if app.mode == Mode::Edit {
            app.list.commit_edit();
        }
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Input => handle_input(app, key),
        Mode::Edit => handle_edit(app, key),
    }
    app.clamp_cursor();
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::io::prefs::MemoryPrefStore;
    use crate::model::UiConfig;
    use crate::ops::TaskList;

    pub(crate) fn app() -> App {
        App::new(TaskList::new(Box::new(MemoryPrefStore::new())), UiConfig::default())
    }

    pub(crate) fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub(crate) fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    pub(crate) fn texts(app: &App) -> Vec<String> {
        app.list.tasks().iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut a = app();
        a.mode = Mode::Input;
        handle_key(
            &mut a,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(a.should_quit);
    }

    #[test]
    fn ctrl_c_while_editing_commits() {
        let mut a = app();
        let id = a.list.add_task("old").unwrap();
        a.list.start_editing(id);
        a.list.set_edit_text("new");
        a.mode = Mode::Edit;
        handle_key(
            &mut a,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(texts(&a), vec!["new"]);
        assert!(a.should_quit);
    }

    #[test]
    fn any_key_clears_status_message() {
        let mut a = app();
        a.status_message = Some("hello".into());
        press(&mut a, KeyCode::Char('j'));
        assert!(a.status_message.is_none());
    }

    #[test]
    fn full_session() {
        let mut a = app();
        // Add two tasks
        press(&mut a, KeyCode::Char('a'));
        type_str(&mut a, "buy milk");
        press(&mut a, KeyCode::Enter);
        type_str(&mut a, "walk dog");
        press(&mut a, KeyCode::Enter);
        press(&mut a, KeyCode::Esc);
        assert_eq!(texts(&a), vec!["buy milk", "walk dog"]);

        // Complete the first, then view incomplete only
        press(&mut a, KeyCode::Char('g'));
        press(&mut a, KeyCode::Char(' '));
        press(&mut a, KeyCode::Char('2'));
        let visible: Vec<String> = a
            .list
            .filtered_tasks()
            .iter()
            .map(|t| t.text.clone())
            .collect();
        assert_eq!(visible, vec!["walk dog"]);

        // Clear completed from the all view
        press(&mut a, KeyCode::Char('1'));
        press(&mut a, KeyCode::Char('C'));
        assert_eq!(texts(&a), vec!["walk dog"]);
    }
}
