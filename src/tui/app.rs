use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{TaskId, UiConfig};
use crate::ops::TaskList;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving over the list, single-key commands
    Navigate,
    /// Typing into the new-task line
    Input,
    /// Renaming the task under the cursor
    Edit,
}

/// Main application state: the task list plus view-only state
pub struct App {
    pub list: TaskList,
    pub ui: UiConfig,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor index into the filtered view
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// Byte offset of the caret in the new-task line
    pub input_cursor: usize,
    /// Byte offset of the caret in the edit buffer
    pub edit_cursor: usize,
    pub show_key_hints: bool,
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
}

impl App {
    pub fn new(mut list: TaskList, ui: UiConfig) -> Self {
        list.set_filter(ui.default_filter);
        let theme = Theme::for_mode(list.dark_mode(), &ui);
        App {
            list,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            input_cursor: 0,
            edit_cursor: 0,
            show_key_hints: ui.show_key_hints,
            status_message: None,
            ui,
        }
    }

    /// Ids of the tasks currently visible, in render order
    pub fn visible_ids(&self) -> Vec<TaskId> {
        self.list.filtered_tasks().iter().map(|t| t.id).collect()
    }

    /// The task under the cursor, if the view is non-empty
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.visible_ids().get(self.cursor).copied()
    }

    /// Keep the cursor inside the filtered view
    pub fn clamp_cursor(&mut self) {
        let len = self.list.filtered_tasks().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Move the cursor onto a specific task if it is visible
    pub fn focus_task(&mut self, id: TaskId) {
        if let Some(pos) = self.visible_ids().iter().position(|&v| v == id) {
            self.cursor = pos;
        }
    }

    /// Flip dark mode, re-theme, and report a failed write in the status row
    pub fn toggle_dark_mode(&mut self) {
        if let Err(e) = self.list.toggle_dark_mode() {
            log::warn!("could not save display preference: {}", e);
            self.status_message = Some(format!("preference not saved: {}", e));
        }
        self.refresh_theme();
    }

    pub fn refresh_theme(&mut self) {
        self.theme = Theme::for_mode(self.list.dark_mode(), &self.ui);
    }

    /// Adjust scroll so the cursor row is within a list area of `height` rows
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }
}

/// Run the TUI application
pub fn run(list: TaskList, ui: UiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(list, ui);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::prefs::{DARK_MODE_KEY, MemoryPrefStore};
    use crate::model::Filter;

    fn app() -> App {
        App::new(TaskList::new(Box::new(MemoryPrefStore::new())), UiConfig::default())
    }

    #[test]
    fn new_applies_default_filter() {
        let ui = UiConfig {
            default_filter: Filter::Incomplete,
            ..UiConfig::default()
        };
        let app = App::new(TaskList::new(Box::new(MemoryPrefStore::new())), ui);
        assert_eq!(app.list.filter(), Filter::Incomplete);
    }

    #[test]
    fn theme_follows_restored_preference() {
        let list = TaskList::new(Box::new(MemoryPrefStore::with(DARK_MODE_KEY, "true")));
        let app = App::new(list, UiConfig::default());
        assert_eq!(app.theme, Theme::dark());
    }

    #[test]
    fn toggle_dark_mode_rethemes() {
        let mut app = app();
        assert_eq!(app.theme, Theme::light());
        app.toggle_dark_mode();
        assert!(app.list.dark_mode());
        assert_eq!(app.theme, Theme::dark());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn cursor_task_follows_filter() {
        let mut app = app();
        let a = app.list.add_task("a").unwrap();
        let b = app.list.add_task("b").unwrap();
        app.list.toggle_complete(a);

        assert_eq!(app.cursor_task_id(), Some(a));
        app.list.set_filter(Filter::Incomplete);
        assert_eq!(app.cursor_task_id(), Some(b));
    }

    #[test]
    fn clamp_cursor_after_removal() {
        let mut app = app();
        app.list.add_task("a");
        let b = app.list.add_task("b").unwrap();
        app.cursor = 1;
        app.list.delete_task(b);
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);

        let last = app.cursor_task_id().unwrap();
        app.list.delete_task(last);
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
        assert_eq!(app.cursor_task_id(), None);
    }

    #[test]
    fn scroll_keeps_cursor_visible() {
        let mut app = app();
        app.cursor = 12;
        app.scroll_to_cursor(5);
        assert_eq!(app.scroll_offset, 8);
        app.cursor = 3;
        app.scroll_to_cursor(5);
        assert_eq!(app.scroll_offset, 3);
    }
}
