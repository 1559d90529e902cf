use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Filter, Task};
use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::input_line::{caret, window_start};

/// Width of the cursor marker plus checkbox: "▸ [x] "
const ROW_PREFIX: usize = 6;

/// Render the filtered task rows, scrolled to keep the cursor visible
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let height = area.height as usize;
    app.scroll_to_cursor(height);

    let tasks = app.list.filtered_tasks();
    let lines: Vec<Line> = if tasks.is_empty() {
        vec![Line::from(Span::styled(
            empty_message(app),
            Style::default().fg(app.theme.dim).bg(bg),
        ))]
    } else {
        tasks
            .iter()
            .enumerate()
            .skip(app.scroll_offset)
            .take(height)
            .map(|(i, task)| task_line(app, task, i == app.cursor, area.width as usize))
            .collect()
    };

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn empty_message(app: &App) -> &'static str {
    match (app.list.tasks().is_empty(), app.list.filter()) {
        (true, _) => "  No tasks yet. Press a to add one.",
        (false, Filter::Completed) => "  No completed tasks.",
        (false, Filter::Incomplete) => "  Nothing left to do.",
        (false, Filter::All) => "",
    }
}

fn task_line(app: &App, task: &Task, is_cursor: bool, width: usize) -> Line<'static> {
    let theme = &app.theme;
    let row_bg = if is_cursor && app.mode != Mode::Input {
        theme.selection_bg
    } else {
        theme.row_bg
    };
    let base = Style::default().bg(row_bg);

    let marker = if is_cursor { "\u{25B8} " } else { "  " };
    let check = if task.completed { "[x] " } else { "[ ] " };
    let check_color = if task.completed { theme.green } else { theme.dim };

    let mut spans = vec![
        Span::styled(marker, base.fg(theme.highlight)),
        Span::styled(check, base.fg(check_color)),
    ];

    let avail = width.saturating_sub(ROW_PREFIX);
    match app.list.editing() {
        Some(edit) if edit.id == task.id => {
            let buffer = edit.buffer.as_str();
            let cursor = app.edit_cursor.min(buffer.len());
            // One column is reserved for the caret
            let avail = avail.saturating_sub(1);
            let start = window_start(buffer, cursor, avail);
            let before = &buffer[start..cursor];
            let after_width = avail.saturating_sub(unicode::display_width(before));
            let text_style = base.fg(theme.text_bright).add_modifier(Modifier::UNDERLINED);
            spans.push(Span::styled(before.to_string(), text_style));
            spans.push(caret(app, row_bg));
            spans.push(Span::styled(
                unicode::truncate_to_width(&buffer[cursor..], after_width),
                text_style,
            ));
        }
        _ => {
            let style = if task.completed {
                base.fg(theme.dim).add_modifier(Modifier::CROSSED_OUT)
            } else {
                base.fg(theme.text)
            };
            spans.push(Span::styled(
                unicode::truncate_to_width(&task.text, avail),
                style,
            ));
        }
    }

    Line::from(spans)
}
