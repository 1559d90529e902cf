pub mod filter_bar;
pub mod header;
pub mod input_line;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | input | filter bar | gap | list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // new-task input
            Constraint::Length(1), // filter bar
            Constraint::Length(1), // gap
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    input_line::render_input_line(frame, app, chunks[1]);
    filter_bar::render_filter_bar(frame, app, chunks[2]);
    task_list::render_task_list(frame, app, chunks[4]);
    status_row::render_status_row(frame, app, chunks[5]);
}
