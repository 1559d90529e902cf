use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

const TITLE: &str = "Task Manager";

/// Render the title row with the display-mode indicator on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mode_label = if app.list.dark_mode() {
        "\u{263E} dark"
    } else {
        "\u{2600} light"
    };

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            TITLE,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    let used = 1 + TITLE.chars().count();
    let label_width = mode_label.chars().count() + 1;
    if used + label_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - label_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            mode_label,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
