use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::App;

/// Render the filter choices with the active one highlighted, then the
/// clear-completed action
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let active = app.list.filter();

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for (i, filter) in Filter::ALL.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, filter.label());
        let style = if *filter == active {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(filter_color(app, *filter)).bg(bg)
        };
        spans.push(Span::styled(label, style));
    }

    let (_, done) = app.list.counts();
    spans.push(Span::styled(
        "\u{2502}",
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    spans.push(Span::styled(
        format!(" C Clear Completed ({}) ", done),
        Style::default()
            .fg(if done > 0 { app.theme.red } else { app.theme.dim })
            .bg(bg),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn filter_color(app: &App, filter: Filter) -> ratatui::style::Color {
    match filter {
        Filter::All => app.theme.text,
        Filter::Incomplete => app.theme.yellow,
        Filter::Completed => app.theme.green,
    }
}
