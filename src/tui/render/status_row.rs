use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): counts on the left, then a
/// transient message or the key hints for the current mode on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (total, done) = app.list.counts();
    let counts = format!(
        " {} task{}, {} done",
        total,
        if total == 1 { "" } else { "s" },
        done
    );
    let mut spans = vec![Span::styled(
        counts,
        Style::default().fg(app.theme.text).bg(bg),
    )];

    let right = match &app.status_message {
        Some(msg) => Some((msg.as_str(), app.theme.yellow)),
        None if app.show_key_hints => Some((key_hints(app.mode), app.theme.dim)),
        None => None,
    };

    if let Some((text, color)) = right {
        let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let text_width = text.chars().count() + 1;
        if content_width + text_width < width {
            let padding = width - content_width - text_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(text.to_string(), Style::default().fg(color).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn key_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "a add  e edit  x done  d del  f filter  t theme  q quit",
        Mode::Input => "Enter add  Esc done",
        Mode::Edit => "Enter/Esc save",
    }
}
