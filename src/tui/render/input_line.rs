use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

const PLACEHOLDER: &str = "Enter task...";
const PROMPT: &str = " + ";

/// Render the new-task line. Shows a placeholder when the draft is empty.
pub fn render_input_line(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.input_bg;
    let focused = app.mode == Mode::Input;
    let draft = app.list.input();

    let mut spans = vec![Span::styled(
        PROMPT,
        Style::default()
            .fg(if focused { app.theme.highlight } else { app.theme.dim })
            .bg(bg),
    )];

    if draft.is_empty() {
        if focused {
            spans.push(caret(app, bg));
        }
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else if focused {
        let cursor = app.input_cursor.min(draft.len());
        let avail = (area.width as usize).saturating_sub(PROMPT.len() + 1);
        let start = window_start(draft, cursor, avail);
        let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
        spans.push(Span::styled(draft[start..cursor].to_string(), text_style));
        spans.push(caret(app, bg));
        spans.push(Span::styled(draft[cursor..].to_string(), text_style));
    } else {
        let avail = (area.width as usize).saturating_sub(PROMPT.len());
        spans.push(Span::styled(
            unicode::truncate_to_width(draft, avail),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

pub(super) fn caret(app: &App, bg: ratatui::style::Color) -> Span<'static> {
    Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg))
}

/// Byte offset where a line of `avail` columns must start so the caret at
/// `cursor` stays on screen
pub(super) fn window_start(text: &str, cursor: usize, avail: usize) -> usize {
    let caret_col = unicode::byte_offset_to_display_col(text, cursor);
    if caret_col > avail {
        skip_cols(text, caret_col - avail)
    } else {
        0
    }
}

/// Byte offset of the first grapheme at or after `cols` display columns
fn skip_cols(s: &str, cols: usize) -> usize {
    let mut offset = 0;
    while unicode::byte_offset_to_display_col(s, offset) < cols {
        match unicode::next_grapheme_boundary(s, offset) {
            Some(next) => offset = next,
            None => break,
        }
    }
    offset
}
