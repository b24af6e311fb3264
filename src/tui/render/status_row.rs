use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::truncate_to_width;

use super::helpers::spans_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (mut spans, hint) = match app.mode {
        Mode::Navigate => {
            let message = app.status_message.as_deref().unwrap_or("");
            (
                vec![Span::styled(
                    format!(" {}", message),
                    Style::default().fg(app.theme.text).bg(bg),
                )],
                "a add  u update  d delete  x done  e edit  / search  q quit",
            )
        }
        Mode::Search => (
            vec![
                Span::styled(
                    format!("/{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)), // ▌ cursor
            ],
            "Enter search  Esc cancel",
        ),
        Mode::Edit => (
            vec![Span::styled(
                " EDIT",
                Style::default().fg(app.theme.highlight).bg(bg),
            )],
            "Tab next  \u{2191}\u{2193} adjust  F2 calendar  Enter/Esc done",
        ),
        Mode::Confirm => (vec![], "y confirm  n cancel"),
        Mode::Calendar => (
            vec![Span::styled(
                " DATE",
                Style::default().fg(app.theme.highlight).bg(bg),
            )],
            "\u{2190}\u{2192}\u{2191}\u{2193} day  </> month  Enter pick  Esc close",
        ),
    };

    // Right-align the hint when it fits; otherwise the message wins
    let content_width = spans_width(&spans);
    let hint_width = hint.chars().count();
    if content_width + hint_width + 1 < width {
        let padding = width - content_width - hint_width - 1;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("{} ", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else if let Some(first) = spans.first_mut() {
        first.content = truncate_to_width(&first.content, width).into();
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
