pub mod calendar_popup;
pub mod confirm_popup;
pub mod form_panel;
pub mod header;
mod helpers;
pub mod notice_popup;
pub mod status_row;
pub mod task_table;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2) | form (4) | task table | status row (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + separator
            Constraint::Length(form_panel::FORM_HEIGHT),
            Constraint::Min(1), // task table
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    form_panel::render_form_panel(frame, app, chunks[1]);
    task_table::render_task_table(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Popups, rendered on top of everything
    if app.calendar.is_some() {
        calendar_popup::render_calendar_popup(frame, app, area);
    }
    if app.confirm.is_some() {
        confirm_popup::render_confirm_popup(frame, app, area);
    }
    if app.notice.is_some() {
        notice_popup::render_notice_popup(frame, app, area);
    }
}

/// Push spans for text with regex match highlighting. If no regex or no matches,
/// pushes a single span with `base_style`. Otherwise splits text at match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    for m in re.find_iter(text) {
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if last_end < text.len() || last_end == 0 {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}
