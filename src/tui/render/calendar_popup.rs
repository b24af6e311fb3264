use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::calendar;

use super::helpers::centered_rect_fixed;

const WEEKDAYS: &str = " Su Mo Tu We Th Fr Sa";
/// Seven 3-cell day columns plus a leading space, and borders
const POPUP_W: u16 = 24;

/// Render the date picker over the screen
pub fn render_calendar_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(state) = app.calendar else {
        return;
    };
    let month = state.month;
    let today = calendar::today();

    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let today_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let cursor_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.selection_bg)
        .add_modifier(Modifier::BOLD);

    let inner_w = POPUP_W.saturating_sub(2) as usize;
    let title = month.title();
    let pad = inner_w.saturating_sub(title.chars().count() + 4) / 2;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(" \u{25C2}", Style::default().fg(app.theme.dim).bg(bg)),
            Span::styled(" ".repeat(pad), text_style),
            Span::styled(title, title_style),
            Span::styled(" ".repeat(pad), text_style),
            Span::styled(" \u{25B8}", Style::default().fg(app.theme.dim).bg(bg)),
        ]),
        Line::from(Span::styled(
            WEEKDAYS,
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];

    for week in month.weeks() {
        let mut spans = vec![Span::styled(" ", text_style)];
        for cell in week {
            match cell {
                Some(day) => {
                    let style = if day == state.day {
                        cursor_style
                    } else if month.date(day) == Some(today) {
                        today_style
                    } else {
                        text_style
                    };
                    spans.push(Span::styled(format!("{:>2}", day), style));
                }
                None => spans.push(Span::styled("  ", text_style)),
            }
            spans.push(Span::styled(" ", text_style));
        }
        lines.push(Line::from(spans));
    }

    let popup_h = ((lines.len() as u16) + 2).min(area.height);
    let overlay_area = centered_rect_fixed(POPUP_W, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(bg)),
        overlay_area,
    );
}
