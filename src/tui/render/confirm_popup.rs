use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, ConfirmAction};

use super::helpers::{centered_rect_fixed, wrap_text};

/// Render the y/n confirmation popup
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ConfirmAction::DeleteTask { topic, .. }) = &app.confirm else {
        return;
    };

    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut styled_lines: Vec<(String, Style)> = vec![
        (" Delete Task".into(), header_style),
        ("".into(), text_style),
    ];
    let quoted = format!("\u{201c}{}\u{201d}", topic);
    for s in wrap_text("   ", &quoted, inner_w) {
        styled_lines.push((s, bright_style));
    }
    styled_lines.push(("".into(), text_style));
    styled_lines.push((" y delete   n cancel".into(), dim_style));

    let popup_h = ((styled_lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let lines: Vec<Line> = styled_lines
        .into_iter()
        .map(|(text, style)| Line::from(Span::styled(text, style)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(bg)),
        overlay_area,
    );
}
