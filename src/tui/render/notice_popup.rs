use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, NoticeKind};

use super::helpers::{centered_rect_fixed, wrap_text};

/// Render the current notice; any key dismisses it
pub fn render_notice_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };

    let popup_w: u16 = 52.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = app.theme.background;
    let accent = match notice.kind {
        NoticeKind::Info => app.theme.highlight,
        NoticeKind::Warning => app.theme.yellow,
        NoticeKind::Error => app.theme.red,
    };
    let header_style = Style::default()
        .fg(accent)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);

    let mut styled_lines: Vec<(String, Style)> = vec![
        (format!(" {}", notice.title), header_style),
        ("".into(), text_style),
    ];
    for s in wrap_text(" ", &notice.body, inner_w) {
        styled_lines.push((s, text_style));
    }
    styled_lines.push(("".into(), text_style));
    styled_lines.push((
        " Press any key".into(),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    // Dynamic height from content + 2 for borders
    let popup_h = ((styled_lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let lines: Vec<Line> = styled_lines
        .into_iter()
        .map(|(text, style)| Line::from(Span::styled(text, style)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(bg)),
        overlay_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn notice_wraps_body() {
        let (_tmp, mut app) = app_with_tasks(vec![]);
        app.submit(crate::ops::session::MutationKind::Create);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_notice_popup(frame, &app, area);
        });
        assert!(output.contains("Input Error"));
        assert!(output.contains("required: topic, description, date"));
        assert!(output.contains("Press any key"));
    }
}
