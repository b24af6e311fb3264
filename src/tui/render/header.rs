use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

use super::helpers::spans_width;

/// Title row (app name, document, counts) and a separator
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let bg = app.theme.background;
    let width = area.width as usize;
    let store = app.session.store();
    let total = store.len();
    let done = store.tasks().iter().filter(|t| t.completed).count();

    let mut spans = vec![
        Span::styled(" \u{25B6} ", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            "docket",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", Style::default().bg(bg)),
    ];

    let counts = if app.active_search.is_empty() {
        format!("{} tasks \u{00B7} {} done ", total, done)
    } else {
        format!(
            "\"{}\" {} of {} \u{00B7} {} done ",
            app.active_search,
            app.visible_rows().len(),
            total,
            done
        )
    };

    let room = width
        .saturating_sub(spans_width(&spans))
        .saturating_sub(display_width(&counts) + 1);
    let path = truncate_to_width(&app.session.path().display().to_string(), room);
    spans.push(Span::styled(path, Style::default().fg(app.theme.dim).bg(bg)));

    let used = spans_width(&spans);
    let counts_w = display_width(&counts);
    if used + counts_w < width {
        spans.push(Span::styled(
            " ".repeat(width - used - counts_w),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(counts, Style::default().fg(app.theme.text).bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        chunks[0],
    );

    let separator = Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    );
    frame.render_widget(Paragraph::new(Line::from(separator)), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn header_shows_counts() {
        let (_tmp, mut app) = app_with_tasks(sample_tasks());
        app.session
            .apply_mutation(crate::ops::session::Mutation::Toggle { target: Some(0) })
            .unwrap();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        let first = output.lines().next().unwrap();
        assert!(first.contains("docket"));
        assert!(first.contains("tasks.json"));
        // Groceries starts out done; Team Meeting is now done too
        assert!(first.ends_with("3 tasks \u{00B7} 2 done"));
    }

    #[test]
    fn header_shows_active_search() {
        let (_tmp, mut app) = app_with_tasks(sample_tasks());
        app.active_search = "meet".into();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.contains("\"meet\" 1 of 3"));
    }
}
