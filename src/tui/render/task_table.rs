use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::search::highlight_regex;
use crate::ops::view::{Row, StyleTag};
use crate::tui::app::App;
use crate::util::unicode::fit_to_width;

use super::push_highlighted_spans;

const MARKER_W: usize = 2;
const DATE_W: usize = 10;
const TIME_W: usize = 8;
const PRIORITY_W: usize = 8;
const STATUS_W: usize = 8;
/// Single-space gaps between the six data columns
const GAPS: usize = 5;

/// Column widths for a table `width` cells wide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    topic: usize,
    description: usize,
}

impl Columns {
    fn for_width(width: usize) -> Columns {
        let fixed = MARKER_W + DATE_W + TIME_W + PRIORITY_W + STATUS_W + GAPS;
        let flex = width.saturating_sub(fixed);
        let topic = flex * 2 / 5;
        Columns {
            topic,
            description: flex - topic,
        }
    }
}

/// Render the task table with a header row
pub fn render_task_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let cols = Columns::for_width(width);
    let rows = app.visible_rows();
    let body_h = (area.height as usize).saturating_sub(1);

    // Keep the cursor on screen
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if body_h > 0 && app.cursor >= app.scroll_offset + body_h {
        app.scroll_offset = app.cursor + 1 - body_h;
    }
    app.scroll_offset = app.scroll_offset.min(rows.len().saturating_sub(1));

    let header_style = Style::default()
        .fg(app.theme.dim)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    // The join adds the gap after the marker column
    let header = [
        (" ", MARKER_W - 1),
        ("Topic", cols.topic),
        ("Description", cols.description),
        ("Date", DATE_W),
        ("Time", TIME_W),
        ("Priority", PRIORITY_W),
        ("Status", STATUS_W),
    ]
    .iter()
    .map(|(title, w)| fit_to_width(title, *w))
    .collect::<Vec<_>>()
    .join(" ");

    let mut lines = vec![Line::from(Span::styled(header, header_style))];

    if rows.is_empty() {
        let message = if app.active_search.is_empty() {
            " No tasks yet. Press e to fill in the form, then a to add.".to_string()
        } else {
            format!(" No tasks match \"{}\". Press c to clear.", app.active_search)
        };
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    } else {
        let search_re = highlight_regex(&app.active_search);
        for (i, row) in rows
            .iter()
            .enumerate()
            .skip(app.scroll_offset)
            .take(body_h)
        {
            let is_cursor = i == app.cursor;
            let is_selected = app.selected == Some(row.id);
            lines.push(render_row(app, row, cols, is_cursor, is_selected, search_re.as_ref()));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

fn render_row<'a>(
    app: &App,
    row: &Row,
    cols: Columns,
    is_cursor: bool,
    is_selected: bool,
    search_re: Option<&regex::Regex>,
) -> Line<'a> {
    let theme = &app.theme;
    let completed = row.tags.contains(&StyleTag::Completed);

    let mut base = Style::default()
        .fg(theme.text)
        .bg(theme.priority_bg(row.priority));
    if completed {
        base = base.fg(theme.dim).add_modifier(Modifier::CROSSED_OUT);
    }
    if is_cursor {
        base = base.bg(theme.selection_bg).add_modifier(Modifier::BOLD);
    }
    let highlight = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg);
    let gap = Span::styled(" ", base);

    let mut spans: Vec<Span> = Vec::new();
    let marker = if is_selected { "\u{25B8} " } else { "  " };
    spans.push(Span::styled(marker, base.fg(theme.highlight)));

    push_highlighted_spans(
        &mut spans,
        &fit_to_width(&row.topic, cols.topic),
        base,
        highlight,
        search_re,
    );
    spans.push(gap.clone());
    push_highlighted_spans(
        &mut spans,
        &fit_to_width(&row.description, cols.description),
        base,
        highlight,
        search_re,
    );
    spans.push(gap.clone());
    spans.push(Span::styled(fit_to_width(&row.date, DATE_W), base));
    spans.push(gap.clone());
    spans.push(Span::styled(fit_to_width(&row.time, TIME_W), base));
    spans.push(gap.clone());
    let priority_style = if completed {
        base
    } else {
        base.fg(theme.priority_color(row.priority))
    };
    spans.push(Span::styled(
        fit_to_width(row.priority.label(), PRIORITY_W),
        priority_style,
    ));
    spans.push(gap);
    spans.push(Span::styled(fit_to_width(row.status.label(), STATUS_W), base));

    Line::from(spans)
}
