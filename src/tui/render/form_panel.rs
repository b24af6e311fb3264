use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::tui::form::{FormField, TextInput};
use crate::util::unicode::{display_width, fit_to_width, next_grapheme_boundary};

/// Three field rows and a separator
pub const FORM_HEIGHT: u16 = 4;

const LABEL_W: usize = 13;
const SHORT_LABEL_W: usize = 6;
/// `YYYY-MM-DD` plus the cursor cell
const DATE_W: usize = 11;

struct FieldStyles {
    label: Style,
    value: Style,
    focused: Style,
    cursor: Style,
    bg: Style,
}

/// Render the task form
pub fn render_form_panel(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let left_w = width / 2;
    let right_w = width - left_w;
    let editing = app.mode == Mode::Edit;
    let focus = editing.then_some(app.form.focus);

    let styles = FieldStyles {
        label: Style::default().fg(app.theme.dim).bg(bg),
        value: Style::default().fg(app.theme.text).bg(bg),
        focused: Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg),
        cursor: Style::default()
            .fg(app.theme.highlight)
            .bg(app.theme.selection_bg),
        bg: Style::default().bg(bg),
    };

    let form = &app.form;
    let mut lines = Vec::with_capacity(FORM_HEIGHT as usize);

    // Row 1: topic | date
    let mut spans = text_row(
        (" Topic", LABEL_W),
        &form.topic,
        left_w,
        focus == Some(FormField::Topic),
        &styles,
    );
    spans.extend(text_row(
        ("Date", SHORT_LABEL_W),
        &form.date,
        SHORT_LABEL_W + DATE_W + 1,
        focus == Some(FormField::Date),
        &styles,
    ));
    spans.push(Span::styled("F2 calendar", styles.label));
    lines.push(Line::from(spans));

    // Row 2: description | time
    let mut spans = text_row(
        (" Description", LABEL_W),
        &form.description,
        left_w,
        focus == Some(FormField::Description),
        &styles,
    );
    spans.push(Span::styled(fit_to_width("Time", SHORT_LABEL_W), styles.label));
    let time = form.time;
    spans.push(choice(
        &format!("{:>2}", time.hour()),
        focus == Some(FormField::Hour),
        &styles,
    ));
    spans.push(Span::styled(":", styles.value));
    spans.push(choice(
        &format!("{:02}", time.minute()),
        focus == Some(FormField::Minute),
        &styles,
    ));
    spans.push(Span::styled(" ", styles.bg));
    spans.push(choice(
        time.meridiem().label(),
        focus == Some(FormField::Meridiem),
        &styles,
    ));
    lines.push(Line::from(spans));

    // Row 3: priority | selection
    let mut spans = vec![Span::styled(fit_to_width(" Priority", LABEL_W), styles.label)];
    let priority_style = if focus == Some(FormField::Priority) {
        styles.focused
    } else {
        Style::default()
            .fg(app.theme.priority_color(form.priority))
            .bg(bg)
    };
    let priority_text = format!("\u{25C2} {} \u{25B8}", form.priority.label());
    let priority_w = display_width(&priority_text);
    spans.push(Span::styled(priority_text, priority_style));
    spans.push(Span::styled(
        " ".repeat(left_w.saturating_sub(LABEL_W + priority_w)),
        styles.bg,
    ));
    let target = match app
        .selected_position()
        .and_then(|pos| app.session.store().get(pos))
    {
        Some(task) => Span::styled(
            fit_to_width(&format!("Selected: {}", task.topic), right_w),
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("No selection", styles.label),
    };
    spans.push(target);
    lines.push(Line::from(spans));

    // Separator
    lines.push(Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    frame.render_widget(Paragraph::new(lines).style(styles.bg), area);
}

/// Label plus a text input padded to `total_w` cells
fn text_row<'a>(
    (label, label_w): (&str, usize),
    input: &TextInput,
    total_w: usize,
    focused: bool,
    styles: &FieldStyles,
) -> Vec<Span<'a>> {
    let value_w = total_w.saturating_sub(label_w + 1);
    let mut spans = vec![Span::styled(fit_to_width(label, label_w), styles.label)];
    spans.extend(text_value_spans(input, value_w, focused, styles));
    spans.push(Span::styled(" ", styles.bg));
    spans
}

/// The visible part of a text input. When focused, the cursor is drawn as
/// `▌` and leading text scrolls off so it stays in view.
fn text_value_spans<'a>(
    input: &TextInput,
    width: usize,
    focused: bool,
    styles: &FieldStyles,
) -> Vec<Span<'a>> {
    if !focused {
        return vec![Span::styled(fit_to_width(input.text(), width), styles.value)];
    }
    let (mut before, after) = input.text().split_at(input.cursor());
    while !before.is_empty() && display_width(before) + 1 > width {
        match next_grapheme_boundary(before, 0) {
            Some(i) => before = &before[i..],
            None => break,
        }
    }
    let rest = width.saturating_sub(display_width(before) + 1);
    vec![
        Span::styled(before.to_string(), styles.focused),
        Span::styled("\u{258C}", styles.cursor),
        Span::styled(fit_to_width(after, rest), styles.focused),
    ]
}

fn choice<'a>(text: &str, focused: bool, styles: &FieldStyles) -> Span<'a> {
    let style = if focused { styles.focused } else { styles.value };
    Span::styled(text.to_string(), style)
}
