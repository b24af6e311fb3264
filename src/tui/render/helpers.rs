use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::util::unicode::display_width;

/// Total display width of a list of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| display_width(&s.content)).sum()
}

/// A `width` x `height` rect centered in `area`
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Word-wrap `text` into lines of at most `max_width` cells.
/// Every line (including the first) is prefixed with `indent`.
pub(super) fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_len = display_width(indent);
    let mut lines = Vec::new();
    let mut current = indent.to_string();
    let mut current_w = indent_len;

    for word in text.split_whitespace() {
        let word_w = display_width(word);
        let space = if current_w == indent_len { 0 } else { 1 };
        if current_w + space + word_w > max_width && current_w > indent_len {
            lines.push(current);
            current = indent.to_string();
            current_w = indent_len;
        }
        if current_w > indent_len {
            current.push(' ');
            current_w += 1;
        }
        current.push_str(word);
        current_w += word_w;
    }
    if current_w > indent_len || lines.is_empty() {
        lines.push(current);
    }
    lines
}
