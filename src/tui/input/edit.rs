use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter | KeyCode::Esc) => app.mode = Mode::Navigate,
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => app.save(),
        (_, KeyCode::F(2)) => app.open_calendar(),
        (_, KeyCode::Tab) => app.form.focus_next(),
        (_, KeyCode::BackTab) => app.form.focus_prev(),
        (_, KeyCode::Up) => app.form.adjust(1),
        (_, KeyCode::Down) => app.form.adjust(-1),
        _ => edit_focused(app, key),
    }
}

/// Keys that act on the focused control itself
fn edit_focused(app: &mut App, key: KeyEvent) {
    if let Some(input) = app.form.focused_input_mut() {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                input.insert(c)
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.left(),
            KeyCode::Right => input.right(),
            KeyCode::Home => input.home(),
            KeyCode::End => input.end(),
            _ => {}
        }
        return;
    }

    // Spinners and choices: left/right step too, space flips AM/PM
    match key.code {
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char(' ') => app.form.adjust(1),
        KeyCode::Left | KeyCode::Char('-') => app.form.adjust(-1),
        _ => {}
    }
}
