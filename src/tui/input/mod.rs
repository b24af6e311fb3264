mod calendar;
mod confirm;
mod edit;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use calendar::handle_calendar;
use confirm::handle_confirm;
use edit::handle_edit;
use navigate::handle_navigate;
use search::handle_search;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Any key dismisses a notice
    if app.notice.is_some() {
        app.notice = None;
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Edit => handle_edit(app, key),
        Mode::Search => handle_search(app, key),
        Mode::Confirm => handle_confirm(app, key),
        Mode::Calendar => handle_calendar(app, key),
    }
}

/// Some terminals report Shift+letter as the lowercase letter with SHIFT set.
/// Fold that into the uppercase char so bindings like `D` match everywhere.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}

#[cfg(test)]
pub(crate) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ch(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Feed each char of `text` as a key press
    pub fn type_text(app: &mut crate::tui::app::App, text: &str) {
        for c in text.chars() {
            super::handle_key(app, ch(c));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;
    use crate::tui::app::NoticeKind;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn notice_swallows_next_key() {
        let (_tmp, mut app) = app_with_tasks(sample_tasks());
        app.show_notice(NoticeKind::Info, "Hi", "there");
        handle_key(&mut app, ch('q'));
        assert!(app.notice.is_none());
        assert!(!app.should_quit);
        handle_key(&mut app, ch('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn shifted_lowercase_is_normalized() {
        let key = normalize_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::SHIFT));
        assert_eq!(key.code, KeyCode::Char('D'));
        let key = normalize_key(ch('d'));
        assert_eq!(key.code, KeyCode::Char('d'));
    }
}
