use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.search_input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => app.apply_search(),
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => app.search_input.push(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::tui::app::Mode;
    use crate::tui::input::handle_key;
    use crate::tui::input::test_keys::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn enter_applies_search() {
        let (_tmp, mut app) = app_with_tasks(sample_tasks());
        handle_key(&mut app, ch('/'));
        type_text(&mut app, "grox");
        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.active_search, "gro");
        let rows = app.visible_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].position, 1);
    }

    #[test]
    fn esc_keeps_previous_search() {
        let (_tmp, mut app) = app_with_tasks(sample_tasks());
        app.active_search = "dent".into();
        handle_key(&mut app, ch('/'));
        assert_eq!(app.search_input, "dent");
        type_text(&mut app, "xyz");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.active_search, "dent");
        assert_eq!(app.visible_rows().len(), 1);
    }

    #[test]
    fn empty_search_shows_everything() {
        let (_tmp, mut app) = app_with_tasks(sample_tasks());
        app.active_search = "dent".into();
        handle_key(&mut app, ch('/'));
        for _ in 0..4 {
            handle_key(&mut app, key(KeyCode::Backspace));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.active_search, "");
        assert_eq!(app.visible_rows().len(), 3);
    }

    #[test]
    fn selection_survives_filtering() {
        let (_tmp, mut app) = app_with_tasks(sample_tasks());
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, ch('/'));
        type_text(&mut app, "dent");
        handle_key(&mut app, key(KeyCode::Enter));

        // Groceries is hidden but still selected, so toggle reopens it
        assert!(app.session.store().get(1).unwrap().completed);
        handle_key(&mut app, ch('x'));
        assert!(!app.session.store().get(1).unwrap().completed);
        assert!(!app.session.store().get(2).unwrap().completed);

        handle_key(&mut app, ch('c'));
        assert_eq!(app.visible_rows().len(), 3);
    }
}
