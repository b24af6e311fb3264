use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::session::MutationKind;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => app.save(),
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Cursor
        (_, KeyCode::Char('j') | KeyCode::Down) => app.move_cursor(1),
        (_, KeyCode::Char('k') | KeyCode::Up) => app.move_cursor(-1),
        (_, KeyCode::Char('g') | KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G') | KeyCode::End) => app.move_cursor(isize::MAX),

        // Selection
        (_, KeyCode::Enter | KeyCode::Char(' ')) => app.select_cursor_row(),
        (_, KeyCode::Esc) => app.clear_selection(),

        // Form
        (_, KeyCode::Char('e') | KeyCode::Tab) => app.mode = Mode::Edit,
        (_, KeyCode::Char('D')) => app.open_calendar(),

        // Mutations
        (_, KeyCode::Char('a')) => app.submit(MutationKind::Create),
        (_, KeyCode::Char('u')) => app.submit(MutationKind::Update),
        (_, KeyCode::Char('d')) => app.request_delete(),
        (_, KeyCode::Char('x')) => app.submit(MutationKind::Toggle),

        // Search
        (_, KeyCode::Char('/')) => {
            app.search_input = app.active_search.clone();
            app.mode = Mode::Search;
        }
        (_, KeyCode::Char('c')) => app.clear_search(),
        _ => {}
    }
}
