use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

pub(super) fn handle_calendar(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_calendar();
            return;
        }
        KeyCode::Enter => {
            app.pick_calendar_day();
            return;
        }
        _ => {}
    }

    let Some(state) = app.calendar.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => state.move_day(-1),
        KeyCode::Right | KeyCode::Char('l') => state.move_day(1),
        KeyCode::Up | KeyCode::Char('k') => state.move_day(-7),
        KeyCode::Down | KeyCode::Char('j') => state.move_day(7),
        KeyCode::Char('<') | KeyCode::PageUp => state.switch_month(state.month.prev()),
        KeyCode::Char('>') | KeyCode::PageDown => state.switch_month(state.month.next()),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crossterm::event::KeyCode;

    use crate::tui::app::Mode;
    use crate::tui::input::handle_key;
    use crate::tui::input::test_keys::*;
    use crate::tui::render::test_helpers::*;
    use crate::util::calendar::MonthView;

    fn open_on(app: &mut crate::tui::app::App, y: i32, m: u32, d: u32) {
        handle_key(app, ch('D'));
        let state = app.calendar.as_mut().unwrap();
        state.month = MonthView::containing(NaiveDate::from_ymd_opt(y, m, 1).unwrap());
        state.day = d;
    }

    #[test]
    fn arrows_and_month_keys_then_pick() {
        let (_tmp, mut app) = app_with_tasks(vec![]);
        open_on(&mut app, 2024, 1, 15);
        handle_key(&mut app, key(KeyCode::Right));
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, ch('>'));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.form.date.text(), "2024-02-23");
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn page_up_wraps_year() {
        let (_tmp, mut app) = app_with_tasks(vec![]);
        open_on(&mut app, 2024, 1, 31);
        handle_key(&mut app, key(KeyCode::PageUp));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.form.date.text(), "2023-12-31");
    }

    #[test]
    fn esc_leaves_form_untouched() {
        let (_tmp, mut app) = app_with_tasks(vec![]);
        app.form.date.set("2024-05-01");
        open_on(&mut app, 2024, 1, 15);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.form.date.text(), "2024-05-01");
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.calendar.is_none());
    }
}
