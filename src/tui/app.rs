use std::io;
use std::path::Path;
use std::time::Duration;

use chrono::Datelike;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::io::store_io::LoadError;
use crate::model::Config;
use crate::ops::session::{Effect, Mutation, MutationError, MutationKind, Session};
use crate::ops::task_store::TaskId;
use crate::ops::view::Row;
use crate::util::calendar::{self, MonthView};

use super::form::TaskForm;
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the task form
    Edit,
    Search,
    Confirm,
    Calendar,
}

/// What a y/n confirmation applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTask { id: TaskId, topic: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// Popup message dismissed by any key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

/// Date picker popup state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    pub month: MonthView,
    /// Day under the cursor, always valid for `month`
    pub day: u32,
    /// Mode to go back to on close
    pub return_mode: Mode,
}

impl CalendarState {
    /// Move the cursor by `delta` days, crossing month boundaries
    pub fn move_day(&mut self, delta: i64) {
        let Some(current) = self.month.date(self.day) else {
            return;
        };
        if let Some(target) = current.checked_add_signed(chrono::Duration::days(delta)) {
            self.month = MonthView::containing(target);
            self.day = target.day();
        }
    }

    /// Show another month, keeping the day number where it exists
    pub fn switch_month(&mut self, month: MonthView) {
        self.day = self.day.min(month.days_in_month()).max(1);
        self.month = month;
    }
}

/// Main application state
pub struct App {
    pub session: Session,
    pub theme: Theme,
    pub mode: Mode,
    pub form: TaskForm,
    /// Selected task, re-resolved to a position before every mutation
    pub selected: Option<TaskId>,
    /// Cursor index into the visible rows
    pub cursor: usize,
    pub scroll_offset: usize,
    /// Text being typed in search mode
    pub search_input: String,
    /// Applied search; empty means no filter
    pub active_search: String,
    pub confirm: Option<ConfirmAction>,
    pub calendar: Option<CalendarState>,
    pub notice: Option<Notice>,
    /// One-line feedback shown in the status row
    pub status_message: Option<String>,
    pub confirm_delete: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, config: &Config) -> Self {
        App {
            session,
            theme: Theme::from_config(&config.ui),
            mode: Mode::Navigate,
            form: TaskForm::default(),
            selected: None,
            cursor: 0,
            scroll_offset: 0,
            search_input: String::new(),
            active_search: String::new(),
            confirm: None,
            calendar: None,
            notice: None,
            status_message: None,
            confirm_delete: config.ui.confirm_delete,
            should_quit: false,
        }
    }

    /// Rows for the active search, rebuilt on every call
    pub fn visible_rows(&self) -> Vec<Row> {
        self.session.query_view(&self.active_search)
    }

    pub fn cursor_row(&self) -> Option<Row> {
        self.visible_rows().into_iter().nth(self.cursor)
    }

    /// Current store position of the selected task
    pub fn selected_position(&self) -> Option<usize> {
        self.selected
            .and_then(|id| self.session.store().position_of(id))
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_rows().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_rows().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    /// Select the task under the cursor and copy its values into the form
    pub fn select_cursor_row(&mut self) {
        let Some(row) = self.cursor_row() else {
            return;
        };
        match self.session.field_snapshot(row.position) {
            Some(fields) => {
                self.form.fill(&fields);
                self.selected = Some(row.id);
                self.status_message = Some(format!("Selected \"{}\"", row.topic));
            }
            None => self.selected = None,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.status_message = None;
    }

    pub fn show_notice(&mut self, kind: NoticeKind, title: &str, body: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            title: title.to_string(),
            body: body.into(),
        });
    }

    /// Report a load failure from startup
    pub fn report_load_error(&mut self, err: &LoadError) {
        let body = match err {
            LoadError::Parse { .. } => format!(
                "{}. Starting with an empty list; the unreadable file was copied aside.",
                err
            ),
            LoadError::Read { .. } => format!("{}. Starting with an empty list.", err),
        };
        self.show_notice(NoticeKind::Warning, "Could Not Load Tasks", body);
    }

    /// Build and apply a mutation of `kind` from the form and selection
    pub fn submit(&mut self, kind: MutationKind) {
        let target = self.selected_position();
        let mutation = match kind {
            MutationKind::Create => Mutation::Create(self.form.to_fields()),
            MutationKind::Update => Mutation::Update {
                target,
                fields: self.form.to_fields(),
            },
            MutationKind::Delete => Mutation::Delete { target },
            MutationKind::Toggle => Mutation::Toggle { target },
        };
        self.apply(mutation);
    }

    /// Ask before deleting, or delete right away when confirmation is off
    pub fn request_delete(&mut self) {
        let Some(id) = self.selected else {
            self.submit(MutationKind::Delete);
            return;
        };
        if !self.confirm_delete {
            self.submit(MutationKind::Delete);
            return;
        }
        let topic = self
            .selected_position()
            .and_then(|pos| self.session.store().get(pos))
            .map(|t| t.topic.clone())
            .unwrap_or_default();
        self.confirm = Some(ConfirmAction::DeleteTask { id, topic });
        self.mode = Mode::Confirm;
    }

    /// Carry out the pending confirmation
    pub fn confirm_yes(&mut self) {
        let action = self.confirm.take();
        self.mode = Mode::Navigate;
        if let Some(ConfirmAction::DeleteTask { id, .. }) = action {
            let target = self.session.store().position_of(id);
            self.apply(Mutation::Delete { target });
        }
    }

    pub fn confirm_no(&mut self) {
        self.confirm = None;
        self.mode = Mode::Navigate;
    }

    fn apply(&mut self, mutation: Mutation) {
        let kind = mutation.kind();
        match self.session.apply_mutation(mutation) {
            Ok(applied) => {
                let message = match &applied.effect {
                    Effect::Created { .. } => "Task added".to_string(),
                    Effect::Updated { .. } => "Task updated".to_string(),
                    Effect::Deleted { task } => format!("Deleted \"{}\"", task.topic),
                    Effect::Toggled { completed: true, .. } => "Marked complete".to_string(),
                    Effect::Toggled {
                        completed: false, ..
                    } => "Marked pending".to_string(),
                };
                if !matches!(applied.effect, Effect::Toggled { .. }) {
                    self.form.clear();
                    self.selected = None;
                }
                self.status_message = Some(message);
                if let Some(err) = applied.save_error {
                    self.show_notice(
                        NoticeKind::Error,
                        "Save Failed",
                        format!("{}. Changes are kept in memory; press Ctrl-S to retry.", err),
                    );
                }
                self.clamp_cursor();
            }
            Err(err) => {
                debug!(?kind, error = %err, "mutation rejected");
                let title = match err {
                    MutationError::Selection(_) => "No Task Selected",
                    MutationError::Validation(_) => "Input Error",
                    MutationError::Range(_) => "Task Not Found",
                };
                if matches!(err, MutationError::Range(_)) {
                    self.selected = None;
                }
                self.show_notice(NoticeKind::Warning, title, err.to_string());
            }
        }
    }

    /// Write the document again, e.g. after a failed save
    pub fn save(&mut self) {
        match self.session.save() {
            Ok(()) => {
                self.status_message = Some(format!("Saved {}", self.session.path().display()));
            }
            Err(err) => self.show_notice(NoticeKind::Error, "Save Failed", err.to_string()),
        }
    }

    /// Apply the typed search and leave search mode
    pub fn apply_search(&mut self) {
        self.active_search = self.search_input.trim().to_string();
        self.cursor = 0;
        self.scroll_offset = 0;
        self.mode = Mode::Navigate;
    }

    pub fn clear_search(&mut self) {
        self.active_search.clear();
        self.search_input.clear();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Open the date picker on the current month
    pub fn open_calendar(&mut self) {
        let today = calendar::today();
        self.calendar = Some(CalendarState {
            month: MonthView::containing(today),
            day: today.day(),
            return_mode: self.mode,
        });
        self.mode = Mode::Calendar;
    }

    /// Write the day under the cursor into the form and close the picker
    pub fn pick_calendar_day(&mut self) {
        if let Some(state) = self.calendar.take() {
            if let Some(date) = state.month.format_day(state.day) {
                self.form.date.set(&date);
            }
            self.mode = state.return_mode;
        }
    }

    pub fn close_calendar(&mut self) {
        if let Some(state) = self.calendar.take() {
            self.mode = state.return_mode;
        }
    }
}

/// Run the TUI against the document at `path`
pub fn run(config: &Config, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (session, load_error) = Session::initialize(path);
    info!(path = %path.display(), tasks = session.store().len(), "starting tui");

    let mut app = App::new(session, config);
    if let Some(err) = &load_error {
        app.report_load_error(err);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
