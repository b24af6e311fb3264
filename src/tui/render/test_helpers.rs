use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::model::Config;
use crate::model::task::{Priority, Task};
use crate::ops::session::Session;
use crate::ops::task_store::TaskStore;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

fn task(topic: &str, description: &str, priority: Priority, completed: bool) -> Task {
    Task {
        topic: topic.into(),
        description: description.into(),
        date: "2024-01-15".into(),
        time: "9:30 AM".into(),
        priority,
        completed,
    }
}

/// Three tasks: a pending High, a completed Low and a pending Medium.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        task("Team Meeting", "Weekly sync", Priority::High, false),
        task("Groceries", "Milk and eggs", Priority::Low, true),
        task("Dentist", "Cleaning at 3", Priority::Medium, false),
    ]
}

/// An app over `tasks`, bound to `tasks.json` in a fresh temp dir.
/// Nothing is written until the first mutation.
pub fn app_with_tasks(tasks: Vec<Task>) -> (TempDir, App) {
    let tmp = TempDir::new().unwrap();
    let session = Session::with_store(
        TaskStore::from_tasks(tasks),
        &tmp.path().join("tasks.json"),
    );
    let app = App::new(session, &Config::default());
    (tmp, app)
}
