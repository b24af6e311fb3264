use serde::Serialize;

use crate::model::task::{Priority, Task};
use crate::ops::view::Row;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct TaskJson {
    /// 1-based row number
    pub row: usize,
    pub topic: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub priority: Priority,
    pub completed: bool,
}

/// Row numbers shown to the user start at 1
pub fn row_number(position: usize) -> usize {
    position + 1
}

pub fn task_to_json(position: usize, task: &Task) -> TaskJson {
    TaskJson {
        row: row_number(position),
        topic: task.topic.clone(),
        description: task.description.clone(),
        date: task.date.clone(),
        time: task.time.clone(),
        priority: task.priority,
        completed: task.completed,
    }
}

pub fn row_to_json(row: &Row) -> TaskJson {
    TaskJson {
        row: row_number(row.position),
        topic: row.topic.clone(),
        description: row.description.clone(),
        date: row.date.clone(),
        time: row.time.clone(),
        priority: row.priority,
        completed: row.is_completed(),
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

fn status_mark(completed: bool) -> char {
    if completed { 'x' } else { ' ' }
}

/// One list line: `  1  [ ] High    2024-01-15  9:30 AM  Topic: description`
pub fn format_row_line(row: &Row) -> String {
    format!(
        "{:>3}  [{}] {:<7} {:<10} {:>8}  {}: {}",
        row_number(row.position),
        status_mark(row.is_completed()),
        row.priority.label(),
        row.date,
        row.time,
        row.topic,
        row.description
    )
}

/// Labelled fields for `show`
pub fn format_task_detail(position: usize, task: &Task) -> Vec<String> {
    vec![
        format!("Row:         {}", row_number(position)),
        format!("Topic:       {}", task.topic),
        format!("Description: {}", task.description),
        format!("Date:        {}", task.date),
        format!("Time:        {}", task.time),
        format!("Priority:    {}", task.priority),
        format!("Status:      {}", task.status_label()),
    ]
}
