//! Display rows derived from the task store.
//!
//! Rows are rebuilt from scratch after every mutation or filter change and
//! never cached; each row carries the position and id of its task so the
//! caller can route a later mutation back to it.

use tracing::debug;

use crate::model::task::{ClockTime, Priority, TaskFields};
use crate::ops::task_store::{TaskId, TaskStore};

/// Completion status shown in the status column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Complete,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Complete => "Complete",
        }
    }
}

/// Presentation hint attached to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    /// Struck through and dimmed
    Completed,
    /// Priority-tier highlight
    Priority(Priority),
}

impl StyleTag {
    pub fn name(self) -> &'static str {
        match self {
            StyleTag::Completed => "completed",
            StyleTag::Priority(Priority::High) => "priority_high",
            StyleTag::Priority(Priority::Medium) => "priority_medium",
            StyleTag::Priority(Priority::Low) => "priority_low",
        }
    }
}

/// One displayed task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Position in the store at the time the row was built
    pub position: usize,
    pub id: TaskId,
    pub topic: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub priority: Priority,
    pub status: Status,
    pub tags: Vec<StyleTag>,
}

impl Row {
    pub fn is_completed(&self) -> bool {
        self.status == Status::Complete
    }
}

/// Rows for the store in native order, restricted to `active_filter`'s
/// positions when a filter is active.
pub fn rows_for(store: &TaskStore, active_filter: Option<&[usize]>) -> Vec<Row> {
    let rows: Vec<Row> = store
        .iter()
        .filter(|(pos, _, _)| active_filter.is_none_or(|keep| keep.contains(pos)))
        .map(|(position, id, task)| {
            let status = if task.completed {
                Status::Complete
            } else {
                Status::Pending
            };
            let mut tags = Vec::with_capacity(2);
            if task.completed {
                tags.push(StyleTag::Completed);
            }
            tags.push(StyleTag::Priority(task.priority));
            Row {
                position,
                id,
                topic: task.topic.clone(),
                description: task.description.clone(),
                date: task.date.clone(),
                time: task.time.clone(),
                priority: task.priority,
                status,
                tags,
            }
        })
        .collect();
    debug!(
        total = store.len(),
        shown = rows.len(),
        filtered = active_filter.is_some(),
        "built rows"
    );
    rows
}

/// Form values for the task at `position`, or `None` if it no longer exists.
///
/// A stored time that is not `H:MM AM|PM` comes back as 12:00 PM.
pub fn field_snapshot_for(store: &TaskStore, position: usize) -> Option<TaskFields> {
    let task = store.get(position)?;
    Some(TaskFields {
        topic: task.topic.clone(),
        description: task.description.clone(),
        date: task.date.clone(),
        time: task.time.parse::<ClockTime>().unwrap_or_default(),
        priority: task.priority.label().to_string(),
    })
}
