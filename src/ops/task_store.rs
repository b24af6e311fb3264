use std::fmt;

use tracing::info;

use crate::model::task::{Field, Priority, Task, TaskFields};
use crate::ops::search;

/// In-memory identity of a task for the lifetime of the process.
///
/// Not persisted. Survives updates and deletions of other tasks, unlike a
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Required fields missing or invalid; nothing was changed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe_validation(.missing, .invalid))]
pub struct ValidationError {
    pub missing: Vec<Field>,
    /// Fields with a value that is not allowed, and that value
    pub invalid: Vec<(Field, String)>,
}

fn describe_validation(missing: &[Field], invalid: &[(Field, String)]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
        parts.push(format!("required: {}", names.join(", ")));
    }
    for (field, value) in invalid {
        match field {
            Field::Priority => parts.push(format!(
                "invalid priority '{}' (expected High, Medium, or Low)",
                value
            )),
            other => parts.push(format!("invalid {} '{}'", other, value)),
        }
    }
    parts.join("; ")
}

/// Position outside the current bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no task at position {position} (store has {len})")]
pub struct RangeError {
    pub position: usize,
    pub len: usize,
}

/// Error type for `TaskStore::update`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Check the form fields and build the stored record (not yet completed).
pub fn validate(fields: &TaskFields) -> Result<Task, ValidationError> {
    let mut missing = Vec::new();
    let mut invalid = Vec::new();

    let topic = fields.topic.trim();
    let description = fields.description.trim();
    let date = fields.date.trim();
    let priority_text = fields.priority.trim();

    if topic.is_empty() {
        missing.push(Field::Topic);
    }
    if description.is_empty() {
        missing.push(Field::Description);
    }
    if date.is_empty() {
        missing.push(Field::Date);
    }
    let priority = if priority_text.is_empty() {
        missing.push(Field::Priority);
        None
    } else {
        let parsed = Priority::parse_label(priority_text);
        if parsed.is_none() {
            invalid.push((Field::Priority, priority_text.to_string()));
        }
        parsed
    };

    match priority {
        Some(priority) if missing.is_empty() && invalid.is_empty() => Ok(Task {
            topic: topic.to_string(),
            description: description.to_string(),
            date: date.to_string(),
            time: fields.time.to_string(),
            priority,
            completed: false,
        }),
        _ => Err(ValidationError { missing, invalid }),
    }
}

/// The ordered task collection.
///
/// Every operation addresses a task by position. A position is only valid
/// until the next create or delete; hold a `TaskId` across mutations and
/// resolve it with `position_of`.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    /// Parallel to `tasks`
    ids: Vec<TaskId>,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from loaded tasks, assigning fresh ids in order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut store = TaskStore::new();
        for task in tasks {
            store.push(task);
        }
        store
    }

    fn push(&mut self, task: Task) -> usize {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(task);
        self.ids.push(id);
        self.tasks.len() - 1
    }

    fn check(&self, position: usize) -> Result<(), RangeError> {
        if position < self.tasks.len() {
            Ok(())
        } else {
            Err(RangeError {
                position,
                len: self.tasks.len(),
            })
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in order, as written to the document
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, position: usize) -> Option<&Task> {
        self.tasks.get(position)
    }

    pub fn id_at(&self, position: usize) -> Option<TaskId> {
        self.ids.get(position).copied()
    }

    /// Current position of a task, or `None` once it has been deleted
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.ids.iter().position(|&i| i == id)
    }

    /// `(position, id, task)` in store order
    pub fn iter(&self) -> impl Iterator<Item = (usize, TaskId, &Task)> {
        self.ids
            .iter()
            .zip(self.tasks.iter())
            .enumerate()
            .map(|(pos, (&id, task))| (pos, id, task))
    }

    /// Append a new pending task. Returns its position.
    pub fn create(&mut self, fields: &TaskFields) -> Result<usize, ValidationError> {
        let task = validate(fields)?;
        let position = self.push(task);
        info!(position, topic = %self.tasks[position].topic, "created task");
        Ok(position)
    }

    /// Replace the task at `position` with new field values, keeping its
    /// completion state and id.
    pub fn update(&mut self, position: usize, fields: &TaskFields) -> Result<(), StoreError> {
        self.check(position)?;
        let mut task = validate(fields)?;
        task.completed = self.tasks[position].completed;
        self.tasks[position] = task;
        info!(position, "updated task");
        Ok(())
    }

    /// Remove the task at `position`; later tasks shift down by one.
    pub fn delete(&mut self, position: usize) -> Result<Task, RangeError> {
        self.check(position)?;
        self.ids.remove(position);
        let task = self.tasks.remove(position);
        info!(position, topic = %task.topic, "deleted task");
        Ok(task)
    }

    /// Flip the completion flag. Returns the new value.
    pub fn toggle_completed(&mut self, position: usize) -> Result<bool, RangeError> {
        self.check(position)?;
        let task = &mut self.tasks[position];
        task.completed = !task.completed;
        info!(position, completed = task.completed, "toggled task");
        Ok(task.completed)
    }

    /// Positions matching `query` (see `search::filter_positions`)
    pub fn filter(&self, query: &str) -> Vec<usize> {
        search::filter_positions(&self.tasks, query)
    }
}
