//! The boundary the TUI and CLI call: load once, then apply mutations that
//! are each followed by a full write of the task document.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::io::store_io::{self, LoadError, SaveError};
use crate::model::task::{Task, TaskFields};
use crate::ops::task_store::{RangeError, StoreError, TaskStore, ValidationError};
use crate::ops::view::{self, Row};

/// The kind of a mutation, for messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    Toggle,
}

impl MutationKind {
    pub fn verb(self) -> &'static str {
        match self {
            MutationKind::Create => "add",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
            MutationKind::Toggle => "mark as complete",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// The operation needs a selected task and none was given
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("select a task to {action} first")]
pub struct SelectionError {
    pub action: MutationKind,
}

/// A requested change to the task list.
///
/// Targets are positions resolved by the caller immediately before building
/// the mutation; `None` means nothing is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create(TaskFields),
    Update {
        target: Option<usize>,
        fields: TaskFields,
    },
    Delete {
        target: Option<usize>,
    },
    Toggle {
        target: Option<usize>,
    },
}

impl Mutation {
    pub fn kind(&self) -> MutationKind {
        match self {
            Mutation::Create(_) => MutationKind::Create,
            Mutation::Update { .. } => MutationKind::Update,
            Mutation::Delete { .. } => MutationKind::Delete,
            Mutation::Toggle { .. } => MutationKind::Toggle,
        }
    }
}

/// A mutation that was rejected before anything changed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MutationError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Range(#[from] RangeError),
}

impl From<StoreError> for MutationError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Range(e) => MutationError::Range(e),
            StoreError::Validation(e) => MutationError::Validation(e),
        }
    }
}

/// What an applied mutation did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Created { position: usize },
    Updated { position: usize },
    Deleted { task: Task },
    Toggled { position: usize, completed: bool },
}

/// An applied mutation and the outcome of the write that followed it.
///
/// A failed write does not undo the mutation: memory and disk differ until
/// the next successful save. Nothing retries the write on its own.
#[derive(Debug)]
pub struct Applied {
    pub effect: Effect,
    pub save_error: Option<SaveError>,
}

/// The task store bound to its document
#[derive(Debug)]
pub struct Session {
    store: TaskStore,
    path: PathBuf,
}

impl Session {
    /// Load the document and build the store.
    ///
    /// A load failure is returned alongside an empty session rather than
    /// instead of one. An unparsable document is copied to `<file>.corrupt`
    /// first, since the next save replaces it.
    pub fn initialize(path: &Path) -> (Session, Option<LoadError>) {
        let (tasks, load_error) = match store_io::load_tasks(path) {
            Ok(tasks) => (tasks, None),
            Err(e) => {
                warn!(error = %e, "starting with an empty task list");
                if matches!(e, LoadError::Parse { .. })
                    && let Err(copy_err) = store_io::preserve_unreadable(path)
                {
                    warn!(error = %copy_err, "could not keep a copy of the unreadable document");
                }
                (Vec::new(), Some(e))
            }
        };
        let session = Session {
            store: TaskStore::from_tasks(tasks),
            path: path.to_path_buf(),
        };
        (session, load_error)
    }

    /// A session over an existing store, without touching the disk
    pub fn with_store(store: TaskStore, path: &Path) -> Session {
        Session {
            store,
            path: path.to_path_buf(),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate and apply one mutation, then write the document.
    pub fn apply_mutation(&mut self, mutation: Mutation) -> Result<Applied, MutationError> {
        let kind = mutation.kind();
        let effect = match mutation {
            Mutation::Create(fields) => Effect::Created {
                position: self.store.create(&fields)?,
            },
            Mutation::Update { target, fields } => {
                let position = target.ok_or(SelectionError { action: kind })?;
                self.store.update(position, &fields)?;
                Effect::Updated { position }
            }
            Mutation::Delete { target } => {
                let position = target.ok_or(SelectionError { action: kind })?;
                Effect::Deleted {
                    task: self.store.delete(position)?,
                }
            }
            Mutation::Toggle { target } => {
                let position = target.ok_or(SelectionError { action: kind })?;
                Effect::Toggled {
                    position,
                    completed: self.store.toggle_completed(position)?,
                }
            }
        };
        let save_error = self.save().err();
        info!(?kind, saved = save_error.is_none(), "applied mutation");
        Ok(Applied { effect, save_error })
    }

    /// Write the current tasks to the document.
    pub fn save(&self) -> Result<(), SaveError> {
        store_io::save_tasks(&self.path, self.store.tasks())
    }

    /// Rows for `filter_text`; the empty string shows everything.
    pub fn query_view(&self, filter_text: &str) -> Vec<Row> {
        if filter_text.is_empty() {
            view::rows_for(&self.store, None)
        } else {
            let positions = self.store.filter(filter_text);
            view::rows_for(&self.store, Some(&positions))
        }
    }

    /// Form values for the task at `position`
    pub fn field_snapshot(&self, position: usize) -> Option<TaskFields> {
        view::field_snapshot_for(&self.store, position)
    }
}
