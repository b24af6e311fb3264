use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::model::task::Task;

/// Failure reading the task document at startup
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Read { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Failure writing the task document
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

/// Read the whole task document.
///
/// A missing file is an empty list, not an error.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, LoadError> {
    if !path.exists() {
        debug!(path = %path.display(), "no task document yet");
        return Ok(Vec::new());
    }
    let bytes = fs::read(path).map_err(|e| LoadError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    // Invalid UTF-8 surfaces here as a parse error, like any other bad content
    let tasks: Vec<Task> = serde_json::from_slice(&bytes).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

/// Serialize the full collection and replace the document.
///
/// The new content goes to a temp file beside the target and is renamed over
/// it, so readers see either the old document or the new one.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), SaveError> {
    let content = to_document(tasks)?;
    let write_err = |e: io::Error| SaveError::Write {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(write_err)?;
    }
    if let Err(e) = atomic_write(path, &content) {
        warn!(path = %path.display(), error = %e, "task write failed");
        return Err(write_err(e));
    }
    debug!(path = %path.display(), count = tasks.len(), "saved tasks");
    Ok(())
}

/// Copy an unreadable document aside to `<file>.corrupt` so that the next
/// save does not destroy the only copy. Earlier backups are never replaced:
/// later ones get `.corrupt.1`, `.corrupt.2`, ... Returns the backup path.
pub fn preserve_unreadable(path: &Path) -> io::Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup)?;
    warn!(
        path = %path.display(),
        backup = %backup.display(),
        "kept a copy of the unreadable task document"
    );
    Ok(backup)
}

fn backup_path(path: &Path) -> PathBuf {
    let mut base = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "tasks.json".into());
    base.push(".corrupt");
    let first = path.with_file_name(&base);
    if !first.exists() {
        return first;
    }
    (1u32..)
        .map(|n| {
            let mut name = base.clone();
            name.push(format!(".{}", n));
            path.with_file_name(name)
        })
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}

/// Pretty JSON with 4-space indentation and a trailing newline
fn to_document(tasks: &[Task]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tasks.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
