use std::fs::{self, OpenOptions};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Mutex;

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Error type for logging setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("invalid log filter '{directive}': {source}")]
    Filter {
        directive: String,
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("could not open log file {path}: {source}")]
    File {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

/// Filter level for CLI runs: `-v` raises the configured level, `RUST_LOG` overrides both.
pub fn cli_level(configured: &str, verbose: u8) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn env_filter(level: &str) -> Result<EnvFilter, LogError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).map_err(|e| LogError::Filter {
            directive: level.to_string(),
            source: e,
        }),
    }
}

/// Log to stderr (CLI runs).
pub fn init_stderr(level: &str) -> Result<(), LogError> {
    let filter = env_filter(level)?;
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}

/// Append to a log file (TUI runs, where stderr belongs to the terminal).
pub fn init_file(level: &str, path: &Path) -> Result<(), LogError> {
    let filter = env_filter(level)?;
    let file_err = |e| LogError::File {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(file_err)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(file_err)?;
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    if let Err(err) = result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}
