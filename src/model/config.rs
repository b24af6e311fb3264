use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// The task document. Relative paths resolve against the working directory.
    #[serde(default = "default_task_file")]
    pub file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            file: default_task_file(),
        }
    }
}

fn default_task_file() -> PathBuf {
    PathBuf::from("tasks.json")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// tracing filter directive, e.g. "warn" or "docket=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the TUI. The TUI does not log when this is unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot (e.g. `background = "#000000"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Ask before deleting a task in the TUI
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            colors: HashMap::new(),
            confirm_delete: true,
        }
    }
}

fn default_true() -> bool {
    true
}
