use regex::Regex;

use crate::model::task::Task;

/// Whether `task` matches a lowercased query (topic or description substring)
fn matches_lowered(task: &Task, needle: &str) -> bool {
    task.topic.to_lowercase().contains(needle) || task.description.to_lowercase().contains(needle)
}

/// Positions of the tasks matching `query`, in order.
///
/// An empty query returns every position, so "clear search" is just a
/// filter with no text.
pub fn filter_positions(tasks: &[Task], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| matches_lowered(task, &needle))
        .map(|(i, _)| i)
        .collect()
}

/// Case-insensitive literal regex for highlighting the query inside cells.
/// `None` for an empty query.
pub fn highlight_regex(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(query))).ok()
}
