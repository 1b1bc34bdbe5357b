//! CLI command implementations

pub mod add;
pub mod definition;
pub mod done;
pub mod due;
pub mod list;
pub mod remove;
pub mod unlock;

pub use definition::{Cli, Commands};

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::config::Config;
use crate::planner::{Storage, Task};

/// Resolve a task reference: exact id, then id prefix, then exact title
pub fn resolve_task<'a>(identifier: &str, tasks: &'a [Task]) -> Result<&'a Task> {
    if let Some(task) = tasks.iter().find(|t| t.id == identifier) {
        return Ok(task);
    }

    if let Some(task) = tasks.iter().find(|t| t.id.starts_with(identifier)) {
        return Ok(task);
    }

    if let Some(task) = tasks.iter().find(|t| t.title == identifier) {
        return Ok(task);
    }

    bail!("Task not found: {}", identifier)
}

/// Pick the task file: `--file` flag, then config.toml, then the app dir
pub fn open_storage(file: Option<PathBuf>) -> Result<Storage> {
    let path = match file {
        Some(path) => path,
        None => match Config::load()?.tasks_file_path() {
            Some(path) => path,
            None => Storage::default_path()?,
        },
    };
    Ok(Storage::new(path))
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else if max <= 3 {
        s[..max].to_string()
    } else {
        format!("{}...", &s[..max - 3])
    }
}

pub fn truncate_id(id: &str, max_len: usize) -> &str {
    if id.len() > max_len {
        &id[..max_len]
    } else {
        id
    }
}
