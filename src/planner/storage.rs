//! Task storage - JSON file persistence

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::error::Result;
use super::get_app_dir;
use super::task::Task;

/// Whole-file persistence for the task sequence.
///
/// The storage location is explicit; callers decide where the file lives.
pub struct Storage {
    tasks_path: PathBuf,
}

impl Storage {
    pub fn new(tasks_path: impl Into<PathBuf>) -> Self {
        Self {
            tasks_path: tasks_path.into(),
        }
    }

    /// Default location under the app directory
    pub fn default_path() -> Result<PathBuf> {
        Ok(get_app_dir()?.join("tasks.json"))
    }

    pub fn path(&self) -> &Path {
        &self.tasks_path
    }

    /// Load the task sequence. A missing or blank file is an empty planner;
    /// unparseable contents are an error.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.tasks_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.tasks_path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    /// Rewrite the whole task file. The previous contents are kept as a
    /// `.json.bak` sibling, and the new contents are written to a temporary
    /// file and renamed into place so a crash mid-write never leaves a torn
    /// file behind.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let dir = match self.tasks_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                parent
            }
            _ => Path::new("."),
        };

        if self.tasks_path.exists() {
            let backup_path = self.tasks_path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.tasks_path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let content = serde_json::to_string_pretty(tasks)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(&self.tasks_path).map_err(|e| e.error)?;
        Ok(())
    }
}
