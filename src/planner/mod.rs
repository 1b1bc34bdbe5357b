//! Planner core
//!
//! This module owns the task sequence and everything that happens to it:
//! - Task model (stable ids, validated due dates, closed priority set)
//! - Pure sequence operations (add, complete, remove, sort, due queries)
//! - Whole-file JSON persistence with backup and atomic replace

pub mod error;
pub mod storage;
pub mod store;
pub mod task;

pub use error::{PlannerError, Result};
pub use storage::Storage;
pub use store::NewTask;
pub use task::{Priority, Task};

use std::path::PathBuf;

/// Directory for app data and config:
///   - Linux: ~/.config/school-planner/
///   - macOS: ~/Library/Application Support/school-planner/
pub fn get_app_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or(PlannerError::NoConfigDir)?
        .join("school-planner");

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}
