//! `plan remove` command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::planner::store;

#[derive(Args)]
pub struct RemoveArgs {
    /// Task to remove (id, id prefix, or exact title)
    task: String,
}

pub fn run(file: Option<PathBuf>, args: RemoveArgs) -> Result<()> {
    let storage = super::open_storage(file)?;
    let mut tasks = storage.load()?;

    let id = super::resolve_task(&args.task, &tasks)?.id.clone();
    let removed = store::remove_completed(&mut tasks, &id)?;

    storage.save(&tasks)?;

    println!("🗑 Removed: {}", removed.title);
    Ok(())
}
