//! `plan done` command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::planner::store;

#[derive(Args)]
pub struct DoneArgs {
    /// Task to complete (id, id prefix, or exact title)
    task: String,
}

pub fn run(file: Option<PathBuf>, args: DoneArgs) -> Result<()> {
    let storage = super::open_storage(file)?;
    let mut tasks = storage.load()?;

    let id = super::resolve_task(&args.task, &tasks)?.id.clone();
    let title = store::mark_complete(&mut tasks, &id)?.title.clone();

    storage.save(&tasks)?;

    println!("✓ Completed: {}", title);
    Ok(())
}
