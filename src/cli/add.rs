//! `plan add` command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::planner::{store, NewTask};

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    title: String,

    /// Due date (YYYY-MM-DD)
    #[arg(short, long)]
    due: String,

    /// Priority (high, medium, low)
    #[arg(short, long)]
    priority: String,
}

pub fn run(file: Option<PathBuf>, args: AddArgs) -> Result<()> {
    let storage = super::open_storage(file)?;
    let mut tasks = storage.load()?;

    let task = store::add(
        &mut tasks,
        NewTask {
            title: args.title,
            due_date: args.due,
            priority: args.priority,
        },
    )?
    .clone();

    storage.save(&tasks)?;

    println!("✓ Added task: {}", task.title);
    println!("  Due:      {}", task.due_date);
    println!("  Priority: {}", task.priority);
    println!("  ID:       {}", task.id);

    Ok(())
}
