//! Top-level CLI definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::add::AddArgs;
use super::done::DoneArgs;
use super::due::DueArgs;
use super::list::ListArgs;
use super::remove::RemoveArgs;
use super::unlock::UnlockArgs;

#[derive(Parser)]
#[command(name = "plan", version, about = "Personal school-task planner")]
pub struct Cli {
    /// Task file to use (defaults to the configured or app-dir location)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// List tasks sorted by due date (default)
    #[command(alias = "ls")]
    List(ListArgs),

    /// Mark a task as completed
    Done(DoneArgs),

    /// Remove a completed task
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Show tasks due today or overdue
    Due(DueArgs),

    /// Authenticate and open the reward
    Unlock(UnlockArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
