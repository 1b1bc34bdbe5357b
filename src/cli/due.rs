//! `plan due` command implementation

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::Config;
use crate::notify;
use crate::planner::store;

#[derive(Args)]
pub struct DueArgs {
    /// Send a desktop notification listing the due tasks
    #[arg(long)]
    notify: bool,

    /// Check against this date instead of today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    date: Option<String>,
}

pub fn run(file: Option<PathBuf>, args: DueArgs) -> Result<()> {
    let today = match &args.date {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => bail!("Invalid date '{}': expected YYYY-MM-DD", raw),
        },
        None => Local::now().date_naive(),
    };

    let storage = super::open_storage(file)?;
    let tasks = storage.load()?;
    let due = store::due_or_overdue(&tasks, today);

    if due.is_empty() {
        println!("Nothing due on or before {}.", today);
        return Ok(());
    }

    println!("Tasks due ({}):\n", due.len());
    for task in &due {
        println!(
            "❗ {} (due: {}, priority: {})",
            task.title, task.due_date, task.priority
        );
    }

    if args.notify {
        let config = Config::load()?;
        if config.notifications.enabled {
            let titles: Vec<&str> = due.iter().map(|t| t.title.as_str()).collect();
            notify::send(
                "📚 Tasks Due!",
                &format!("You have tasks due:\n{}", titles.join("\n")),
            );
        }
    }

    Ok(())
}
