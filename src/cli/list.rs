//! `plan list` command implementation

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Args;
use serde::Serialize;

use crate::planner::{store, Task};

const TABLE_COL_TITLE: usize = 30;
const TABLE_COL_DUE: usize = 10;
const TABLE_COL_PRIORITY: usize = 8;
const TABLE_COL_ID_DISPLAY: usize = 8;

#[derive(Args, Default)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TaskJson<'a> {
    id: &'a str,
    title: &'a str,
    due_date: chrono::NaiveDate,
    priority: &'a str,
    completed: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

fn print_table_header() {
    println!(
        "  {:<width_title$} {:<width_due$} {:<width_priority$} ID",
        "TITLE",
        "DUE",
        "PRIORITY",
        width_title = TABLE_COL_TITLE,
        width_due = TABLE_COL_DUE,
        width_priority = TABLE_COL_PRIORITY
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_TITLE + TABLE_COL_DUE + TABLE_COL_PRIORITY + TABLE_COL_ID_DISPLAY + 5)
    );
}

fn print_table_row(task: &Task) {
    let mark = if task.completed { "✔" } else { "❗" };
    let title = super::truncate(&task.title, TABLE_COL_TITLE);
    let id_display = super::truncate_id(&task.id, TABLE_COL_ID_DISPLAY);
    println!(
        "{} {:<width_title$} {:<width_due$} {:<width_priority$} {}",
        mark,
        title,
        task.due_date.to_string(),
        task.priority.label(),
        id_display,
        width_title = TABLE_COL_TITLE,
        width_due = TABLE_COL_DUE,
        width_priority = TABLE_COL_PRIORITY
    );
}

pub fn run(file: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let storage = super::open_storage(file)?;
    let tasks = storage.load()?;

    if tasks.is_empty() {
        println!("No tasks yet.");
        println!("Add one with: plan add \"Essay\" --due 2025-05-01 --priority high");
        return Ok(());
    }

    let sorted = store::sorted_by_due_date(&tasks);

    if args.json {
        let out: Vec<TaskJson> = sorted
            .iter()
            .map(|t| TaskJson {
                id: &t.id,
                title: &t.title,
                due_date: t.due_date,
                priority: t.priority.label(),
                completed: t.completed,
                created_at: t.created_at,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_table_header();
    for task in &sorted {
        print_table_row(task);
    }
    println!("\nTotal: {} tasks", sorted.len());

    let due = store::due_or_overdue(&sorted, Local::now().date_naive());
    if !due.is_empty() {
        println!("⚠ {} due today or overdue", due.len());
    }

    Ok(())
}
