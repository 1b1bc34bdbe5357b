//! School Planner - personal school-task planner for the command line

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use school_planner::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("SCHOOL_PLANNER_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("school_planner=debug")
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "plan", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Add(args)) => cli::add::run(cli.file, args),
        Some(Commands::List(args)) => cli::list::run(cli.file, args),
        Some(Commands::Done(args)) => cli::done::run(cli.file, args),
        Some(Commands::Remove(args)) => cli::remove::run(cli.file, args),
        Some(Commands::Due(args)) => cli::due::run(cli.file, args),
        Some(Commands::Unlock(args)) => cli::unlock::run(args),
        None => cli::list::run(cli.file, cli::list::ListArgs::default()),
    }
}
