//! Worktrack - Main Entry Point
//!
//! Command line front end over the `worktrack` library: loads a plan file,
//! then prints summaries, todo views, or runs the recurrence check.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use worktrack::plan::load_plan;
use worktrack::report::{check_report, summary_lines, todo_lines};
use worktrack::{Calendar, FixedCalendar, Manager, SystemCalendar, TrackerConfig};

/// Worktrack - score tasks by urgency and keep recurring work on schedule
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the plan file (TOML)
    plan: PathBuf,

    /// Path to the config file (TOML); defaults apply when it does not exist
    #[arg(long, default_value = "worktrack.toml")]
    config: PathBuf,

    /// Evaluate as if today were this date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every project and task with its score and priority
    Summary,
    /// Print the todo list, the urgent tasks and their average duration
    Todo,
    /// Send due reminders and reschedule overdue recurring tasks
    Check,
}

fn init_tracing(config: &TrackerConfig, verbose: bool) {
    let default_filter = if verbose {
        "worktrack=debug".to_string()
    } else {
        config
            .log_filter
            .clone()
            .unwrap_or_else(|| "worktrack=info".to_string())
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_lines(lines: impl IntoIterator<Item = String>) {
    for line in lines {
        println!("{}", line);
    }
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    let config = TrackerConfig::load(&args.config)?;
    init_tracing(&config, args.verbose);

    let calendar: Box<dyn Calendar> = match args.today.or(config.today) {
        Some(today) => Box::new(FixedCalendar::new(today)),
        None => Box::new(SystemCalendar),
    };
    tracing::debug!(today = %calendar.today(), "calendar ready");

    let mut projects = load_plan(&args.plan)?;

    match args.command {
        Command::Summary => print_lines(summary_lines(&projects, calendar.as_ref())),
        Command::Todo => {
            let manager =
                Manager::new(projects.iter()).with_threshold(config.priority_threshold);
            print_lines(todo_lines(&manager, calendar.as_ref()));
        }
        Command::Check => {
            let report = check_report(&mut projects, calendar.as_ref());
            print_lines(report.lines);
            if let Some(e) = report.error {
                return Err(e).context("Recurrence check aborted");
            }
        }
    }
    Ok(())
}
