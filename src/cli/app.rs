//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{done, list, show};
use crate::storage::{ChoreLog, Config, ParsedLog};

#[derive(Parser)]
#[command(name = "chores")]
#[command(author, version, about = "Track recurring household chores in a markdown log")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Chore log file (defaults to the configured file, then ./chores.md)
    #[arg(long, short = 'F', global = true, env = "CHORES_FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show chores grouped by urgency (default)
    Show {
        /// Reference day, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List all chores with their frequency and last completion
    List,

    /// Record a chore as done
    Done {
        /// Chore name (case-insensitive)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Completion day, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let format = cli.format.unwrap_or(config.default_format);
    let output = Output::new(format, cli.verbose);

    let log = ChoreLog::new(config.resolve_log_path(cli.file.as_deref()));
    output.verbose(&format!("Using chore log: {}", log.path().display()));

    let today = Local::now().date_naive();

    match cli.command.unwrap_or(Commands::Show { date: None }) {
        Commands::Show { date } => {
            let date = date.unwrap_or(today);
            output.verbose_ctx("show", &format!("Reference day: {}", date));
            show::run(&output, &log, date)?
        }
        Commands::List => list::run(&output, &log)?,
        Commands::Done { name, date } => {
            let name = name.join(" ");
            let date = date.unwrap_or(today);
            output.verbose_ctx("done", &format!("Marking {:?} done on {}", name, date));
            done::run(&output, &log, &name, date)?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Loads the log and reports parse warnings
pub(super) fn load_log(output: &Output, log: &ChoreLog) -> Result<ParsedLog> {
    let parsed = log.load()?;

    output.verbose_ctx(
        "parse",
        &format!(
            "Parsed {} chores, {} completions",
            parsed.chores.len(),
            parsed.completions.len()
        ),
    );

    for warning in &parsed.warnings {
        output.warning(warning);
    }

    Ok(parsed)
}
