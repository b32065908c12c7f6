//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `show` (default) | Chores grouped into overdue, due today, upcoming, clear |
//! | `list` | Every chore with frequency and last completion |
//! | `done <name>` | Append a completion entry for today (or `--date`) |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! chores --verbose show
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod done;
mod list;
mod output;
mod show;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
