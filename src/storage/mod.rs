//! # Storage Layer
//!
//! Reading, parsing and appending to the chore log, plus user configuration.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Chores and completions | Markdown log | `chores.md` (or `--file`) |
//! | Config | TOML | `<config dir>/chores/config.toml` |
//!
//! ## Concurrency Safety
//!
//! - [`ChoreLog`] appends under an exclusive `fs2` lock
//! - Parsing is a pure function of the file content
//!
//! ## Key Types
//!
//! - [`ChoreLog`] - Read and append to the log file
//! - [`ParsedLog`] - Chores, completions and warnings from [`parse`]
//! - [`Config`] - User configuration

mod config;
mod log;
mod markdown;

pub use config::{Config, ConfigError, OutputFormat, DEFAULT_LOG_FILE};
pub use log::{completion_entry, ChoreLog};
pub use markdown::{parse, MalformedInput, MalformedKind, ParsedLog};
