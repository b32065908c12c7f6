//! Chore log file access
//!
//! The log is read whole and only ever appended to. Appends take an
//! exclusive lock so two `done` invocations cannot interleave.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use fs2::FileExt;

use super::markdown::{self, ParsedLog};

/// Builds the line appended for a completion
///
/// Adds a leading newline when `existing` does not already end in one.
pub fn completion_entry(existing: &str, chore_name: &str, date: NaiveDate) -> String {
    let entry = format!("{} {}\n", date.format("%Y-%m-%d"), chore_name);

    if !existing.is_empty() && !existing.ends_with('\n') {
        format!("\n{}", entry)
    } else {
        entry
    }
}

/// A chore log on disk
pub struct ChoreLog {
    path: PathBuf,
}

impl ChoreLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the rest of an open log through that same handle
    fn read_from(&self, mut file: &File) -> Result<String> {
        let mut content = String::new();
        file.read_to_string(&mut content)
            .with_context(|| format!("Failed to read chore log: {}", self.path.display()))?;
        Ok(content)
    }

    /// Reads the whole log under a shared lock
    pub fn read_to_string(&self) -> Result<String> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to read chore log: {}", self.path.display()))?;

        // Acquire shared lock for reading
        file.lock_shared()
            .context("Failed to acquire read lock on chore log")?;

        // Lock is released when file is dropped
        self.read_from(&file)
    }

    /// Reads and parses the log
    pub fn load(&self) -> Result<ParsedLog> {
        let content = self.read_to_string()?;
        markdown::parse(&content)
            .with_context(|| format!("Failed to parse chore log: {}", self.path.display()))
    }

    /// Appends `YYYY-MM-DD <name>` to the log
    pub fn append_completion(&self, chore_name: &str, date: NaiveDate) -> Result<()> {
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open chore log: {}", self.path.display()))?;

        file.lock_exclusive()
            .context("Failed to acquire write lock on chore log")?;

        // Read through the locked handle so the trailing-newline check sees the final content
        let existing = self.read_from(&file)?;
        let entry = completion_entry(&existing, chore_name, date);

        (&file)
            .write_all(entry.as_bytes())
            .context("Failed to write completion")?;

        // Lock is released when file is dropped
        Ok(())
    }
}
