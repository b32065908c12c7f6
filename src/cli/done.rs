//! `done` command: append a completion entry to the log

use anyhow::{bail, Result};
use chrono::NaiveDate;

use super::app::load_log;
use super::output::Output;
use crate::domain::find_chore;
use crate::storage::ChoreLog;

pub fn run(output: &Output, log: &ChoreLog, name: &str, date: NaiveDate) -> Result<()> {
    let parsed = load_log(output, log)?;

    let Some(chore) = find_chore(&parsed.chores, name) else {
        bail!("chore not found: \"{}\"", name.trim());
    };

    output.verbose_ctx(
        "done",
        &format!("Matched {:?} (line {})", chore.name, chore.line),
    );

    // Always write the canonical name so later matching stays exact
    log.append_completion(&chore.name, date)?;

    output.success(&format!("Done: \"{}\" ({})", chore.name, date.format("%Y-%m-%d")));

    Ok(())
}
