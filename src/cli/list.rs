//! `list` command: every chore with its frequency and last completion

use anyhow::Result;

use super::app::load_log;
use super::output::Output;
use crate::domain::{latest_completions, Chore, Completion};
use crate::storage::ChoreLog;

pub fn run(output: &Output, log: &ChoreLog) -> Result<()> {
    let parsed = load_log(output, log)?;
    let rows = rows(&parsed.chores, &parsed.completions);

    if output.is_json() {
        let items: Vec<_> = rows
            .iter()
            .map(|(chore, last)| {
                serde_json::json!({
                    "name": chore.name,
                    "frequency": chore.frequency.raw,
                    "frequency_days": chore.frequency_days(),
                    "duration_minutes": chore.duration.as_ref().map(|d| d.minutes),
                    "description": chore.description,
                    "last_done": last,
                })
            })
            .collect();
        output.data(&items);
    } else if rows.is_empty() {
        println!("No chores defined.");
    } else {
        for (chore, last) in &rows {
            println!("{}", format_row(chore, last.as_deref()));
        }
    }

    Ok(())
}

/// Chores sorted by name, paired with their last completion day
fn rows<'a>(chores: &'a [Chore], completions: &[Completion]) -> Vec<(&'a Chore, Option<String>)> {
    let latest = latest_completions(completions);

    let mut sorted: Vec<&Chore> = chores.iter().collect();
    sorted.sort_by_key(|c| c.key());

    sorted
        .into_iter()
        .map(|chore| {
            let last = latest
                .get(&chore.key())
                .map(|d| d.format("%Y-%m-%d").to_string());
            (chore, last)
        })
        .collect()
}

fn format_row(chore: &Chore, last: Option<&str>) -> String {
    let duration = chore
        .duration
        .as_ref()
        .map(|d| format!(" ~{}", d))
        .unwrap_or_default();

    format!(
        "{}\tevery {}{}\tLast: {}",
        chore.name,
        chore.frequency,
        duration,
        last.unwrap_or("never")
    )
}
