//! `show` command: chores grouped by urgency

use std::fmt::Write;

use anyhow::Result;
use chrono::NaiveDate;

use super::app::load_log;
use super::output::Output;
use crate::domain::{calculate, format_minutes, sort_by_urgency, ChoreStatus, Status};
use crate::storage::ChoreLog;

pub fn run(output: &Output, log: &ChoreLog, today: NaiveDate) -> Result<()> {
    let parsed = load_log(output, log)?;

    let mut statuses = calculate(&parsed.chores, &parsed.completions, today);
    sort_by_urgency(&mut statuses);

    if output.is_json() {
        let items: Vec<_> = statuses
            .iter()
            .map(|s| {
                serde_json::json!({
                    "name": s.chore.name,
                    "status": s.status.label(),
                    "days_overdue": s.days_overdue(),
                    "days_until": s.days_until(),
                    "never_done": s.is_never_done(),
                    "last_done": s.last_done.map(|d| d.format("%Y-%m-%d").to_string()),
                    "frequency": s.chore.frequency.raw,
                    "frequency_days": s.chore.frequency_days(),
                    "duration_minutes": s.chore.duration.as_ref().map(|d| d.minutes),
                })
            })
            .collect();
        output.data(&items);
    } else if statuses.is_empty() {
        println!("No chores defined.");
    } else {
        print!("{}", render(&statuses));
    }

    Ok(())
}

fn last_line(status: &ChoreStatus<'_>) -> String {
    match status.last_done {
        Some(date) => format!("    Last: {}", date.format("%Y-%m-%d")),
        None => "    Last: never".to_string(),
    }
}

fn detail(status: &ChoreStatus<'_>) -> String {
    match status.status {
        Status::Overdue(_) if status.is_never_done() => "(never done)".to_string(),
        Status::Overdue(_) => format!("({} days overdue)", status.days_overdue().unwrap_or(0)),
        Status::DueToday => String::new(),
        Status::Upcoming { days_until: 1 } => "(due in 1 day)".to_string(),
        Status::Upcoming { days_until } | Status::Clear { days_until } => {
            format!("(due in {} days)", days_until)
        }
    }
}

/// Renders the grouped text view; sections are skipped when empty
fn render(statuses: &[ChoreStatus<'_>]) -> String {
    const SECTIONS: [(u8, &str); 4] = [
        (0, "OVERDUE"),
        (1, "DUE TODAY"),
        (2, "UPCOMING (7 days)"),
        (3, "ALL CLEAR"),
    ];

    let mut out = String::new();

    for (rank, title) in SECTIONS {
        let group: Vec<_> = statuses.iter().filter(|s| s.status.rank() == rank).collect();
        if group.is_empty() {
            continue;
        }

        let _ = writeln!(out, "{}", title);
        let mut total_minutes = 0i64;

        for status in group {
            let mut line = format!("  {}", status.chore.name);
            if let Some(duration) = &status.chore.duration {
                total_minutes += i64::from(duration.minutes);
                let _ = write!(line, " (~{})", duration);
            }
            let suffix = detail(status);
            if !suffix.is_empty() {
                let _ = write!(line, " {}", suffix);
            }

            let _ = writeln!(out, "{}", line);
            let _ = writeln!(out, "{}", last_line(status));
        }

        if total_minutes > 0 {
            let _ = writeln!(out, "  Total: {}", format_minutes(total_minutes));
        }
        out.push('\n');
    }

    out
}
