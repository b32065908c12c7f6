//! Domain models for the chores CLI
//!
//! Contains the core business logic without any I/O concerns.

mod chore;
mod interval;
mod schedule;

pub use chore::{find_chore, Chore, Completion};
pub use interval::{format_minutes, Duration, DurationError, Frequency, FrequencyError};
pub use schedule::{
    calculate, days_between, latest_completions, sort_by_urgency, ChoreStatus, Overdue, Status,
    NEVER_DONE_SENTINEL, UPCOMING_WINDOW_DAYS,
};
