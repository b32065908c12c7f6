//! Urgency scheduling
//!
//! Combines chores with their completions and a reference day to decide
//! whether each chore is overdue, due today, upcoming or clear, and orders
//! the result from most to least urgent.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;

use super::chore::{Chore, Completion};

/// Numeric stand-in for "never completed" when a day count is required
pub const NEVER_DONE_SENTINEL: i64 = 999_999;

/// Chores due within this many days are upcoming rather than clear
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// How far past due an overdue chore is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overdue {
    /// Overdue by this many days
    By(i64),
    /// Never completed
    NeverDone,
}

/// Urgency classification of a chore
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Overdue(Overdue),
    DueToday,
    Upcoming { days_until: i64 },
    Clear { days_until: i64 },
}

impl Status {
    /// Sort rank, lower is more urgent
    pub fn rank(&self) -> u8 {
        match self {
            Status::Overdue(_) => 0,
            Status::DueToday => 1,
            Status::Upcoming { .. } => 2,
            Status::Clear { .. } => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Overdue(_) => "overdue",
            Status::DueToday => "due_today",
            Status::Upcoming { .. } => "upcoming",
            Status::Clear { .. } => "clear",
        }
    }
}

/// Scheduling result for one chore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoreStatus<'a> {
    pub chore: &'a Chore,
    pub status: Status,
    pub last_done: Option<NaiveDate>,
}

impl ChoreStatus<'_> {
    /// Days overdue; the sentinel for never-completed chores; `None` if not overdue
    pub fn days_overdue(&self) -> Option<i64> {
        match self.status {
            Status::Overdue(Overdue::By(days)) => Some(days),
            Status::Overdue(Overdue::NeverDone) => Some(NEVER_DONE_SENTINEL),
            _ => None,
        }
    }

    /// Days until due, only for upcoming and clear chores
    pub fn days_until(&self) -> Option<i64> {
        match self.status {
            Status::Upcoming { days_until } | Status::Clear { days_until } => Some(days_until),
            _ => None,
        }
    }

    pub fn is_never_done(&self) -> bool {
        matches!(self.status, Status::Overdue(Overdue::NeverDone))
    }
}

/// Whole calendar days from `from` to `to` (negative if `to` is earlier)
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Maps lower-cased chore names to their latest completion date
pub fn latest_completions(completions: &[Completion]) -> HashMap<String, NaiveDate> {
    let mut latest: HashMap<String, NaiveDate> = HashMap::new();

    for completion in completions {
        latest
            .entry(completion.key())
            .and_modify(|date| *date = (*date).max(completion.date))
            .or_insert(completion.date);
    }

    latest
}

fn classify(frequency_days: i64, last_done: Option<NaiveDate>, today: NaiveDate) -> Status {
    let Some(last_done) = last_done else {
        return Status::Overdue(Overdue::NeverDone);
    };

    let days_since = days_between(last_done, today);

    match days_since.cmp(&frequency_days) {
        Ordering::Greater => Status::Overdue(Overdue::By(days_since - frequency_days)),
        Ordering::Equal => Status::DueToday,
        Ordering::Less => {
            let days_until = frequency_days - days_since;
            if days_until <= UPCOMING_WINDOW_DAYS {
                Status::Upcoming { days_until }
            } else {
                Status::Clear { days_until }
            }
        }
    }
}

/// Computes the status of every chore, in input order
pub fn calculate<'a>(
    chores: &'a [Chore],
    completions: &[Completion],
    today: NaiveDate,
) -> Vec<ChoreStatus<'a>> {
    let latest = latest_completions(completions);

    chores
        .iter()
        .map(|chore| {
            let last_done = latest.get(&chore.key()).copied();
            ChoreStatus {
                chore,
                status: classify(i64::from(chore.frequency_days()), last_done, today),
                last_done,
            }
        })
        .collect()
}

fn compare_urgency(a: &ChoreStatus<'_>, b: &ChoreStatus<'_>) -> Ordering {
    let by_kind = match (a.status, b.status) {
        (Status::Overdue(x), Status::Overdue(y)) => match (x, y) {
            (Overdue::By(x), Overdue::By(y)) => y.cmp(&x),
            (Overdue::By(_), Overdue::NeverDone) => Ordering::Less,
            (Overdue::NeverDone, Overdue::By(_)) => Ordering::Greater,
            (Overdue::NeverDone, Overdue::NeverDone) => Ordering::Equal,
        },
        (Status::Upcoming { days_until: x }, Status::Upcoming { days_until: y })
        | (Status::Clear { days_until: x }, Status::Clear { days_until: y }) => x.cmp(&y),
        (x, y) => x.rank().cmp(&y.rank()),
    };

    by_kind.then_with(|| a.chore.key().cmp(&b.chore.key()))
}

/// Stable sort from most to least urgent
///
/// Overdue chores with a known day count come first (most overdue leading),
/// then never-completed ones, then due today, upcoming and clear by days
/// remaining. Ties fall back to case-insensitive name.
pub fn sort_by_urgency(statuses: &mut [ChoreStatus<'_>]) {
    statuses.sort_by(compare_urgency);
}
