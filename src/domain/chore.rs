//! Chore domain model
//!
//! Chores are recurring tasks defined in the log; completions are dated
//! records saying a chore was done on a given day.

use chrono::NaiveDate;

use super::interval::{Duration, Frequency};

/// A recurring chore definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chore {
    /// Display name, case preserved
    pub name: String,

    /// How often the chore recurs
    pub frequency: Frequency,

    /// Optional effort estimate
    pub duration: Option<Duration>,

    /// Free-text description (may be empty)
    pub description: String,

    /// 1-based line of the `##` header
    pub line: usize,
}

impl Chore {
    /// Recurrence interval in days
    pub fn frequency_days(&self) -> u32 {
        self.frequency.days
    }

    /// Estimated minutes, 0 when unspecified
    pub fn duration_minutes(&self) -> u32 {
        self.duration.as_ref().map_or(0, |d| d.minutes)
    }

    /// Lower-cased name used for uniqueness and completion matching
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Case-insensitive name comparison
    pub fn matches(&self, name: &str) -> bool {
        self.key() == name.trim().to_lowercase()
    }
}

/// A dated completion entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub date: NaiveDate,

    /// Name exactly as written in the log (not validated)
    pub chore_name: String,

    pub line: usize,
}

impl Completion {
    pub fn key(&self) -> String {
        self.chore_name.to_lowercase()
    }
}

/// Finds a chore by case-insensitive name
pub fn find_chore<'a>(chores: &'a [Chore], name: &str) -> Option<&'a Chore> {
    chores.iter().find(|c| c.matches(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chore(name: &str) -> Chore {
        Chore {
            name: name.to_string(),
            frequency: "1w".parse().unwrap(),
            duration: None,
            description: String::new(),
            line: 1,
        }
    }

    #[test]
    fn matches_ignores_case_and_padding() {
        let c = chore("Kitchen Clean");
        assert!(c.matches("kitchen clean"));
        assert!(c.matches("  KITCHEN CLEAN "));
        assert!(!c.matches("Kitchen"));
    }

    #[test]
    fn find_returns_canonical_chore() {
        let chores = vec![chore("Laundry"), chore("Kitchen Clean")];
        let found = find_chore(&chores, "kitchen CLEAN").unwrap();
        assert_eq!(found.name, "Kitchen Clean");
        assert!(find_chore(&chores, "Garage").is_none());
    }

    #[test]
    fn duration_minutes_defaults_to_zero() {
        let mut c = chore("Laundry");
        assert_eq!(c.duration_minutes(), 0);

        c.duration = Some("1h30m".parse().unwrap());
        assert_eq!(c.duration_minutes(), 90);
        assert_eq!(c.frequency_days(), 7);
    }
}
