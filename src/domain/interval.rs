//! Frequency and duration tokens
//!
//! Frequencies are written as `<n><unit>` where the unit is one of
//! `d`, `w`, `m`, `y` (1, 7, 30 and 365 days).
//! Durations are written as `XhYm`, `Xh` or `Xm`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FrequencyError {
    #[error("invalid frequency format: \"{0}\" (expected format like 1d, 2w, 1m, 1y)")]
    InvalidFormat(String),

    #[error("frequency must be positive, got: {0}")]
    NotPositive(i64),
}

#[derive(Debug, Error, PartialEq)]
pub enum DurationError {
    #[error("invalid duration format: \"{0}\" (expected format like 30m, 2h, 1h30m)")]
    InvalidFormat(String),

    #[error("duration must be positive, got: {0} minutes")]
    NotPositive(u64),
}

/// Recurrence interval of a chore, stored in whole days
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequency {
    /// Interval converted to days
    pub days: u32,
    /// Token as the user wrote it (e.g. `2w`)
    pub raw: String,
}

impl Frequency {
    fn unit_days(unit: char) -> Option<i64> {
        match unit {
            'd' => Some(1),
            'w' => Some(7),
            'm' => Some(30),
            'y' => Some(365),
            _ => None,
        }
    }
}

impl FromStr for Frequency {
    type Err = FrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FrequencyError::InvalidFormat(s.to_string());

        let unit = s.chars().last().ok_or_else(invalid)?;
        let multiplier = Self::unit_days(unit).ok_or_else(invalid)?;
        let number = &s[..s.len() - unit.len_utf8()];

        let digits = number.strip_prefix('-').unwrap_or(number);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let n: i64 = number.parse().map_err(|_| invalid())?;
        if n <= 0 {
            return Err(FrequencyError::NotPositive(n));
        }

        let days = n
            .checked_mul(multiplier)
            .and_then(|d| u32::try_from(d).ok())
            .ok_or_else(invalid)?;

        Ok(Self {
            days,
            raw: s.to_string(),
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Estimated effort for a chore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duration {
    /// Total minutes
    pub minutes: u32,
    /// Token as the user wrote it (e.g. `1h30m`)
    pub raw: String,
}

/// Splits a leading run of ASCII digits off `s`
fn take_digits(s: &str) -> (&str, &str) {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    s.split_at(end)
}

impl FromStr for Duration {
    type Err = DurationError;

    /// Accepts exactly `<H>h<M>m`, `<H>h` or `<M>m`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DurationError::InvalidFormat(s.to_string());

        let (first, rest) = take_digits(s);
        if first.is_empty() {
            return Err(invalid());
        }
        let first: u64 = first.parse().map_err(|_| invalid())?;

        let (hours, mins) = match rest {
            "m" => (0, first),
            "h" => (first, 0),
            _ => {
                let tail = rest.strip_prefix('h').ok_or_else(invalid)?;
                let (second, unit) = take_digits(tail);
                if second.is_empty() || unit != "m" {
                    return Err(invalid());
                }
                (first, second.parse().map_err(|_| invalid())?)
            }
        };

        let total = hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(mins))
            .ok_or_else(invalid)?;

        if total == 0 {
            return Err(DurationError::NotPositive(total));
        }

        Ok(Self {
            minutes: u32::try_from(total).map_err(|_| invalid())?,
            raw: s.to_string(),
        })
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_minutes(i64::from(self.minutes)))
    }
}

/// Formats minutes as `Xh Ym`, `Xh` or `Xm`
///
/// Zero and negative input render as `0m`.
pub fn format_minutes(minutes: i64) -> String {
    if minutes <= 0 {
        return "0m".to_string();
    }

    let hours = minutes / 60;
    let mins = minutes % 60;

    match (hours, mins) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}
