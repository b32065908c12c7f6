//! Markdown chore log parser
//!
//! The log is a single markdown file mixing chore definitions and dated
//! completion entries:
//!
//! ```text
//! ## Kitchen Clean
//! > 1w 45m
//! Wipe counters, mop floor.
//!
//! 2026-02-10 Kitchen Clean
//! 2026-02-17 kitchen clean  # late again
//! ```
//!
//! Parsing is a single pass over the lines. Malformed frequency or duration
//! tokens abort the parse; duplicate chores and bad completion dates are
//! reported as warnings and skipped.

use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{Chore, Completion, Duration, DurationError, Frequency, FrequencyError};

/// Why a log could not be parsed
#[derive(Debug, Error, PartialEq)]
pub enum MalformedKind {
    #[error(transparent)]
    Frequency(#[from] FrequencyError),

    #[error(transparent)]
    Duration(#[from] DurationError),

    #[error("chore \"{name}\" has no frequency defined")]
    MissingFrequency { name: String },
}

/// Fatal parse error, tied to the offending 1-based line
#[derive(Debug, Error, PartialEq)]
#[error("line {line}: {kind}")]
pub struct MalformedInput {
    pub line: usize,
    pub kind: MalformedKind,
}

impl MalformedInput {
    fn new(line: usize, kind: impl Into<MalformedKind>) -> Self {
        Self {
            line,
            kind: kind.into(),
        }
    }
}

/// Everything recovered from a log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLog {
    pub chores: Vec<Chore>,
    pub completions: Vec<Completion>,
    pub warnings: Vec<String>,
}

/// A chore whose header has been seen but which may still be incomplete
#[derive(Debug)]
struct Draft {
    name: String,
    line: usize,
    frequency: Option<Frequency>,
    duration: Option<Duration>,
    description: Vec<String>,
}

impl Draft {
    fn new(name: &str, line: usize) -> Self {
        Self {
            name: name.to_string(),
            line,
            frequency: None,
            duration: None,
            description: Vec::new(),
        }
    }

    fn into_chore(self) -> Result<Chore, MalformedInput> {
        let frequency = self.frequency.ok_or_else(|| {
            MalformedInput::new(
                self.line,
                MalformedKind::MissingFrequency {
                    name: self.name.clone(),
                },
            )
        })?;

        Ok(Chore {
            name: self.name,
            frequency,
            duration: self.duration,
            description: self.description.join("\n").trim().to_string(),
            line: self.line,
        })
    }
}

/// `## <name>`
fn header_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("##")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let name = rest.trim();
    (!name.is_empty()).then_some(name)
}

/// `> <frequency> [<duration>]`; a bare `>` is not a frequency line
fn frequency_parts(line: &str) -> Option<(&str, &str)> {
    let body = line.strip_prefix('>')?.trim();
    if body.is_empty() {
        return None;
    }

    match body.split_once(char::is_whitespace) {
        Some((token, rest)) => Some((token, rest.trim())),
        None => Some((body, "")),
    }
}

/// `YYYY-MM-DD <name> [# comment]`
fn completion_parts(line: &str) -> Option<(&str, &str)> {
    let date = line.get(..10)?;
    let shaped = date.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shaped {
        return None;
    }

    let rest = &line[10..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let name = match rest.find('#') {
        Some(idx) => &rest[..idx],
        None => rest,
    }
    .trim();

    (!name.is_empty()).then_some((date, name))
}

/// Line-by-line parser state
#[derive(Debug, Default)]
struct LogParser {
    current: Option<Draft>,
    drafts: Vec<Draft>,
    seen: HashSet<String>,
    completions: Vec<Completion>,
    warnings: Vec<String>,
}

impl LogParser {
    fn close_current(&mut self) {
        if let Some(draft) = self.current.take() {
            self.drafts.push(draft);
        }
    }

    fn line(&mut self, line_num: usize, line: &str) -> Result<(), MalformedInput> {
        if let Some(name) = header_name(line) {
            self.close_current();

            if !self.seen.insert(name.to_lowercase()) {
                self.warnings.push(format!(
                    "line {}: duplicate chore \"{}\" (first definition wins)",
                    line_num, name
                ));
                return Ok(());
            }

            self.current = Some(Draft::new(name, line_num));
            return Ok(());
        }

        if let Some(draft) = self.current.as_mut().filter(|d| d.frequency.is_none()) {
            if let Some((token, duration)) = frequency_parts(line) {
                let frequency: Frequency = token
                    .parse()
                    .map_err(|e: FrequencyError| MalformedInput::new(line_num, e))?;
                draft.frequency = Some(frequency);

                if !duration.is_empty() {
                    let duration: Duration = duration
                        .parse()
                        .map_err(|e: DurationError| MalformedInput::new(line_num, e))?;
                    draft.duration = Some(duration);
                }
                return Ok(());
            }
        }

        if let Some((date, name)) = completion_parts(line) {
            match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
                Ok(date) => self.completions.push(Completion {
                    date,
                    chore_name: name.to_string(),
                    line: line_num,
                }),
                Err(_) => self.warnings.push(format!(
                    "line {}: invalid date \"{}\", skipping",
                    line_num, date
                )),
            }
            return Ok(());
        }

        if let Some(draft) = self.current.as_mut() {
            if draft.frequency.is_some() && !line.trim().is_empty() {
                draft.description.push(line.to_string());
            }
        }

        Ok(())
    }

    fn finish(mut self) -> Result<ParsedLog, MalformedInput> {
        self.close_current();

        let chores = self
            .drafts
            .into_iter()
            .map(Draft::into_chore)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParsedLog {
            chores,
            completions: self.completions,
            warnings: self.warnings,
        })
    }
}

/// Parses a whole chore log
pub fn parse(content: &str) -> Result<ParsedLog, MalformedInput> {
    let mut parser = LogParser::default();

    for (idx, line) in content.split('\n').enumerate() {
        parser.line(idx + 1, line.trim_end_matches('\r'))?;
    }

    parser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parses_two_chores() {
        let content = "## Kitchen\n> 1w\n\n## Bathroom\n> 2w\n";
        let log = parse(content).unwrap();

        assert_eq!(log.chores.len(), 2);
        assert_eq!(log.chores[0].name, "Kitchen");
        assert_eq!(log.chores[0].frequency_days(), 7);
        assert_eq!(log.chores[0].line, 1);
        assert_eq!(log.chores[1].name, "Bathroom");
        assert_eq!(log.chores[1].frequency_days(), 14);
        assert_eq!(log.chores[1].frequency.raw, "2w");
        assert!(log.warnings.is_empty());
    }

    #[test]
    fn parses_duration_suffix() {
        let log = parse("## Laundry\n> 1w 1h30m\n").unwrap();
        let duration = log.chores[0].duration.as_ref().unwrap();
        assert_eq!(duration.minutes, 90);
        assert_eq!(duration.raw, "1h30m");
    }

    #[test]
    fn frequency_without_space_after_marker() {
        let log = parse("## Laundry\n>3d\n").unwrap();
        assert_eq!(log.chores[0].frequency_days(), 3);
        assert!(log.chores[0].duration.is_none());
    }

    #[test]
    fn collects_description_after_frequency() {
        let content = "## Kitchen\n> 1w\nWipe counters.\n\n  Mop floor.\n\n## Bathroom\n> 2w\n";
        let log = parse(content).unwrap();
        assert_eq!(log.chores[0].description, "Wipe counters.\n  Mop floor.");
        assert_eq!(log.chores[1].description, "");
    }

    #[test]
    fn parses_completions() {
        let content = "## Kitchen\n> 1w\n\n2026-02-01 Kitchen\n2026-02-08 kitchen  # late\n";
        let log = parse(content).unwrap();

        assert_eq!(log.completions.len(), 2);
        assert_eq!(log.completions[0].date, date("2026-02-01"));
        assert_eq!(log.completions[0].chore_name, "Kitchen");
        assert_eq!(log.completions[0].line, 4);
        assert_eq!(log.completions[1].chore_name, "kitchen");
        assert!(log.chores[0].description.is_empty());
    }

    #[test]
    fn completion_before_definition_and_unknown_names_kept() {
        let content = "2026-01-05 Kitchen\n2026-01-06 Garage\n## Kitchen\n> 1w\n";
        let log = parse(content).unwrap();

        assert_eq!(log.completions.len(), 2);
        assert_eq!(log.completions[1].chore_name, "Garage");
        assert_eq!(log.chores.len(), 1);
    }

    #[test]
    fn invalid_date_is_a_warning() {
        let content = "## Kitchen\n> 1w\n2026-02-30 Kitchen\n2026-02-01 Kitchen\n";
        let log = parse(content).unwrap();

        assert_eq!(log.completions.len(), 1);
        assert_eq!(log.warnings, vec!["line 3: invalid date \"2026-02-30\", skipping"]);
    }

    #[test]
    fn duplicate_chore_first_wins() {
        let content = "## Kitchen\n> 1w\n\n## kitchen\n> 1d\nIgnored text\n\n## Bathroom\n> 2w\n";
        let log = parse(content).unwrap();

        assert_eq!(log.chores.len(), 2);
        assert_eq!(log.chores[0].name, "Kitchen");
        assert_eq!(log.chores[0].frequency_days(), 7);
        assert!(log.chores[0].description.is_empty());
        assert_eq!(log.chores[1].name, "Bathroom");
        assert_eq!(log.chores[1].frequency_days(), 14);
        assert!(log.chores[1].description.is_empty());
        assert_eq!(
            log.warnings,
            vec!["line 4: duplicate chore \"kitchen\" (first definition wins)"]
        );
    }

    #[test]
    fn missing_frequency_is_fatal() {
        let err = parse("## Kitchen\nno frequency here\n\n## Bathroom\n> 2w\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(
            err.kind,
            MalformedKind::MissingFrequency {
                name: "Kitchen".to_string()
            }
        );
        assert_eq!(err.to_string(), "line 1: chore \"Kitchen\" has no frequency defined");
    }

    #[test]
    fn missing_frequency_at_end_of_input() {
        let err = parse("## Kitchen\n> 1w\n## Bathroom\n").unwrap_err();
        assert_eq!(err.line, 3);
    }

    #[test]
    fn bad_frequency_is_fatal() {
        for line in ["> 0d", "> -2w", "> 1.5w", "> 3x"] {
            let content = format!("## Kitchen\n{}\n", line);
            let err = parse(&content).unwrap_err();
            assert_eq!(err.line, 2, "for {:?}", line);
            assert!(matches!(err.kind, MalformedKind::Frequency(_)), "for {:?}", line);
        }
    }

    #[test]
    fn bad_duration_is_fatal() {
        for line in ["> 1w 0m", "> 1w 1h 30m", "> 1w 1.5h", "> 1w soon"] {
            let content = format!("## Kitchen\n{}\n", line);
            let err = parse(&content).unwrap_err();
            assert_eq!(err.line, 2, "for {:?}", line);
            assert!(matches!(err.kind, MalformedKind::Duration(_)), "for {:?}", line);
        }
    }

    #[test]
    fn second_quote_line_is_description() {
        let log = parse("## Kitchen\n> 1w\n> 2d\n").unwrap();
        assert_eq!(log.chores[0].frequency_days(), 7);
        assert_eq!(log.chores[0].description, "> 2d");
    }

    #[test]
    fn word_frequency_is_fatal() {
        let err = parse("## Kitchen\n> weekly\n> 1w\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(
            err.kind,
            MalformedKind::Frequency(FrequencyError::InvalidFormat("weekly".to_string()))
        );
    }

    #[test]
    fn bare_quote_marker_is_ignored() {
        let log = parse("## Kitchen\n>\n> 1w\n").unwrap();
        assert_eq!(log.chores[0].frequency_days(), 7);
        assert!(log.chores[0].description.is_empty());
    }

    #[test]
    fn handles_crlf_and_preamble() {
        let content = "# My chores\r\nSome intro.\r\n## Kitchen\r\n> 1w 30m\r\n2026-02-01 Kitchen\r\n";
        let log = parse(content).unwrap();

        assert_eq!(log.chores.len(), 1);
        assert_eq!(log.chores[0].name, "Kitchen");
        assert_eq!(log.chores[0].duration_minutes(), 30);
        assert_eq!(log.completions[0].chore_name, "Kitchen");
    }

    #[test]
    fn deeper_headings_are_not_chores() {
        let log = parse("## Kitchen\n> 1w\n### Notes\n").unwrap();
        assert_eq!(log.chores.len(), 1);
        assert_eq!(log.chores[0].description, "### Notes");
    }

    #[test]
    fn empty_input() {
        let log = parse("").unwrap();
        assert_eq!(log, ParsedLog::default());
    }
}
