//! Summation of time entries.
//!
//! [`sum_times`] takes free-form entries, keeps the ones that are (or can be
//! formatted into) canonical `HH:MM` times and adds them up. Invalid entries
//! are skipped without error; only a list with no valid entry at all yields
//! `None`.

use crate::libs::formatter::{format_decimal_hours, format_duration, format_time, is_complete, MAX_MINUTE};
use chrono::Duration;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static CANONICAL_TIME: OnceLock<Regex> = OnceLock::new();

fn canonical_time() -> &'static Regex {
    CANONICAL_TIME.get_or_init(|| Regex::new(r"^([0-9]{2}):([0-9]{2})$").expect("valid HH:MM pattern"))
}

/// Total of a submission, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalResult {
    /// Hours and minutes, e.g. `"2:15"`. Hours are unbounded.
    pub hhmm: String,
    /// Decimal hours with two fractional digits, e.g. `"2.25"`.
    pub decimal: String,
}

impl TotalResult {
    pub fn from_duration(duration: &Duration) -> Self {
        Self {
            hhmm: format_duration(duration),
            decimal: format_decimal_hours(duration),
        }
    }
}

/// Parses a single entry into the duration it contributes.
///
/// The entry is trimmed; a bare four-digit value is formatted first. The
/// result must be a canonical time (two digits, colon, two digits, minutes
/// at most 59), otherwise `None` is returned.
pub fn parse_entry(entry: &str) -> Option<Duration> {
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }

    let value = if is_complete(entry) { format_time(entry) } else { entry.to_string() };
    let captures = canonical_time().captures(&value)?;
    let (Ok(hours), Ok(minutes)) = (captures[1].parse::<i64>(), captures[2].parse::<u32>()) else {
        return None;
    };
    if minutes > MAX_MINUTE {
        return None;
    }

    Some(Duration::minutes(hours * 60 + i64::from(minutes)))
}

/// Sums the valid entries of a submission.
///
/// Returns `None` when no entry holds a valid time.
///
/// # Examples
///
/// ```rust
/// use calchora::libs::summary::sum_times;
///
/// let total = sum_times(&["01:30", "00:45"]).unwrap();
/// assert_eq!(total.hhmm, "2:15");
/// assert_eq!(total.decimal, "2.25");
///
/// assert!(sum_times(&["", "abc", "99:99"]).is_none());
/// ```
pub fn sum_times<S: AsRef<str>>(entries: &[S]) -> Option<TotalResult> {
    let mut total = Duration::zero();
    let mut any_valid = false;

    for entry in entries {
        let entry = entry.as_ref();
        match parse_entry(entry) {
            Some(duration) => {
                total = total + duration;
                any_valid = true;
            }
            None if !entry.trim().is_empty() => tracing::debug!(entry, "skipping entry that is not a valid HH:MM time"),
            None => {}
        }
    }

    if !any_valid {
        return None;
    }

    tracing::debug!(minutes = total.num_minutes(), "summed time entries");
    Some(TotalResult::from_duration(&total))
}
