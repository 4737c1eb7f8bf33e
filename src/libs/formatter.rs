//! Time entry formatting utilities.
//!
//! This module turns loosely typed user input into canonical `HH:MM` strings
//! and renders summed durations for display. Three policies are applied to
//! raw text, depending on when it is seen:
//!
//! ## Keystroke Policy
//!
//! While a value is being typed, only digits are kept and the value is cut
//! to four digits ([`sanitize_keystroke`]). Partial input survives so the
//! user can keep typing.
//!
//! ## Commit Policy
//!
//! When a field loses focus or the form is submitted, a value with exactly
//! four digits is formatted as `HH:MM`; anything else collapses to an empty
//! string ([`normalize_entry`]).
//!
//! ## Formatting
//!
//! [`format_time`] is the primitive both policies build on. It never fails:
//! input that does not hold exactly four digits is returned unchanged.
//!
//! ### Examples
//! - `"0130"` → `"01:30"`
//! - `"0199"` → `"01:59"` (minutes clamped)
//! - `"130"` → `"130"` (wrong length, passed through)
//!
//! ```rust
//! use calchora::libs::formatter::{format_time, normalize_entry, sanitize_keystroke};
//!
//! assert_eq!(format_time("0130"), "01:30");
//! assert_eq!(normalize_entry("13"), "");
//! assert_eq!(sanitize_keystroke("01:3"), "013");
//! ```

use chrono::Duration;

/// Number of digits that make up a complete entry (`HHMM`).
pub const ENTRY_DIGITS: usize = 4;

/// Highest minute value a canonical time may carry.
pub const MAX_MINUTE: u32 = 59;

/// Keeps only the ASCII digits of `raw`.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Returns `true` when `value` consists of exactly four ASCII digits.
pub fn is_complete(value: &str) -> bool {
    value.len() == ENTRY_DIGITS && value.chars().all(|c| c.is_ascii_digit())
}

/// Formats a raw four-digit value as a canonical `HH:MM` string.
///
/// All non-digit characters are stripped first. When exactly four digits
/// remain, the first two become the hour and the last two the minute; a
/// minute above 59 is clamped to `59`. Any other digit count returns the
/// original input unchanged so the caller can decide what to do with it.
///
/// Hours are not range checked: `"2400"` formats to `"24:00"`.
///
/// # Examples
///
/// ```rust
/// use calchora::libs::formatter::format_time;
///
/// assert_eq!(format_time("0130"), "01:30");
/// assert_eq!(format_time("0199"), "01:59");
/// assert_eq!(format_time("130"), "130");
/// assert_eq!(format_time("abcd"), "abcd");
/// ```
pub fn format_time(raw: &str) -> String {
    let clean = digits(raw);
    if clean.len() != ENTRY_DIGITS {
        return raw.to_string();
    }

    let (hours, minutes) = clean.split_at(2);
    match minutes.parse::<u32>() {
        Ok(value) if value > MAX_MINUTE => format!("{}:{:02}", hours, MAX_MINUTE),
        _ => format!("{}:{}", hours, minutes),
    }
}

/// Applies the commit policy to a field value.
///
/// Exactly four digits (after stripping everything else) produce the
/// formatted `HH:MM` value; anything shorter or longer produces an empty
/// string, which the aggregator ignores.
pub fn normalize_entry(raw: &str) -> String {
    let clean = digits(raw);
    if clean.len() == ENTRY_DIGITS {
        format_time(&clean)
    } else {
        String::new()
    }
}

/// Applies the keystroke policy: digits only, at most four of them.
pub fn sanitize_keystroke(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(ENTRY_DIGITS).collect()
}

/// Formats a duration as `H:MM`.
///
/// Unlike a clock time, hours are not padded and are unbounded, so 135
/// minutes render as `"2:15"` and 1440 minutes as `"24:00"`. Negative
/// durations are treated as zero.
pub fn format_duration(duration: &Duration) -> String {
    let total = duration.num_minutes().max(0);
    format!("{}:{:02}", total / 60, total % 60)
}

/// Formats a duration as decimal hours with exactly two fractional digits.
///
/// The value is rounded half up in integer arithmetic. With minutes over 60
/// the hundredths can never land exactly on a half, so this matches regular
/// rounding of `minutes / 60`.
pub fn format_decimal_hours(duration: &Duration) -> String {
    let total = duration.num_minutes().max(0);
    let hundredths = (total * 100 + 30) / 60;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_drops_everything_else() {
        assert_eq!(digits("01:30"), "0130");
        assert_eq!(digits(" 1h 5m "), "15");
        assert_eq!(digits("١٢٣٤"), "");
    }

    #[test]
    fn test_is_complete() {
        assert!(is_complete("0130"));
        assert!(!is_complete("013"));
        assert!(!is_complete("01:30"));
    }

    #[test]
    fn test_decimal_rounding() {
        assert_eq!(format_decimal_hours(&Duration::minutes(1)), "0.02");
        assert_eq!(format_decimal_hours(&Duration::minutes(20)), "0.33");
        assert_eq!(format_decimal_hours(&Duration::minutes(40)), "0.67");
        assert_eq!(format_decimal_hours(&Duration::minutes(5999)), "99.98");
    }
}
