//! Locale-driven date and time helpers
//!
//! Free functions that parse localized text into ISO 8601 strings and
//! format ISO text or timestamps back into localized notation. Default
//! patterns come from the embedded strftime locale database; an explicit
//! strftime pattern always wins. Every function returns an
//! [`Option<String>`] with `None` for anything that fails to parse or
//! format.

use std::fmt::Write as _;

use chrono::format::{DelayedFormat, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use pure_rust_locales::{locale_match, Locale as TimeLocale};
use serde::{Deserialize, Serialize};

use crate::locale;

/// Date attached to time-only values so they can run through the
/// date-aware formatter
const TIME_ONLY_DATE: (i32, u32, u32) = (2000, 1, 1);

/// A point in time accepted by the formatting helpers
///
/// Timestamps are interpreted as UTC; [`TimeRef::Now`] is local time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRef {
    /// The current local date and time
    #[default]
    Now,
    /// Seconds since the Unix epoch, UTC
    Timestamp(i64),
    /// ISO-ish text: `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS]` or `HH:MM[:SS]`
    Text(String),
}

impl From<i64> for TimeRef {
    fn from(timestamp: i64) -> Self {
        TimeRef::Timestamp(timestamp)
    }
}

impl From<&str> for TimeRef {
    fn from(text: &str) -> Self {
        TimeRef::Text(text.to_string())
    }
}

impl From<String> for TimeRef {
    fn from(text: String) -> Self {
        TimeRef::Text(text)
    }
}

/// Parse a localized date string into ISO 8601 (`YYYY-MM-DD`)
///
/// Without an explicit strftime `format`, the locale's date pattern is
/// tried first and plain ISO input is accepted as a fallback.
///
/// # Example
///
/// ```rust
/// use fluent_utils::datetime::parse_date;
///
/// assert_eq!(parse_date("01/24/2023", None, Some("en")), Some("2023-01-24".into()));
/// assert_eq!(parse_date("24.1.2023", Some("%d.%m.%Y"), None), Some("2023-01-24".into()));
/// assert_eq!(parse_date("1111-31-31", None, Some("en")), None);
/// ```
pub fn parse_date(input: &str, format: Option<&str>, locale_tag: Option<&str>) -> Option<String> {
    let text = input.trim();
    let date = match format {
        Some(pattern) => NaiveDate::parse_from_str(text, pattern).ok()?,
        None => {
            let pattern = date_pattern(resolve_tag(locale_tag));
            NaiveDate::parse_from_str(text, pattern)
                .or_else(|_| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
                .ok()?
        }
    };
    render_plain_date(&date, "%Y-%m-%d")
}

/// Parse a localized time string into ISO 8601 (`HH:MM:SS`)
///
/// The locale's time pattern is tried first; common unambiguous shapes
/// (12-hour with and without seconds, 24-hour with and without seconds)
/// are accepted as fallbacks.
///
/// # Example
///
/// ```rust
/// use fluent_utils::datetime::parse_time;
///
/// assert_eq!(parse_time("5:04 PM", None, Some("en")), Some("17:04:00".into()));
/// assert_eq!(parse_time("17:04", None, Some("sl")), Some("17:04:00".into()));
/// assert_eq!(parse_time("30:30", None, Some("en")), None);
/// ```
pub fn parse_time(input: &str, format: Option<&str>, locale_tag: Option<&str>) -> Option<String> {
    let text = input.trim();
    let time = match format {
        Some(pattern) => NaiveTime::parse_from_str(text, pattern).ok()?,
        None => {
            let locale = resolve_tag(locale_tag);
            time_patterns(locale)
                .into_iter()
                .find_map(|pattern| NaiveTime::parse_from_str(text, pattern).ok())?
        }
    };
    let mut out = String::new();
    write!(out, "{}", time.format("%H:%M:%S")).ok()?;
    Some(out)
}

/// Parse a localized date-and-time string into `YYYY-MM-DD HH:MM:SS`
///
/// The default pattern is the locale's date pattern joined to each of the
/// time fallbacks by a single space.
///
/// # Example
///
/// ```rust
/// use fluent_utils::datetime::parse_date_time;
///
/// assert_eq!(
///     parse_date_time("1/24/2023 5:04:12 PM", None, Some("en")),
///     Some("2023-01-24 17:04:12".into())
/// );
/// ```
pub fn parse_date_time(
    input: &str,
    format: Option<&str>,
    locale_tag: Option<&str>,
) -> Option<String> {
    let text = input.trim();
    let moment = match format {
        Some(pattern) => NaiveDateTime::parse_from_str(text, pattern).ok()?,
        None => {
            let locale = resolve_tag(locale_tag);
            let date = date_pattern(locale);
            let mut candidates: Vec<String> = time_patterns(locale)
                .into_iter()
                .map(|time| format!("{date} {time}"))
                .collect();
            candidates.push("%Y-%m-%d %H:%M:%S".to_string());
            candidates.push("%Y-%m-%d %H:%M".to_string());
            candidates
                .iter()
                .find_map(|pattern| NaiveDateTime::parse_from_str(text, pattern).ok())?
        }
    };
    render_plain(&moment, "%Y-%m-%d %H:%M:%S")
}

/// Format a date in localized notation
///
/// # Arguments
///
/// * `when` - Timestamp, ISO text or [`TimeRef::Now`]
/// * `format` - Explicit strftime pattern; the locale's date pattern when
///   absent
/// * `locale_tag` - Locale tag; `en_US` when absent or unknown
///
/// # Example
///
/// ```rust
/// use fluent_utils::datetime::format_date;
///
/// assert_eq!(
///     format_date("2023-01-24".into(), None, Some("en")),
///     Some("01/24/2023".into())
/// );
/// assert_eq!(
///     format_date("2023-01-24".into(), Some("%A"), Some("en")),
///     Some("Tuesday".into())
/// );
/// ```
pub fn format_date(when: TimeRef, format: Option<&str>, locale_tag: Option<&str>) -> Option<String> {
    let locale = resolve_tag(locale_tag);
    let moment = resolve(&when)?;
    let pattern = format.unwrap_or_else(|| date_pattern(locale));
    render_localized(&moment, pattern, locale)
}

/// Format a time in localized notation; the locale's time pattern is the
/// default
pub fn format_time(when: TimeRef, format: Option<&str>, locale_tag: Option<&str>) -> Option<String> {
    let locale = resolve_tag(locale_tag);
    let moment = resolve(&when)?;
    let pattern = format.unwrap_or_else(|| time_pattern(locale));
    render_localized(&moment, pattern, locale)
}

/// Format a date and time in localized notation; the default pattern is
/// the locale's date and time patterns joined by a space
pub fn format_date_time(
    when: TimeRef,
    format: Option<&str>,
    locale_tag: Option<&str>,
) -> Option<String> {
    let locale = resolve_tag(locale_tag);
    let moment = resolve(&when)?;
    match format {
        Some(pattern) => render_localized(&moment, pattern, locale),
        None => {
            let pattern = format!("{} {}", date_pattern(locale), time_pattern(locale));
            render_localized(&moment, &pattern, locale)
        }
    }
}

/// Resolve a [`TimeRef`] to a naive date-time
pub(crate) fn resolve(when: &TimeRef) -> Option<NaiveDateTime> {
    match when {
        TimeRef::Now => Some(chrono::Local::now().naive_local()),
        TimeRef::Timestamp(ts) => Some(DateTime::from_timestamp(*ts, 0)?.naive_utc()),
        TimeRef::Text(text) => resolve_text(text.trim()),
    }
}

fn resolve_text(text: &str) -> Option<NaiveDateTime> {
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(moment) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(moment);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    for pattern in ["%H:%M:%S", "%H:%M"] {
        if let Ok(time) = NaiveTime::parse_from_str(text, pattern) {
            let (year, month, day) = TIME_ONLY_DATE;
            return Some(NaiveDate::from_ymd_opt(year, month, day)?.and_time(time));
        }
    }
    None
}

/// Render through the localized formatter, reporting pattern errors as
/// `None` instead of panicking
pub(crate) fn render_localized(
    moment: &NaiveDateTime,
    pattern: &str,
    locale: TimeLocale,
) -> Option<String> {
    // chrono has no NaiveDateTime::format_localized; build the same
    // DelayedFormat it would produce, offset-free so zone items still fail
    let localized = DelayedFormat::new_with_locale(
        Some(moment.date()),
        Some(moment.time()),
        StrftimeItems::new_with_locale(pattern, locale),
        locale,
    );
    let mut out = String::new();
    write!(out, "{localized}").ok()?;
    Some(out)
}

/// Render with the plain (unlocalized) formatter under the same
/// error-to-`None` guard
pub(crate) fn render_plain(moment: &NaiveDateTime, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", moment.format(pattern)).ok()?;
    Some(out)
}

fn render_plain_date(date: &NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

fn resolve_tag(locale_tag: Option<&str>) -> TimeLocale {
    match locale_tag {
        Some(tag) => locale::time_locale(tag),
        None => TimeLocale::en_US,
    }
}

/// The locale's default date pattern from the strftime database
fn date_pattern(locale: TimeLocale) -> &'static str {
    locale_match!(locale => LC_TIME::D_FMT)
}

/// The locale's default time pattern from the strftime database
fn time_pattern(locale: TimeLocale) -> &'static str {
    locale_match!(locale => LC_TIME::T_FMT)
}

/// Parse candidates for time input: the locale pattern first, then the
/// unambiguous common shapes
fn time_patterns(locale: TimeLocale) -> Vec<&'static str> {
    let mut patterns = vec![time_pattern(locale)];
    for fallback in ["%I:%M:%S %p", "%I:%M %p", "%H:%M:%S", "%H:%M"] {
        if !patterns.contains(&fallback) {
            patterns.push(fallback);
        }
    }
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_date() {
        // Locale default pattern
        assert_eq!(
            parse_date("01/24/2023", None, Some("en")),
            Some("2023-01-24".to_string())
        );
        assert_eq!(
            parse_date("1/24/2023", None, Some("en")),
            Some("2023-01-24".to_string())
        );

        // ISO input is accepted as a fallback
        assert_eq!(
            parse_date("2023-01-24", None, Some("en")),
            Some("2023-01-24".to_string())
        );

        // Explicit pattern wins
        assert_eq!(
            parse_date("24.1.2023", Some("%d.%m.%Y"), None),
            Some("2023-01-24".to_string())
        );

        // Invalid dates and garbage are None
        assert_eq!(parse_date("1111-31-31", None, Some("en")), None);
        assert_eq!(parse_date("next tuesday", None, Some("en")), None);
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("5:04 PM", None, Some("en")),
            Some("17:04:00".to_string())
        );
        assert_eq!(
            parse_time("5:04:12 PM", None, Some("en")),
            Some("17:04:12".to_string())
        );
        assert_eq!(
            parse_time("17:04", None, Some("sl")),
            Some("17:04:00".to_string())
        );

        // Out-of-range components fail
        assert_eq!(parse_time("30:30", None, Some("en")), None);
    }

    #[test]
    fn test_parse_date_time() {
        assert_eq!(
            parse_date_time("1/24/2023 5:04 PM", None, Some("en")),
            Some("2023-01-24 17:04:00".to_string())
        );
        assert_eq!(
            parse_date_time("1/24/2023 5:04:12 PM", None, Some("en")),
            Some("2023-01-24 17:04:12".to_string())
        );
        assert_eq!(
            parse_date_time("24.1.2023 17:04", Some("%d.%m.%Y %H:%M"), None),
            Some("2023-01-24 17:04:00".to_string())
        );
        assert_eq!(parse_date_time("24.1.2023", None, Some("en")), None);
    }

    #[test]
    fn test_format_date() {
        // ISO text and timestamps resolve to the same day
        assert_eq!(
            format_date("2023-01-24".into(), None, Some("en")),
            Some("01/24/2023".to_string())
        );
        assert_eq!(
            format_date(1674518400.into(), None, Some("en")),
            Some("01/24/2023".to_string())
        );

        // Explicit patterns, including localized names
        assert_eq!(
            format_date("2023-01-24".into(), Some("%A, %-d %B %Y"), Some("en")),
            Some("Tuesday, 24 January 2023".to_string())
        );
        assert_eq!(
            format_date("2023-01-24".into(), Some("%B"), Some("de")),
            Some("Januar".to_string())
        );

        // Unresolvable input is None
        assert_eq!(format_date("garbage".into(), None, Some("en")), None);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(
            format_time("17:04:12".into(), None, Some("en")),
            Some("05:04:12 PM".to_string())
        );
        assert_eq!(
            format_time("17:04:12".into(), Some("%H:%M"), Some("en")),
            Some("17:04".to_string())
        );
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(
            format_date_time("2023-01-24 17:04:12".into(), None, Some("en")),
            Some("01/24/2023 05:04:12 PM".to_string())
        );
    }

    #[test]
    fn test_formatter_errors_are_none() {
        // Zone specifiers cannot render from a naive value
        assert_eq!(format_date("2023-01-24".into(), Some("%Z"), Some("en")), None);
    }

    #[test]
    fn test_now_shapes() {
        // Only shape assertions; the clock moves
        let today = format_date(TimeRef::Now, Some("%Y-%m-%d"), Some("en"));
        assert!(today.is_some());
        assert_eq!(today.map(|d| d.len()), Some(10));
    }
}
