//! Locale-aware number wrapper and renderers
//!
//! [`FluentNumber`] wraps a [`Number`], an integer-or-decimal union fixed
//! at construction, and renders it through explicit [`NumberFormat`]
//! configuration: grouped locale output, percent and currency variants,
//! file sizes, time intervals and roman numerals. Parsing inverts the
//! locale formatting and classifies the result back into the union.

use std::fmt;
use std::str::FromStr;

use num_format::Locale as NumberLocale;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UtilsError};
use crate::locale;

/// Greedy conversion table shared by the roman renderers
const ROMAN_TABLE: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// File size unit ladder; one step per division by 1000
const FILE_SIZE_UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Grouping separators accepted while parsing, before removing the
/// locale's decimal separator from the set
const GROUPING_CANDIDATES: [&str; 5] = [",", ".", "\u{a0}", "\u{202f}", " "];

/// A scalar that is either a whole number or a decimal
///
/// The variant is decided once, at construction, and drives the default
/// rendering rules: integers show no fraction digits, decimals show up to
/// ten with trailing zeros trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    /// Whole value
    Integer(i64),
    /// Fractional value
    Decimal(f64),
}

impl Number {
    /// The value as a float, regardless of variant
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(value) => *value as f64,
            Number::Decimal(value) => *value,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Decimal(value)
    }
}

/// Units understood by [`FluentNumber::as_time_interval`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Seconds
    Seconds,
    /// Minutes
    Minutes,
    /// Hours
    Hours,
    /// Days
    Days,
}

impl TimeUnit {
    /// Convert unit to its suffix representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "m",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
        }
    }

    /// Parse unit from its suffix
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "s" => Some(TimeUnit::Seconds),
            "m" => Some(TimeUnit::Minutes),
            "h" => Some(TimeUnit::Hours),
            "d" => Some(TimeUnit::Days),
            _ => None,
        }
    }

    fn seconds(self) -> u64 {
        match self {
            TimeUnit::Seconds => 1,
            TimeUnit::Minutes => 60,
            TimeUnit::Hours => 3600,
            TimeUnit::Days => 86400,
        }
    }

    fn descending() -> [TimeUnit; 4] {
        [
            TimeUnit::Days,
            TimeUnit::Hours,
            TimeUnit::Minutes,
            TimeUnit::Seconds,
        ]
    }
}

/// Explicit formatting configuration for [`FluentNumber`]
///
/// Owned and passed per call; there is no global formatter state. Unset
/// fields fall back to per-variant defaults: integers format with no
/// fraction digits, decimals with at most 10 and at least 2.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Locale tag; `None` formats with the `en` tables
    pub locale: Option<String>,
    /// Most fraction digits to render
    pub max_fraction: Option<usize>,
    /// Fraction digits kept when trimming trailing zeros
    pub min_fraction: Option<usize>,
}

impl NumberFormat {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locale tag
    pub fn with_locale(mut self, tag: impl Into<String>) -> Self {
        self.locale = Some(tag.into());
        self
    }

    /// Render exactly this many fraction digits (sets min and max)
    pub fn with_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction = Some(digits);
        self.min_fraction = Some(digits);
        self
    }

    /// Set only the most fraction digits to render
    pub fn with_max_fraction(mut self, digits: usize) -> Self {
        self.max_fraction = Some(digits);
        self
    }

    /// Keep at least this many fraction digits when trimming zeros
    pub fn with_min_fraction(mut self, digits: usize) -> Self {
        self.min_fraction = Some(digits);
        self
    }
}

/// Chainable wrapper over a [`Number`]
///
/// # Example
///
/// ```rust
/// use fluent_utils::number::{FluentNumber, NumberFormat};
///
/// let n = FluentNumber::from(1234567);
/// assert_eq!(n.format(&NumberFormat::default()).unwrap(), "1,234,567");
/// assert_eq!(FluentNumber::from(1994).to_roman(), "MCMXCIV");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluentNumber {
    value: Number,
}

impl FluentNumber {
    /// Wrap a numeric value
    pub fn new(value: impl Into<Number>) -> Self {
        FluentNumber {
            value: value.into(),
        }
    }

    /// Parse plain numeric text (`.` decimal separator, no grouping)
    ///
    /// Whole-number text becomes [`Number::Integer`], anything with a
    /// fraction or exponent becomes [`Number::Decimal`].
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::InvalidArgument`] for non-numeric text.
    pub fn from_text(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if let Ok(int) = trimmed.parse::<i64>() {
            return Ok(FluentNumber::new(int));
        }
        match trimmed.parse::<f64>() {
            Ok(dec) if dec.is_finite() => Ok(FluentNumber::new(dec)),
            _ => Err(UtilsError::invalid_argument(format!(
                "not a numeric value: \"{text}\""
            ))),
        }
    }

    /// The wrapped value
    pub fn value(&self) -> Number {
        self.value
    }

    /// Whether the wrapped value is a whole number
    pub fn is_integer(&self) -> bool {
        matches!(self.value, Number::Integer(_))
    }

    /// Whether the wrapped value is a decimal
    pub fn is_decimal(&self) -> bool {
        matches!(self.value, Number::Decimal(_))
    }

    /// Render with grouping, decimal separator and minus sign of the
    /// configured locale
    ///
    /// # Arguments
    ///
    /// * `options` - Locale and fraction-digit configuration
    ///
    /// # Returns
    ///
    /// The formatted text; exact fraction count when min equals max,
    /// otherwise rounded at the maximum and trimmed down to the minimum.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::number::{FluentNumber, NumberFormat};
    ///
    /// let n = FluentNumber::from(1234.5);
    /// assert_eq!(n.format(&NumberFormat::default()).unwrap(), "1,234.50");
    ///
    /// let de = NumberFormat::new().with_locale("de").with_fraction_digits(2);
    /// assert_eq!(n.format(&de).unwrap(), "1.234,50");
    /// ```
    pub fn format(&self, options: &NumberFormat) -> Result<String> {
        let locale = resolve_locale(options)?;
        let (min, max) = fraction_bounds(self.value, options);
        render(self.value, &locale, min, max)
    }

    /// Render as a percentage
    ///
    /// Locales with a comma decimal separator get a no-break space before
    /// the percent sign.
    pub fn as_percent(&self, options: &NumberFormat) -> Result<String> {
        let formatted = self.format(options)?;
        let locale = resolve_locale(options)?;
        if locale.decimal() == "," {
            Ok(format!("{formatted}\u{a0}%"))
        } else {
            Ok(format!("{formatted}%"))
        }
    }

    /// Render as an amount of money
    ///
    /// Symbol placement follows the locale: dot-decimal locales prefix the
    /// symbol, comma-decimal locales suffix it after a no-break space. ISO
    /// codes without a known symbol are used verbatim. Whole values render
    /// with the conventional two currency digits unless the options say
    /// otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::number::{FluentNumber, NumberFormat};
    ///
    /// let n = FluentNumber::from(1234567.89);
    /// assert_eq!(
    ///     n.as_money("EUR", &NumberFormat::default()).unwrap(),
    ///     "€1,234,567.89"
    /// );
    /// ```
    pub fn as_money(&self, currency: &str, options: &NumberFormat) -> Result<String> {
        let mut effective = options.clone();
        if self.is_integer() && options.max_fraction.is_none() && options.min_fraction.is_none() {
            effective = effective.with_fraction_digits(2);
        }
        let formatted = self.format(&effective)?;
        let locale = resolve_locale(options)?;
        let symbol = currency_symbol(currency);
        Ok(match (locale.decimal() == ",", symbol) {
            (false, Some(symbol)) => format!("{symbol}{formatted}"),
            (false, None) => format!("{currency}\u{a0}{formatted}"),
            (true, Some(symbol)) => format!("{formatted}\u{a0}{symbol}"),
            (true, None) => format!("{formatted}\u{a0}{currency}"),
        })
    }

    /// Render a byte count as a file size
    ///
    /// Steps through B, kB, MB, GB, TB, PB, EB dividing by 1000; values
    /// below 1000 stay in bytes with no fraction. The number and unit are
    /// joined by a no-break space.
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::InvalidArgument`] for decimal values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::number::FluentNumber;
    ///
    /// assert_eq!(FluentNumber::from(123).as_file_size(2).unwrap(), "123\u{a0}B");
    /// assert_eq!(FluentNumber::from(1234).as_file_size(2).unwrap(), "1.23\u{a0}kB");
    /// ```
    pub fn as_file_size(&self, decimals: usize) -> Result<String> {
        let Number::Integer(bytes) = self.value else {
            return Err(UtilsError::invalid_argument(
                "only integer values can be formatted as a file size",
            ));
        };
        if bytes.abs() < 1000 {
            return Ok(format!("{bytes}\u{a0}B"));
        }
        let mut size = bytes as f64;
        let mut unit = 0;
        while size.abs() >= 1000.0 && unit < FILE_SIZE_UNITS.len() - 1 {
            size /= 1000.0;
            unit += 1;
        }
        Ok(format!(
            "{:.*}\u{a0}{}",
            decimals, size, FILE_SIZE_UNITS[unit]
        ))
    }

    /// Render a whole second count as a `d h m s` interval
    ///
    /// Components run from `largest` down to `smallest`; zero components
    /// are skipped and anything below `smallest` is truncated. A zero
    /// total renders as `0` with the smallest unit's suffix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::number::{FluentNumber, TimeUnit};
    ///
    /// let day = FluentNumber::from(86400);
    /// assert_eq!(
    ///     day.as_time_interval(TimeUnit::Seconds, TimeUnit::Days).unwrap(),
    ///     "1d"
    /// );
    /// assert_eq!(
    ///     day.as_time_interval(TimeUnit::Seconds, TimeUnit::Hours).unwrap(),
    ///     "24h"
    /// );
    /// ```
    pub fn as_time_interval(&self, smallest: TimeUnit, largest: TimeUnit) -> Result<String> {
        let Number::Integer(total) = self.value else {
            return Err(UtilsError::invalid_argument(
                "only integer second counts can be formatted as an interval",
            ));
        };
        if total < 0 {
            return Err(UtilsError::invalid_argument(
                "second counts cannot be negative",
            ));
        }
        if largest < smallest {
            return Err(UtilsError::invalid_argument(
                "the largest interval unit cannot be smaller than the smallest",
            ));
        }

        let mut remaining = total as u64;
        let mut parts = Vec::new();
        for unit in TimeUnit::descending() {
            if unit > largest || unit < smallest {
                continue;
            }
            let count = remaining / unit.seconds();
            remaining %= unit.seconds();
            if count > 0 {
                parts.push(format!("{count}{}", unit.as_str()));
            }
        }
        if parts.is_empty() {
            parts.push(format!("0{}", smallest.as_str()));
        }
        Ok(parts.join(" "))
    }

    /// Convert the integer part to a roman numeral
    ///
    /// Greedy walk over the descending conversion table. Values below 1
    /// produce an empty string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::number::FluentNumber;
    ///
    /// assert_eq!(FluentNumber::from(1994).to_roman(), "MCMXCIV");
    /// assert_eq!(FluentNumber::from(2023).to_roman(), "MMXXIII");
    /// ```
    pub fn to_roman(&self) -> String {
        let value = match self.value {
            Number::Integer(int) => int,
            Number::Decimal(dec) => dec.trunc() as i64,
        };
        roman_digits(value)
    }

    /// Parse a canonical roman numeral back into a number
    ///
    /// Greedy inverse of [`FluentNumber::to_roman`]; text that is not the
    /// canonical spelling of its value (`"IIII"`) is rejected.
    pub fn from_roman(text: &str) -> Option<Self> {
        let upper = text.trim().to_uppercase();
        if upper.is_empty() {
            return None;
        }
        let mut rest = upper.as_str();
        let mut total = 0i64;
        for (value, numeral) in ROMAN_TABLE {
            while let Some(stripped) = rest.strip_prefix(numeral) {
                total += value;
                rest = stripped;
            }
        }
        if !rest.is_empty() || roman_digits(total) != upper {
            return None;
        }
        Some(FluentNumber::new(total))
    }

    /// Parse locale-formatted text back into a number
    ///
    /// Inverts [`FluentNumber::format`]: strips a consistent grouping
    /// separator (the usual thousands marks, including regular, no-break
    /// and narrow no-break spaces, minus the locale's decimal separator),
    /// validates three-digit group positions and maps the locale decimal
    /// separator to `.`. Text without a fraction classifies as an
    /// integer.
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::NumberParse`] for malformed input, including
    /// positionally wrong grouping such as `"123,45"` under `en`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::number::FluentNumber;
    ///
    /// let n = FluentNumber::parse("1,234,567.89", Some("en")).unwrap();
    /// assert!(n.is_decimal());
    ///
    /// let n = FluentNumber::parse("12.345", Some("sl")).unwrap();
    /// assert!(n.is_integer());
    /// ```
    pub fn parse(input: &str, locale_tag: Option<&str>) -> Result<Self> {
        let locale = locale::number_locale(locale_tag.unwrap_or("en"))?;
        let decimal = locale.decimal();

        let text = input.trim();
        let parse_error = || UtilsError::NumberParse(input.to_string());

        let (negative, unsigned) = strip_sign(text, locale.minus_sign());
        if unsigned.is_empty() {
            return Err(parse_error());
        }

        let (int_text, frac_text) = match unsigned.split_once(decimal) {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };

        if let Some(frac) = frac_text {
            if frac.is_empty() || !frac.chars().all(|c| c.is_ascii_digit()) {
                return Err(parse_error());
            }
        }

        let int_digits = ungroup(int_text, decimal).ok_or_else(parse_error)?;
        if int_digits.is_empty() && frac_text.is_none() {
            return Err(parse_error());
        }

        let sign = if negative { "-" } else { "" };
        match frac_text {
            None => {
                let joined = format!("{sign}{int_digits}");
                match joined.parse::<i64>() {
                    Ok(int) => Ok(FluentNumber::new(int)),
                    // Out of i64 range; keep the magnitude as a decimal
                    Err(_) => joined
                        .parse::<f64>()
                        .map(FluentNumber::new)
                        .map_err(|_| parse_error()),
                }
            }
            Some(frac) => {
                let int_digits = if int_digits.is_empty() {
                    "0"
                } else {
                    int_digits.as_str()
                };
                format!("{sign}{int_digits}.{frac}")
                    .parse::<f64>()
                    .map(FluentNumber::new)
                    .map_err(|_| parse_error())
            }
        }
    }
}

impl From<Number> for FluentNumber {
    fn from(value: Number) -> Self {
        FluentNumber { value }
    }
}

impl From<i64> for FluentNumber {
    fn from(value: i64) -> Self {
        FluentNumber::new(value)
    }
}

impl From<i32> for FluentNumber {
    fn from(value: i32) -> Self {
        FluentNumber::new(value)
    }
}

impl From<u32> for FluentNumber {
    fn from(value: u32) -> Self {
        FluentNumber::new(value)
    }
}

impl From<f64> for FluentNumber {
    fn from(value: f64) -> Self {
        FluentNumber::new(value)
    }
}

impl FromStr for FluentNumber {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self> {
        FluentNumber::from_text(s)
    }
}

impl fmt::Display for FluentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format(&NumberFormat::default()) {
            Ok(formatted) => f.write_str(&formatted),
            Err(_) => f.write_str("NaN"),
        }
    }
}

fn resolve_locale(options: &NumberFormat) -> Result<NumberLocale> {
    match options.locale.as_deref() {
        Some(tag) => locale::number_locale(tag),
        None => Ok(NumberLocale::en),
    }
}

/// Effective (min, max) fraction digit counts for a value
fn fraction_bounds(value: Number, options: &NumberFormat) -> (usize, usize) {
    let type_default = match value {
        Number::Integer(_) => (0, 0),
        Number::Decimal(_) => (2, 10),
    };
    let max = options.max_fraction.unwrap_or(type_default.1);
    let min = match (options.min_fraction, options.max_fraction) {
        (Some(min), _) => min,
        // An explicit maximum with no minimum means an exact digit count
        (None, Some(explicit)) => explicit,
        (None, None) => type_default.0,
    };
    (min.min(max), max)
}

fn render(value: Number, locale: &NumberLocale, min: usize, max: usize) -> Result<String> {
    let (negative, digits) = match value {
        Number::Integer(int) => {
            let mut text = int.unsigned_abs().to_string();
            if max > 0 {
                text.push('.');
                text.push_str(&"0".repeat(max));
            }
            (int < 0, text)
        }
        Number::Decimal(dec) => {
            if !dec.is_finite() {
                return Err(UtilsError::invalid_argument(
                    "cannot format a non-finite number",
                ));
            }
            (dec < 0.0, format!("{:.*}", max, dec.abs()))
        }
    };

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (digits, String::new()),
    };

    let mut frac = frac_part;
    while frac.len() > min && frac.ends_with('0') {
        frac.pop();
    }

    let mut out = String::new();
    if negative && has_nonzero_digit(&int_part, &frac) {
        out.push_str(locale.minus_sign());
    }
    out.push_str(&group_digits(&int_part, locale.separator()));
    if !frac.is_empty() {
        out.push_str(locale.decimal());
        out.push_str(&frac);
    }
    Ok(out)
}

fn has_nonzero_digit(int_part: &str, frac: &str) -> bool {
    int_part
        .chars()
        .chain(frac.chars())
        .any(|c| ('1'..='9').contains(&c))
}

/// Insert the locale's grouping separator every three digits
fn group_digits(digits: &str, separator: &str) -> String {
    if separator.is_empty() || digits.len() <= 3 {
        return digits.to_string();
    }
    let len = digits.len();
    let mut out = String::with_capacity(len + separator.len() * (len / 3));
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

fn strip_sign<'a>(text: &'a str, minus: &str) -> (bool, &'a str) {
    if let Some(rest) = text.strip_prefix(minus) {
        return (true, rest);
    }
    if let Some(rest) = text.strip_prefix('-') {
        return (true, rest);
    }
    if let Some(rest) = text.strip_prefix('+') {
        return (false, rest);
    }
    (false, text)
}

/// Remove a consistent grouping separator, validating group positions
///
/// Returns the bare digits, or `None` when the text mixes separators,
/// uses a non-candidate character or groups digits at the wrong places.
fn ungroup(text: &str, decimal: &str) -> Option<String> {
    if text.is_empty() {
        return Some(String::new());
    }
    if text.chars().all(|c| c.is_ascii_digit()) {
        return Some(text.to_string());
    }

    let mut used: Option<&str> = None;
    for candidate in GROUPING_CANDIDATES {
        if candidate == decimal || !text.contains(candidate) {
            continue;
        }
        if used.is_some() {
            return None;
        }
        used = Some(candidate);
    }
    let separator = used?;

    let groups: Vec<&str> = text.split(separator).collect();
    for (i, group) in groups.iter().enumerate() {
        let width_ok = if i == 0 {
            (1..=3).contains(&group.len())
        } else {
            group.len() == 3
        };
        if !width_ok || !group.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
    }
    Some(groups.concat())
}

fn roman_digits(value: i64) -> String {
    let mut remaining = value;
    let mut out = String::new();
    for (step, numeral) in ROMAN_TABLE {
        while remaining >= step {
            out.push_str(numeral);
            remaining -= step;
        }
    }
    out
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    const SYMBOLS: [(&str, &str); 13] = [
        ("EUR", "€"),
        ("USD", "$"),
        ("GBP", "£"),
        ("JPY", "¥"),
        ("CNY", "CN¥"),
        ("INR", "₹"),
        ("RUB", "₽"),
        ("AUD", "A$"),
        ("CAD", "CA$"),
        ("CHF", "CHF"),
        ("SEK", "kr"),
        ("NOK", "kr"),
        ("DKK", "kr"),
    ];
    SYMBOLS
        .iter()
        .find(|(iso, _)| iso.eq_ignore_ascii_case(code))
        .map(|(_, symbol)| *symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_construction() {
        assert!(FluentNumber::from(42).is_integer());
        assert!(FluentNumber::from(42.5).is_decimal());
        assert_eq!(FluentNumber::from(42).value(), Number::Integer(42));

        // Text constructor classifies by shape
        assert!(FluentNumber::from_text("123").unwrap().is_integer());
        assert!(FluentNumber::from_text("123.45").unwrap().is_decimal());
        assert!("123.45".parse::<FluentNumber>().unwrap().is_decimal());

        // Non-numeric text is rejected
        let err = FluentNumber::from_text("abc").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_format_defaults() {
        let options = NumberFormat::default();

        // Integers group with no fraction digits
        assert_eq!(
            FluentNumber::from(1234567).format(&options).unwrap(),
            "1,234,567"
        );
        assert_eq!(FluentNumber::from(0).format(&options).unwrap(), "0");

        // Decimals keep their digits up to ten, at least two
        assert_eq!(
            FluentNumber::from(1234.56789).format(&options).unwrap(),
            "1,234.56789"
        );
        assert_eq!(
            FluentNumber::from(1234.0).format(&options).unwrap(),
            "1,234.00"
        );
        assert_eq!(
            FluentNumber::from(1.23456789876).format(&options).unwrap(),
            "1.2345678988"
        );

        // Negative values
        assert_eq!(
            FluentNumber::from(-1234.5).format(&options).unwrap(),
            "-1,234.50"
        );
    }

    #[test]
    fn test_format_fraction_digits() {
        let n = FluentNumber::from(123.456);
        assert_eq!(
            n.format(&NumberFormat::new().with_fraction_digits(2)).unwrap(),
            "123.46"
        );

        // Exact count pads
        let n = FluentNumber::from(123.45);
        assert_eq!(
            n.format(&NumberFormat::new().with_fraction_digits(5)).unwrap(),
            "123.45000"
        );

        // A minimum allows trimming back down
        assert_eq!(
            n.format(
                &NumberFormat::new()
                    .with_fraction_digits(5)
                    .with_min_fraction(2)
            )
            .unwrap(),
            "123.45"
        );

        // Trimming to zero drops the separator too
        let n = FluentNumber::from(1234.0);
        assert_eq!(
            n.format(
                &NumberFormat::new()
                    .with_fraction_digits(3)
                    .with_min_fraction(0)
            )
            .unwrap(),
            "1,234"
        );
    }

    #[test]
    fn test_format_locales() {
        let n = FluentNumber::from(1234567.89);
        assert_eq!(
            n.format(&NumberFormat::new().with_locale("de")).unwrap(),
            "1.234.567,89"
        );
        assert_eq!(
            n.format(&NumberFormat::new().with_locale("sl")).unwrap(),
            "1.234.567,89"
        );

        // Unknown locales are an error
        let err = n
            .format(&NumberFormat::new().with_locale("xx_ZZ"))
            .unwrap_err();
        assert!(err.is_invalid_argument());

        // Non-finite values are an error
        let err = FluentNumber::from(f64::NAN)
            .format(&NumberFormat::default())
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_as_percent() {
        let options = NumberFormat::default();
        assert_eq!(FluentNumber::from(75).as_percent(&options).unwrap(), "75%");
        assert_eq!(
            FluentNumber::from(75.0).as_percent(&options).unwrap(),
            "75.00%"
        );

        // Comma-decimal locales separate the sign with a no-break space
        let de = NumberFormat::new().with_locale("de");
        assert_eq!(
            FluentNumber::from(12.5).as_percent(&de).unwrap(),
            "12,50\u{a0}%"
        );
    }

    #[test]
    fn test_as_money() {
        let options = NumberFormat::default();

        // Dot-decimal locales prefix the symbol
        assert_eq!(
            FluentNumber::from(1234567.89)
                .as_money("EUR", &options)
                .unwrap(),
            "€1,234,567.89"
        );

        // Whole values get the conventional two digits
        assert_eq!(
            FluentNumber::from(1234).as_money("USD", &options).unwrap(),
            "$1,234.00"
        );

        // Comma-decimal locales suffix after a no-break space
        let sl = NumberFormat::new().with_locale("sl");
        assert_eq!(
            FluentNumber::from(1234.5).as_money("EUR", &sl).unwrap(),
            "1.234,50\u{a0}€"
        );

        // Unknown codes are used verbatim
        assert_eq!(
            FluentNumber::from(1234).as_money("XXX", &options).unwrap(),
            "XXX\u{a0}1,234.00"
        );
    }

    #[test]
    fn test_as_file_size() {
        // Below 1000 stays in bytes
        assert_eq!(FluentNumber::from(0).as_file_size(2).unwrap(), "0\u{a0}B");
        assert_eq!(
            FluentNumber::from(999).as_file_size(2).unwrap(),
            "999\u{a0}B"
        );

        // The kB boundary respects the configured precision
        assert_eq!(
            FluentNumber::from(1000).as_file_size(2).unwrap(),
            "1.00\u{a0}kB"
        );
        assert_eq!(
            FluentNumber::from(1234).as_file_size(2).unwrap(),
            "1.23\u{a0}kB"
        );
        assert_eq!(
            FluentNumber::from(1234).as_file_size(3).unwrap(),
            "1.234\u{a0}kB"
        );

        // Larger units
        assert_eq!(
            FluentNumber::from(1234567).as_file_size(2).unwrap(),
            "1.23\u{a0}MB"
        );
        assert_eq!(
            FluentNumber::from(5_000_000_000i64).as_file_size(2).unwrap(),
            "5.00\u{a0}GB"
        );

        // Decimals are rejected
        let err = FluentNumber::from(12.5).as_file_size(2).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_as_time_interval() {
        let interval = |seconds: i64, smallest, largest| {
            FluentNumber::from(seconds)
                .as_time_interval(smallest, largest)
                .unwrap()
        };

        assert_eq!(interval(86400, TimeUnit::Seconds, TimeUnit::Days), "1d");
        assert_eq!(interval(86400, TimeUnit::Seconds, TimeUnit::Hours), "24h");
        assert_eq!(interval(86401, TimeUnit::Seconds, TimeUnit::Days), "1d 1s");
        assert_eq!(interval(90061, TimeUnit::Seconds, TimeUnit::Days), "1d 1h 1m 1s");

        // Truncation below the smallest unit
        assert_eq!(interval(90061, TimeUnit::Hours, TimeUnit::Hours), "25h");
        assert_eq!(interval(86401, TimeUnit::Minutes, TimeUnit::Minutes), "1440m");

        // Zero renders with the smallest unit
        assert_eq!(interval(0, TimeUnit::Seconds, TimeUnit::Days), "0s");
        assert_eq!(interval(0, TimeUnit::Minutes, TimeUnit::Days), "0m");

        // Invalid inputs
        assert!(FluentNumber::from(1.5)
            .as_time_interval(TimeUnit::Seconds, TimeUnit::Days)
            .is_err());
        assert!(FluentNumber::from(60)
            .as_time_interval(TimeUnit::Days, TimeUnit::Seconds)
            .is_err());
    }

    #[test]
    fn test_to_roman() {
        assert_eq!(FluentNumber::from(1).to_roman(), "I");
        assert_eq!(FluentNumber::from(4).to_roman(), "IV");
        assert_eq!(FluentNumber::from(9).to_roman(), "IX");
        assert_eq!(FluentNumber::from(14).to_roman(), "XIV");
        assert_eq!(FluentNumber::from(1994).to_roman(), "MCMXCIV");
        assert_eq!(FluentNumber::from(2023).to_roman(), "MMXXIII");
        assert_eq!(FluentNumber::from(3999).to_roman(), "MMMCMXCIX");

        // Below one is empty
        assert_eq!(FluentNumber::from(0).to_roman(), "");
        assert_eq!(FluentNumber::from(-5).to_roman(), "");

        // Decimals use their integer part
        assert_eq!(FluentNumber::from(3.7).to_roman(), "III");
    }

    #[test]
    fn test_from_roman() {
        assert_eq!(
            FluentNumber::from_roman("MCMXCIV"),
            Some(FluentNumber::from(1994))
        );
        assert_eq!(
            FluentNumber::from_roman("mcmxciv"),
            Some(FluentNumber::from(1994))
        );

        // Non-canonical or malformed numerals are rejected
        assert_eq!(FluentNumber::from_roman("IIII"), None);
        assert_eq!(FluentNumber::from_roman("MCMB"), None);
        assert_eq!(FluentNumber::from_roman(""), None);

        // Round-trips over the whole canonical range
        for value in 1..=3999i64 {
            let numeral = FluentNumber::from(value).to_roman();
            assert_eq!(
                FluentNumber::from_roman(&numeral),
                Some(FluentNumber::from(value)),
                "round-trip failed for {value}"
            );
        }
    }

    #[test]
    fn test_parse() {
        // English grouping and decimals
        let n = FluentNumber::parse("1,234,567.89", Some("en")).unwrap();
        assert_eq!(n.value(), Number::Decimal(1234567.89));
        let n = FluentNumber::parse("1,234", Some("en")).unwrap();
        assert_eq!(n.value(), Number::Integer(1234));

        // Dot-grouped comma-decimal locales
        let n = FluentNumber::parse("12.345", Some("sl")).unwrap();
        assert_eq!(n.value(), Number::Integer(12345));
        let n = FluentNumber::parse("12.345,67", Some("sl")).unwrap();
        assert_eq!(n.value(), Number::Decimal(12345.67));

        // Space-grouped input, both widths
        let n = FluentNumber::parse("12\u{a0}345,67", Some("fr")).unwrap();
        assert_eq!(n.value(), Number::Decimal(12345.67));
        let n = FluentNumber::parse("12\u{202f}345,67", Some("fr")).unwrap();
        assert_eq!(n.value(), Number::Decimal(12345.67));

        // Ungrouped input always works
        let n = FluentNumber::parse("1234567", Some("en")).unwrap();
        assert_eq!(n.value(), Number::Integer(1234567));
        let n = FluentNumber::parse("-12.5", Some("en")).unwrap();
        assert_eq!(n.value(), Number::Decimal(-12.5));

        // Wrong group positions are a parse error
        assert!(FluentNumber::parse("123,45", Some("en")).unwrap_err().is_parse_error());
        assert!(FluentNumber::parse("1,23,45", Some("en")).is_err());

        // Mixed separators and garbage are parse errors
        assert!(FluentNumber::parse("1,234 567", Some("en")).is_err());
        assert!(FluentNumber::parse("abc", Some("en")).is_err());
        assert!(FluentNumber::parse("", Some("en")).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(FluentNumber::from(1234).to_string(), "1,234");
        assert_eq!(FluentNumber::from(12.5).to_string(), "12.50");
    }
}
