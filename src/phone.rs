//! Phone number parsing and formatting
//!
//! [`FluentPhoneNumber`] wraps a number that parsed successfully and is
//! valid for the requested region, so every instance can be formatted
//! without further checks.

use std::fmt;

use phonenumber::{country, Mode, PhoneNumber};

/// A validated phone number
///
/// # Example
///
/// ```rust
/// use fluent_utils::phone::FluentPhoneNumber;
///
/// let number = FluentPhoneNumber::parse("(01) 584 61 00", "si").unwrap();
/// assert_eq!(number.format_international(), "+386 1 584 61 00");
///
/// assert!(FluentPhoneNumber::parse("044 668 1800", "si").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct FluentPhoneNumber {
    inner: PhoneNumber,
}

impl FluentPhoneNumber {
    /// Parse and validate a number for the given region
    ///
    /// The region is an ISO alpha-2 code in any case. `None` comes back
    /// when the region is unknown, the number does not parse, or the
    /// parsed number is not valid for that region.
    pub fn parse(number: &str, region: &str) -> Option<Self> {
        let region_id: country::Id = region.to_ascii_uppercase().parse().ok()?;
        let parsed = phonenumber::parse(Some(region_id), number).ok()?;

        if !phonenumber::is_valid(&parsed) {
            return None;
        }
        if parsed.country().id() != Some(region_id) {
            return None;
        }

        Some(FluentPhoneNumber { inner: parsed })
    }

    /// International format, e.g. `+386 1 584 61 00`
    pub fn format_international(&self) -> String {
        self.inner.format().mode(Mode::International).to_string()
    }

    /// National format, e.g. `(01) 584 61 00`
    pub fn format_national(&self) -> String {
        self.inner.format().mode(Mode::National).to_string()
    }

    /// RFC 3966 format for `href` attributes, e.g. `tel:+386-1-584-61-00`
    pub fn format_uri(&self) -> String {
        self.inner.format().mode(Mode::Rfc3966).to_string()
    }

    /// Compact E.164 format, e.g. `+38615846100`
    pub fn format_e164(&self) -> String {
        self.inner.format().mode(Mode::E164).to_string()
    }

    /// Country calling code, e.g. `386`
    pub fn country_code(&self) -> u16 {
        self.inner.country().code()
    }

    /// National significant number, without the national prefix
    pub fn national_number(&self) -> u64 {
        self.inner.national().value()
    }

    /// Access the underlying parsed number
    pub fn inner(&self) -> &PhoneNumber {
        &self.inner
    }
}

impl fmt::Display for FluentPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_international())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse() {
        let number = FluentPhoneNumber::parse("(01) 584 61 00", "si").unwrap();
        assert_eq!(number.country_code(), 386);
        assert_eq!(number.national_number(), 15846100);

        // International input with an uppercase region
        let number = FluentPhoneNumber::parse("+385 1 4802 500", "HR").unwrap();
        assert_eq!(number.country_code(), 385);

        // Swiss number is not valid for Slovenia
        assert!(FluentPhoneNumber::parse("044 668 1800", "si").is_none());
        assert!(FluentPhoneNumber::parse("044 668 1800", "ch").is_some());
    }

    #[test]
    fn test_parse_failures() {
        assert!(FluentPhoneNumber::parse("(01) 584 61 00", "xx").is_none());
        assert!(FluentPhoneNumber::parse("not a number", "si").is_none());
        assert!(FluentPhoneNumber::parse("", "si").is_none());
    }

    #[test]
    fn test_formats() {
        let number = FluentPhoneNumber::parse("(01) 584 61 00", "si").unwrap();

        assert_eq!(number.format_international(), "+386 1 584 61 00");
        assert_eq!(number.format_national(), "(01) 584 61 00");
        assert_eq!(number.format_uri(), "tel:+386-1-584-61-00");
        assert_eq!(number.format_e164(), "+38615846100");
        assert_eq!(number.to_string(), "+386 1 584 61 00");

        let number = FluentPhoneNumber::parse("+385 1 4802 500", "HR").unwrap();
        assert_eq!(number.format_national(), "01 4802 500");
    }
}
