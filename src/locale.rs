//! Locale tag resolution
//!
//! Maps user-supplied locale tags ("en", "en-US", "sl_SI") onto the two
//! locale databases the crate formats with: the CLDR number tables used by
//! the number formatter and the strftime pattern database used by the
//! date/time helpers.

use num_format::Locale as NumberLocale;
use pure_rust_locales::Locale as TimeLocale;
use tracing::warn;

use crate::error::{Result, UtilsError};

/// Default territory for bare language tags on the strftime side
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("en", "en_US"),
    ("de", "de_DE"),
    ("fr", "fr_FR"),
    ("it", "it_IT"),
    ("es", "es_ES"),
    ("pt", "pt_PT"),
    ("nl", "nl_NL"),
    ("sl", "sl_SI"),
    ("hr", "hr_HR"),
    ("sr", "sr_RS"),
    ("ru", "ru_RU"),
    ("pl", "pl_PL"),
    ("cs", "cs_CZ"),
    ("sk", "sk_SK"),
    ("hu", "hu_HU"),
    ("sv", "sv_SE"),
    ("da", "da_DK"),
    ("fi", "fi_FI"),
];

/// Normalize a locale tag to underscore form
///
/// # Example
///
/// ```rust
/// use fluent_utils::locale::normalize_tag;
///
/// assert_eq!(normalize_tag(" en-US "), "en_US");
/// ```
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('-', "_")
}

/// Resolve a tag against the CLDR number-locale table
///
/// Tries the full tag, then its hyphenated form, then the bare language
/// prefix. Regional tags whose number rules match the base language
/// ("en_US") resolve through the prefix step.
///
/// # Errors
///
/// Returns [`UtilsError::UnknownLocale`] when no candidate resolves.
pub fn number_locale(tag: &str) -> Result<NumberLocale> {
    let normalized = normalize_tag(tag);

    if let Ok(locale) = NumberLocale::from_name(&normalized) {
        return Ok(locale);
    }

    let hyphenated = normalized.replace('_', "-");
    if let Ok(locale) = NumberLocale::from_name(&hyphenated) {
        return Ok(locale);
    }

    let language = normalized.split('_').next().unwrap_or("");
    if language != normalized {
        if let Ok(locale) = NumberLocale::from_name(language) {
            return Ok(locale);
        }
    }

    Err(UtilsError::UnknownLocale(tag.to_string()))
}

/// Resolve a tag against the strftime locale database
///
/// Bare language tags go through a territory alias table ("sl" resolves as
/// "sl_SI"). Tags that still fail fall back to `en_US` with a warning, so
/// date formatting always has a working pattern set.
pub fn time_locale(tag: &str) -> TimeLocale {
    let normalized = normalize_tag(tag);

    if let Ok(locale) = TimeLocale::try_from(normalized.as_str()) {
        return locale;
    }

    let language = normalized.split('_').next().unwrap_or("");
    for (alias, full) in LANGUAGE_ALIASES {
        if *alias == language {
            if let Ok(locale) = TimeLocale::try_from(*full) {
                return locale;
            }
        }
    }

    warn!(tag, "unknown time locale, falling back to en_US");
    TimeLocale::en_US
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("en-US"), "en_US");
        assert_eq!(normalize_tag("  sl_SI "), "sl_SI");
        assert_eq!(normalize_tag("de"), "de");
    }

    #[test]
    fn test_number_locale() {
        // Bare languages resolve directly
        assert!(number_locale("en").is_ok());
        assert!(number_locale("de").is_ok());
        assert!(number_locale("sl").is_ok());

        // Regional tags resolve at worst through the language prefix
        assert!(number_locale("en_US").is_ok());
        assert!(number_locale("sl-SI").is_ok());

        // Garbage is an error
        let err = number_locale("xx_ZZ").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_time_locale() {
        // Full tags hit the database directly
        assert_eq!(time_locale("en_US"), TimeLocale::en_US);
        assert_eq!(time_locale("sl_SI"), TimeLocale::sl_SI);

        // Bare languages go through the alias table
        assert_eq!(time_locale("sl"), TimeLocale::sl_SI);
        assert_eq!(time_locale("en"), TimeLocale::en_US);

        // Unknown tags fall back
        assert_eq!(time_locale("zz"), TimeLocale::en_US);
    }
}
