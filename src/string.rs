//! Fluent text transforms
//!
//! [`FluentString`] wraps an owned string; transforms consume `self` and
//! return the updated value so calls chain. All operations count
//! characters, not bytes, and survive multi-byte input. Compiled patterns
//! live in module-level statics.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::datetime::{self, TimeRef};
use crate::email;
use crate::error::{Result, UtilsError};

/// Typical meta description limit used by search engines
pub const META_DESCRIPTION_LENGTH: usize = 155;

/// Unicode line break characters, including the less common ones HTML
/// treats as plain whitespace
static LINE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| static_regex(r"[\r\n\x0B\x0C\x{85}\x{2028}\x{2029}]+"));

/// Anything that looks like an opening or closing HTML tag
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| static_regex("</?[a-zA-Z][^>]*>"));

static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| static_regex("#([0-9A-Za-z]+)"));

static CAMEL_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| static_regex("(^|[a-z])([A-Z])"));

static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| static_regex(r"\s{2,}"));

/// Trailing whitespace plus an optional cut-off word
static TRAILING_WORD_RE: LazyLock<Regex> = LazyLock::new(|| static_regex(r"\s+?(\S+)?$"));

/// Street name (ending with a dot, comma or letter), an optional
/// space-or-slash separator and a house number with an optional single
/// trailing letter
static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| static_regex(r"(?i)^(.+[.,\p{L}]+)[ /]*(\d+[ /]*\p{L}?)$"));

/// `{%...}` placeholders holding a strftime pattern
static TIME_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| static_regex(r"\{(%[^{}]+)\}"));

fn static_regex(pattern: &str) -> Regex {
    #[allow(clippy::expect_used)]
    Regex::new(pattern).expect("static pattern compiles")
}

fn invisible_or_whitespace(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '\u{feff}' | '\u{200b}' | '\u{200c}' | '\u{200d}' | '\u{2060}'
        )
}

fn trailing_junk(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '.' | ';' | ':' | '!' | '?')
}

/// Configuration for [`FluentString::truncate`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruncateOptions {
    /// Text appended at the cut; counts against the length limit
    pub ellipsis: String,
    /// Cut mid-word instead of backtracking to a word boundary
    pub break_words: bool,
    /// Keep both ends of the text around a centered ellipsis
    pub middle: bool,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        TruncateOptions {
            ellipsis: "...".to_string(),
            break_words: false,
            middle: false,
        }
    }
}

impl TruncateOptions {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the appended ellipsis text
    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Allow cutting in the middle of a word
    pub fn with_break_words(mut self, break_words: bool) -> Self {
        self.break_words = break_words;
        self
    }

    /// Truncate in the middle of the text instead of at the end
    pub fn with_middle(mut self, middle: bool) -> Self {
        self.middle = middle;
        self
    }
}

/// A street address split into its name and house number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street name, internal punctuation preserved
    pub street: String,
    /// House number with an optional trailing letter; `None` when the
    /// input has no recognizable number
    pub number: Option<String>,
}

/// Chainable wrapper over an owned string
///
/// # Example
///
/// ```rust
/// use fluent_utils::string::FluentString;
///
/// let slug = FluentString::from("  Some  Article Title ")
///     .clean()
///     .camel_to_snake();
/// assert_eq!(slug.as_str(), "Some Article Title");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FluentString {
    value: String,
}

impl FluentString {
    /// Wrap a string value
    pub fn new(value: impl Into<String>) -> Self {
        FluentString {
            value: value.into(),
        }
    }

    /// Borrow the wrapped text
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Unwrap into the owned string
    pub fn into_inner(self) -> String {
        self.value
    }

    /// Character count of the wrapped text
    pub fn length(&self) -> usize {
        self.value.chars().count()
    }

    /// Whether the text is empty after trimming whitespace and invisible
    /// formatting characters
    pub fn is_empty(&self) -> bool {
        self.value.trim_matches(invisible_or_whitespace).is_empty()
    }

    /// Whether the text contains anything that looks like an HTML tag
    pub fn has_html_tags(&self) -> bool {
        TAG_RE.is_match(&self.value)
    }

    /// Best-effort conversion of HTML to plain text
    ///
    /// Existing line breaks are dropped first since they carry no meaning
    /// in HTML; `<br>` variants become one newline, paragraph boundaries
    /// become two, remaining tags are stripped and the result is trimmed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::string::FluentString;
    ///
    /// let plain = FluentString::from("<p>First.</p><p>Second,<br/>third.</p>").html_to_plain();
    /// assert_eq!(plain.as_str(), "First.\n\nSecond,\nthird.");
    /// ```
    pub fn html_to_plain(self) -> Self {
        let text = LINE_BREAK_RE.replace_all(&self.value, "");
        let text = text
            .replace("<br>", "\n")
            .replace("<br/>", "\n")
            .replace("<br />", "\n")
            .replace("</p><p>", "\n\n")
            .replace("<p>", "\n\n")
            .replace("</p>", "\n\n");
        let text = TAG_RE.replace_all(&text, "");
        FluentString::new(text.as_ref()).trim()
    }

    /// Wrap `#hashtag` occurrences in anchor elements
    ///
    /// Tags are runs of ASCII letters and digits; the link target is the
    /// given prefix with the tag appended.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::string::FluentString;
    ///
    /// let linked = FluentString::from("check #this out").link_hashtags("https://example.com/");
    /// assert_eq!(
    ///     linked.as_str(),
    ///     "check <a class=\"hashtag\" href=\"https://example.com/this\" data-tag=\"this\">#this</a> out"
    /// );
    /// ```
    pub fn link_hashtags(self, url_prefix: &str) -> Self {
        let replaced = HASHTAG_RE.replace_all(&self.value, |caps: &Captures| {
            let tag = &caps[1];
            format!(
                "<a class=\"hashtag\" href=\"{url_prefix}{tag}\" data-tag=\"{tag}\">#{tag}</a>"
            )
        });
        FluentString::new(replaced.into_owned())
    }

    /// Convert camelCase or PascalCase to snake_case
    pub fn camel_to_snake(self) -> Self {
        let converted = CAMEL_BOUNDARY_RE.replace_all(&self.value, |caps: &Captures| {
            let head = &caps[1];
            let boundary = caps[2].to_lowercase();
            if head.is_empty() {
                boundary
            } else {
                format!("{head}_{boundary}")
            }
        });
        FluentString::new(converted.into_owned())
    }

    /// Convert snake_case to camelCase or PascalCase
    ///
    /// # Arguments
    ///
    /// * `lower_first` - Keep the first character lowercase (camelCase);
    ///   `false` gives PascalCase
    pub fn snake_to_camel(self, lower_first: bool) -> Self {
        let joined: String = self
            .value
            .split('_')
            .filter(|segment| !segment.is_empty())
            .map(uppercase_first_char)
            .collect();
        if lower_first {
            FluentString::new(lowercase_first_char(&joined))
        } else {
            FluentString::new(joined)
        }
    }

    /// Common cleanup for user input: trim, then collapse every run of
    /// two or more whitespace characters into a single space
    pub fn clean(self) -> Self {
        let trimmed = self.trim();
        let collapsed = WHITESPACE_RUN_RE.replace_all(&trimmed.value, " ");
        FluentString::new(collapsed.into_owned())
    }

    /// Strip leading and trailing whitespace together with invisible
    /// formatting characters (BOM, zero-width spaces and joiners, word
    /// joiner)
    pub fn trim(self) -> Self {
        FluentString::new(self.value.trim_matches(invisible_or_whitespace))
    }

    /// Truncate to at most `length` characters, ellipsis included
    ///
    /// `truncate(0)` and input already within the limit return the text
    /// unchanged. The default mode backtracks to a word boundary and
    /// drops trailing punctuation before appending the ellipsis;
    /// `break_words` cuts mid-word; `middle` keeps both ends of the text
    /// around a centered ellipsis.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::string::{FluentString, TruncateOptions};
    ///
    /// let cut = FluentString::from("This is a string that should be truncated after 20 characters.")
    ///     .truncate(20, &TruncateOptions::default());
    /// assert_eq!(cut.as_str(), "This is a string...");
    /// ```
    pub fn truncate(self, length: usize, options: &TruncateOptions) -> Self {
        if length == 0 {
            return self;
        }
        let total = self.length();
        if total <= length {
            return self;
        }

        let etc = options.ellipsis.as_str();
        let budget = length.saturating_sub(etc.chars().count());

        if options.middle {
            let front: String = self.value.chars().take(budget / 2).collect();
            let back: String = self.value.chars().skip(total - budget / 2).collect();
            return FluentString::new(format!("{front}{etc}{back}"));
        }

        let mut cut: String = if options.break_words {
            self.value.chars().take(budget).collect()
        } else {
            // Probe one past the budget so a boundary right at the cut
            // survives, then drop the trailing partial word
            let probe: String = self.value.chars().take(budget + 1).collect();
            let bounded = TRAILING_WORD_RE.replace(&probe, "");
            bounded.chars().take(budget).collect()
        };

        let keep = cut.trim_end_matches(trailing_junk).len();
        cut.truncate(keep);
        cut.push_str(etc);
        FluentString::new(cut)
    }

    /// Split into chunks of at most `size` characters
    ///
    /// Plain mode slices the text into fixed-size pieces. With
    /// `preserve_words`, whole words are packed greedily and a single
    /// word longer than `size` is abbreviated to `size - 1` characters
    /// plus a dot.
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::InvalidArgument`] for sizes below 2.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::string::FluentString;
    ///
    /// let chunks = FluentString::from("Something short").chunks(6, true).unwrap();
    /// assert_eq!(chunks, vec!["Somet.", "short"]);
    /// ```
    pub fn chunks(&self, size: usize, preserve_words: bool) -> Result<Vec<String>> {
        if size < 2 {
            return Err(UtilsError::invalid_argument(
                "chunk size must be at least 2",
            ));
        }

        if !preserve_words {
            let chars: Vec<char> = self.value.chars().collect();
            return Ok(chars.chunks(size).map(|c| c.iter().collect()).collect());
        }

        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0usize;
        for word in self.value.split_whitespace() {
            let word_len = word.chars().count();
            if word_len > size {
                if !current.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let mut abbreviated: String = word.chars().take(size - 1).collect();
                abbreviated.push('.');
                chunks.push(abbreviated);
            } else if current.is_empty() {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= size {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                chunks.push(std::mem::take(&mut current));
                current.push_str(word);
                current_len = word_len;
            }
        }
        if !current.is_empty() {
            chunks.push(current);
        }
        Ok(chunks)
    }

    /// Replace literal `{key}` placeholders with their values
    ///
    /// Keys without a pair in the text, and text without a matching key,
    /// are left untouched.
    pub fn parse_placeholders(self, placeholders: &[(&str, &str)]) -> Self {
        let mut value = self.value;
        for (key, replacement) in placeholders {
            value = value.replace(&format!("{{{key}}}"), replacement);
        }
        FluentString::new(value)
    }

    /// Render `{%pattern}` placeholders through the strftime engine
    ///
    /// Each placeholder body is a strftime pattern (`{%Y}`, `{%H}:{%M}`)
    /// evaluated at the given instant. Patterns the engine rejects are
    /// left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::string::FluentString;
    ///
    /// let stamped = FluentString::from("backup-{%Y}-{%m}")
    ///     .parse_time_placeholders("2023-01-24 17:04:12".into());
    /// assert_eq!(stamped.as_str(), "backup-2023-01");
    /// ```
    pub fn parse_time_placeholders(self, at: TimeRef) -> Self {
        let Some(moment) = datetime::resolve(&at) else {
            return self;
        };
        let replaced = TIME_PLACEHOLDER_RE.replace_all(&self.value, |caps: &Captures| {
            match datetime::render_plain(&moment, &caps[1]) {
                Some(rendered) => rendered,
                None => caps[0].to_string(),
            }
        });
        FluentString::new(replaced.into_owned())
    }

    /// Best-effort split of a german-style address into street name and
    /// house number
    ///
    /// The house number starts with a digit and may carry a single
    /// trailing letter; spaces inside it are dropped (`20 a` becomes
    /// `20a`). When no house number is recognized the whole sanitized
    /// input becomes the street and the number is `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::string::FluentString;
    ///
    /// let address = FluentString::from("Pot v X 123b").to_address();
    /// assert_eq!(address.street, "Pot v X");
    /// assert_eq!(address.number.as_deref(), Some("123b"));
    /// ```
    pub fn to_address(&self) -> Address {
        let stripped = self.value.trim_matches(|c: char| matches!(c, '.' | ','));
        let sanitized = FluentString::new(stripped).clean().into_inner();

        match ADDRESS_RE.captures(&sanitized) {
            Some(caps) => {
                let raw_number = caps[2].to_string();
                let mut street = caps[1].trim_matches(',').to_string();

                // Drop a duplicated house number trailing the street part
                if street.to_lowercase().ends_with(&raw_number.to_lowercase()) {
                    let keep = street.chars().count() - raw_number.chars().count();
                    street = street
                        .chars()
                        .take(keep)
                        .collect::<String>()
                        .trim_end()
                        .to_string();
                }

                Address {
                    street,
                    number: Some(raw_number.replace(' ', "")),
                }
            }
            None => Address {
                street: sanitized,
                number: None,
            },
        }
    }

    /// Uppercase the first character, Unicode-correct
    pub fn uppercase_first(self) -> Self {
        FluentString::new(uppercase_first_char(&self.value))
    }

    /// Prepare text for an HTML meta description attribute
    ///
    /// Strips tags, decodes HTML entities, collapses whitespace,
    /// truncates at a word boundary and re-escapes the result so it is
    /// safe inside a quoted attribute. [`META_DESCRIPTION_LENGTH`] is
    /// the usual limit.
    pub fn prep_meta_description(self, length: usize) -> Self {
        let without_tags = TAG_RE.replace_all(&self.value, "");
        let decoded = html_escape::decode_html_entities(without_tags.as_ref());
        let prepared = FluentString::new(decoded.as_ref())
            .clean()
            .truncate(length, &TruncateOptions::default());
        FluentString::new(html_escape::encode_safe(prepared.as_str()).into_owned())
    }

    /// Extract the YouTube video id from a link
    ///
    /// Recognizes `watch?v=`, `youtu.be/`, `/shorts/` and `/embed/` URL
    /// shapes, with or without a scheme.
    pub fn extract_youtube_hash(&self) -> Option<String> {
        let raw = self.value.trim();
        if raw.is_empty() {
            return None;
        }
        let candidate = if raw.contains("://") {
            raw.to_string()
        } else {
            format!("https://{raw}")
        };
        let parsed = Url::parse(&candidate).ok()?;

        if let Some((_, id)) = parsed.query_pairs().find(|(key, _)| key == "v") {
            if !id.is_empty() {
                return Some(id.into_owned());
            }
        }

        let host = parsed.host_str()?.to_ascii_lowercase();
        let mut segments = parsed.path_segments()?;
        if host == "youtu.be" || host.ends_with(".youtu.be") {
            let id = segments.next()?;
            if !id.is_empty() {
                return Some(id.to_string());
            }
            return None;
        }
        if host == "youtube.com" || host.ends_with(".youtube.com") {
            while let Some(segment) = segments.next() {
                if segment == "shorts" || segment == "embed" {
                    match segments.next() {
                        Some(id) if !id.is_empty() => return Some(id.to_string()),
                        _ => return None,
                    }
                }
            }
        }
        None
    }

    /// Whether the text is an e-mail address whose domain accepts mail
    ///
    /// Anything without exactly one `@` fails without a lookup; otherwise
    /// the domain is checked for MX records.
    pub fn is_email_domain_valid(&self) -> bool {
        email::is_valid_domain(&self.value)
    }
}

impl From<&str> for FluentString {
    fn from(value: &str) -> Self {
        FluentString::new(value)
    }
}

impl From<String> for FluentString {
    fn from(value: String) -> Self {
        FluentString::new(value)
    }
}

impl fmt::Display for FluentString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

fn uppercase_first_char(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn lowercase_first_char(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
