//! Fluent utilities for application plumbing
//!
//! A collection of small, chainable helpers for the repetitive parts of
//! application code: cleaning and truncating strings, locale-aware number
//! and date formatting, list manipulation with placement control,
//! directory traversal, barcode rendering, phone number handling and
//! e-mail deliverability checks.
//!
//! # Features
//!
//! - **Chainable wrappers**: `FluentString`, `FluentNumber`, `FluentArray`
//!   and friends consume and return `self`, so transforms compose
//! - **Locale-aware formatting**: numbers and dates honor BCP 47 locale
//!   tags for separators, month names and date patterns
//! - **Presentation helpers**: roman numerals, decimal file sizes, time
//!   intervals, currency and percent rendering
//! - **Barcodes**: EAN, Code 39/93/128, Codabar and ITF as SVG, PNG, GIF
//!   or ASCII, embeddable as `data:` URIs
//! - **Phone numbers**: region-validated parsing with international,
//!   national, RFC 3966 and E.164 output
//!
//! # Quick Start
//!
//! ```rust
//! use fluent_utils::{FluentNumber, FluentString, NumberFormat};
//!
//! let title = FluentString::from("  spring  sale ").clean().uppercase_first();
//! assert_eq!(title.as_str(), "Spring sale");
//!
//! let price = FluentNumber::from(1234.5).as_money("EUR", &NumberFormat::new())?;
//! assert_eq!(price, "€1,234.50");
//! # Ok::<(), fluent_utils::UtilsError>(())
//! ```

/// Library version constant
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod error;
pub mod locale;

// Fluent wrappers
pub mod array;
pub mod barcode;
pub mod datetime;
pub mod directory;
pub mod number;
pub mod phone;
pub mod string;

// Validation modules
pub mod email;

// Re-exports for convenience
pub use array::{ArrayKey, Entry, FluentArray, Match, Placement};
pub use barcode::{BarcodeColor, BarcodeFormat, FluentBarcode, Symbology};
pub use datetime::TimeRef;
pub use directory::FluentDirectory;
pub use error::{Result, UtilsError};
pub use number::{FluentNumber, Number, NumberFormat, TimeUnit};
pub use phone::FluentPhoneNumber;
pub use string::{Address, FluentString, TruncateOptions};
