//! Barcode generation
//!
//! [`FluentBarcode`] wraps a code value plus rendering options and turns
//! them into SVG, PNG, GIF or ASCII output, either as raw contents, as a
//! `data:` URI for direct embedding in an `img` element, or as a file.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use barcoders::generators::ascii::ASCII;
use barcoders::generators::image::{Color as ImageColor, Image, Rotation};
use barcoders::generators::svg::{Color as SvgColor, SVG};
use barcoders::sym::codabar::Codabar;
use barcoders::sym::code128::Code128;
use barcoders::sym::code39::Code39;
use barcoders::sym::code93::Code93;
use barcoders::sym::ean13::EAN13;
use barcoders::sym::ean8::EAN8;
use barcoders::sym::tf::TF;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, UtilsError};

/// Supported barcode symbologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Symbology {
    /// International Article Number, 12 or 13 digits
    #[default]
    Ean13,
    /// Short-form EAN, 7 or 8 digits
    Ean8,
    Code39,
    Code93,
    Code128,
    Codabar,
    /// Interleaved 2 of 5; requires an even number of digits
    Itf,
}

impl Symbology {
    /// Get the display name of the symbology
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbology::Ean13 => "EAN-13",
            Symbology::Ean8 => "EAN-8",
            Symbology::Code39 => "Code 39",
            Symbology::Code93 => "Code 93",
            Symbology::Code128 => "Code 128",
            Symbology::Codabar => "Codabar",
            Symbology::Itf => "ITF",
        }
    }

    /// Parse a symbology name; case, spaces and hyphens are ignored
    pub fn from_str(value: &str) -> Option<Self> {
        let normalized: String = value
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "ean13" => Some(Symbology::Ean13),
            "ean8" => Some(Symbology::Ean8),
            "code39" => Some(Symbology::Code39),
            "code93" => Some(Symbology::Code93),
            "code128" => Some(Symbology::Code128),
            "codabar" => Some(Symbology::Codabar),
            "itf" | "interleaved2of5" => Some(Symbology::Itf),
            _ => None,
        }
    }
}

/// Output formats for rendered barcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BarcodeFormat {
    #[default]
    Svg,
    Png,
    Gif,
    /// Text rendering for terminals and logs
    Ascii,
}

impl BarcodeFormat {
    /// Get the format name
    pub fn as_str(&self) -> &'static str {
        match self {
            BarcodeFormat::Svg => "svg",
            BarcodeFormat::Png => "png",
            BarcodeFormat::Gif => "gif",
            BarcodeFormat::Ascii => "ascii",
        }
    }

    /// File extension used when saving
    pub fn extension(&self) -> &'static str {
        match self {
            BarcodeFormat::Svg => "svg",
            BarcodeFormat::Png => "png",
            BarcodeFormat::Gif => "gif",
            BarcodeFormat::Ascii => "txt",
        }
    }

    /// Map a file extension back to a format
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "svg" => Some(BarcodeFormat::Svg),
            "png" => Some(BarcodeFormat::Png),
            "gif" => Some(BarcodeFormat::Gif),
            "txt" | "ascii" => Some(BarcodeFormat::Ascii),
            _ => None,
        }
    }

    /// Media type for `data:` URIs; `None` for text output
    pub fn media_type(&self) -> Option<&'static str> {
        match self {
            BarcodeFormat::Svg => Some("image/svg+xml"),
            BarcodeFormat::Png => Some("image/png"),
            BarcodeFormat::Gif => Some("image/gif"),
            BarcodeFormat::Ascii => None,
        }
    }
}

/// RGB color for barcode rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl BarcodeColor {
    /// Create a color from RGB components
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        BarcodeColor { red, green, blue }
    }

    /// Black, the default foreground
    pub fn black() -> Self {
        BarcodeColor::new(0, 0, 0)
    }

    /// White, the default background
    pub fn white() -> Self {
        BarcodeColor::new(255, 255, 255)
    }

    /// Parse a hex color, `#rrggbb` or `#rgb`, with an optional `#`
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::InvalidArgument`] for anything else.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::barcode::BarcodeColor;
    ///
    /// assert_eq!(BarcodeColor::from_hex("#336699")?, BarcodeColor::new(51, 102, 153));
    /// assert_eq!(BarcodeColor::from_hex("fff")?, BarcodeColor::white());
    /// # Ok::<(), fluent_utils::error::UtilsError>(())
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => {
                return Err(UtilsError::invalid_argument(format!(
                    "\"{hex}\" is not a hex color"
                )))
            }
        };
        let value = u32::from_str_radix(&expanded, 16).map_err(|_| {
            UtilsError::invalid_argument(format!("\"{hex}\" is not a hex color"))
        })?;
        let [_, red, green, blue] = value.to_be_bytes();
        Ok(BarcodeColor::new(red, green, blue))
    }

    fn rgba(self) -> [u8; 4] {
        [self.red, self.green, self.blue, 255]
    }
}

/// Chainable barcode builder
///
/// Defaults to an EAN-13 code rendered as SVG, 30 units tall with a
/// width factor of 2, black on white.
///
/// # Example
///
/// ```rust
/// use fluent_utils::barcode::FluentBarcode;
///
/// let embedded = FluentBarcode::new("750103131130").with_height(45).embed()?;
/// assert!(embedded.starts_with("data:image/svg+xml;base64,"));
/// # Ok::<(), fluent_utils::error::UtilsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluentBarcode {
    code: String,
    symbology: Symbology,
    format: BarcodeFormat,
    height: u32,
    width_factor: u32,
    foreground: BarcodeColor,
    background: BarcodeColor,
}

impl FluentBarcode {
    /// Create a builder for the given code
    pub fn new(code: impl Into<String>) -> Self {
        FluentBarcode {
            code: code.into(),
            symbology: Symbology::default(),
            format: BarcodeFormat::default(),
            height: 30,
            width_factor: 2,
            foreground: BarcodeColor::black(),
            background: BarcodeColor::white(),
        }
    }

    /// Set the symbology
    pub fn with_symbology(mut self, symbology: Symbology) -> Self {
        self.symbology = symbology;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: BarcodeFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the bar height in pixels
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the width of a single bar module in pixels
    pub fn with_width_factor(mut self, width_factor: u32) -> Self {
        self.width_factor = width_factor;
        self
    }

    /// Set the bar color
    pub fn with_foreground(mut self, color: BarcodeColor) -> Self {
        self.foreground = color;
        self
    }

    /// Set the background color
    pub fn with_background(mut self, color: BarcodeColor) -> Self {
        self.background = color;
        self
    }

    /// The wrapped code value
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The configured symbology
    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    /// The configured output format
    pub fn format(&self) -> BarcodeFormat {
        self.format
    }

    /// The configured bar height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The configured module width
    pub fn width_factor(&self) -> u32 {
        self.width_factor
    }

    /// Render the barcode to raw contents in the configured format
    ///
    /// SVG and ASCII output is UTF-8 text; PNG and GIF are binary.
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::Barcode`] when the code is not valid for the
    /// configured symbology or rendering fails.
    pub fn render(&self) -> Result<Vec<u8>> {
        self.render_as(self.format)
    }

    /// Render to a string usable in an `img` element `src` attribute
    ///
    /// Image formats come back as a base64 `data:` URI; ASCII output is
    /// returned as plain text.
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::Barcode`] when rendering fails.
    pub fn embed(&self) -> Result<String> {
        use base64::{engine::general_purpose, Engine as _};

        let contents = self.render()?;
        match self.format.media_type() {
            Some(media_type) => Ok(format!(
                "data:{media_type};base64,{}",
                general_purpose::STANDARD.encode(&contents)
            )),
            None => Ok(String::from_utf8_lossy(&contents).into_owned()),
        }
    }

    /// Render and write to the given path
    ///
    /// When the file extension names a known format it wins over the
    /// configured one, so `save("code.png")` writes PNG contents without
    /// any reconfiguration.
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::Barcode`] when rendering fails and
    /// [`UtilsError::Io`] when the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let format = path
            .extension()
            .and_then(|extension| extension.to_str())
            .and_then(BarcodeFormat::from_extension)
            .unwrap_or(self.format);

        debug!(path = %path.display(), format = format.as_str(), "saving barcode");
        fs::write(path, self.render_as(format)?)?;
        Ok(path.to_path_buf())
    }

    /// Render and write to a uniquely named file in the system temp
    /// directory, named after the code with the format extension
    ///
    /// The file persists after the call; the caller owns the cleanup.
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::Barcode`] when rendering fails and
    /// [`UtilsError::Io`] when the file cannot be created.
    pub fn save_temp(&self) -> Result<PathBuf> {
        let contents = self.render()?;

        let mut file = tempfile::Builder::new()
            .prefix(self.code.as_str())
            .suffix(&format!(".{}", self.format.extension()))
            .tempfile()?;
        file.write_all(&contents)?;

        let (_file, path) = file.keep().map_err(|err| UtilsError::from(err.error))?;
        debug!(path = %path.display(), "saved barcode to a temp file");
        Ok(path)
    }

    fn render_as(&self, format: BarcodeFormat) -> Result<Vec<u8>> {
        let encoded = self.encode()?;

        match format {
            BarcodeFormat::Svg => {
                let generator = SVG {
                    height: self.height,
                    xdim: self.width_factor,
                    foreground: SvgColor::new(self.foreground.rgba()),
                    background: SvgColor::new(self.background.rgba()),
                    xmlns: None,
                };
                Ok(generator.generate(&encoded[..])?.into_bytes())
            }
            BarcodeFormat::Png => {
                let generator = Image::PNG {
                    height: self.height,
                    xdim: self.width_factor,
                    rotation: Rotation::Zero,
                    foreground: ImageColor::new(self.foreground.rgba()),
                    background: ImageColor::new(self.background.rgba()),
                };
                Ok(generator.generate(&encoded[..])?)
            }
            BarcodeFormat::Gif => {
                let generator = Image::GIF {
                    height: self.height,
                    xdim: self.width_factor,
                    rotation: Rotation::Zero,
                    foreground: ImageColor::new(self.foreground.rgba()),
                    background: ImageColor::new(self.background.rgba()),
                };
                Ok(generator.generate(&encoded[..])?)
            }
            BarcodeFormat::Ascii => {
                let generator = ASCII::new();
                Ok(generator.generate(&encoded[..])?.into_bytes())
            }
        }
    }

    fn encode(&self) -> Result<Vec<u8>> {
        let encoded = match self.symbology {
            Symbology::Ean13 => EAN13::new(&self.code)?.encode(),
            Symbology::Ean8 => EAN8::new(&self.code)?.encode(),
            Symbology::Code39 => Code39::new(&self.code)?.encode(),
            Symbology::Code93 => Code93::new(&self.code)?.encode(),
            Symbology::Code128 => Code128::new(&self.charset_prefixed())?.encode(),
            Symbology::Codabar => Codabar::new(&self.code)?.encode(),
            Symbology::Itf => TF::interleaved(&self.code)?.encode(),
        };
        Ok(encoded)
    }

    // Code 128 input selects one of three character sets with a marker;
    // plain input defaults to charset B
    fn charset_prefixed(&self) -> String {
        if self.code.starts_with(['À', 'Ɓ', 'Ć']) {
            self.code.clone()
        } else {
            format!("Ɓ{}", self.code)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let barcode = FluentBarcode::new("750103131130");

        assert_eq!(barcode.code(), "750103131130");
        assert_eq!(barcode.symbology(), Symbology::Ean13);
        assert_eq!(barcode.format(), BarcodeFormat::Svg);
        assert_eq!(barcode.height(), 30);
        assert_eq!(barcode.width_factor(), 2);
    }

    #[test]
    fn test_builder() {
        let barcode = FluentBarcode::new("750103131130")
            .with_format(BarcodeFormat::Png)
            .with_height(45)
            .with_symbology(Symbology::Ean13)
            .with_width_factor(3)
            .with_foreground(BarcodeColor::new(55, 55, 55))
            .with_background(BarcodeColor::white());

        assert_eq!(barcode.format(), BarcodeFormat::Png);
        assert_eq!(barcode.height(), 45);
        assert_eq!(barcode.symbology(), Symbology::Ean13);
        assert_eq!(barcode.width_factor(), 3);
    }

    #[test]
    fn test_render_svg() {
        let contents = FluentBarcode::new("750103131130").render().unwrap();
        let text = String::from_utf8(contents).unwrap();

        assert!(text.contains("<svg"));
        assert!(text.contains("</svg>"));
    }

    #[test]
    fn test_render_png_magic_bytes() {
        let contents = FluentBarcode::new("750103131130")
            .with_format(BarcodeFormat::Png)
            .render()
            .unwrap();

        assert_eq!(&contents[..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn test_embed() {
        let barcode = FluentBarcode::new("750103131130");

        let svg = barcode.embed().unwrap();
        assert!(svg.starts_with("data:image/svg+xml;base64,"));
        assert!(svg.len() > "data:image/svg+xml;base64,".len());

        let png = barcode
            .clone()
            .with_format(BarcodeFormat::Png)
            .embed()
            .unwrap();
        assert!(png.starts_with("data:image/png;base64,"));

        let ascii = barcode.with_format(BarcodeFormat::Ascii).embed().unwrap();
        assert!(!ascii.starts_with("data:"));
        assert!(ascii.contains('#'));
    }

    #[test]
    fn test_other_symbologies_render() {
        let cases = [
            (Symbology::Ean8, "9031101"),
            (Symbology::Code39, "TEST-39"),
            (Symbology::Code93, "TEST93"),
            (Symbology::Code128, "750103131130"),
            (Symbology::Codabar, "A40156B"),
            (Symbology::Itf, "12345678"),
        ];
        for (symbology, code) in cases {
            let result = FluentBarcode::new(code).with_symbology(symbology).render();
            assert!(result.is_ok(), "{} failed to render", symbology.as_str());
        }
    }

    #[test]
    fn test_invalid_code_is_rejected() {
        let err = FluentBarcode::new("not-a-number").render().unwrap_err();

        assert!(matches!(err, UtilsError::Barcode(_)));
    }

    #[test]
    fn test_save_infers_format_from_extension() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("750103131130.png");

        let saved = FluentBarcode::new("750103131130").save(&target).unwrap();

        assert_eq!(saved, target);
        let contents = fs::read(&saved).unwrap();
        assert_eq!(&contents[..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn test_save_temp() {
        let saved = FluentBarcode::new("750103131130").save_temp().unwrap();

        assert!(saved.exists());
        let name = saved.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("750103131130"));
        assert!(name.ends_with(".svg"));

        fs::remove_file(saved).unwrap();
    }

    #[test]
    fn test_symbology_names() {
        let cases = [
            (Symbology::Ean13, "EAN-13"),
            (Symbology::Ean8, "EAN-8"),
            (Symbology::Code39, "Code 39"),
            (Symbology::Code93, "Code 93"),
            (Symbology::Code128, "Code 128"),
            (Symbology::Codabar, "Codabar"),
            (Symbology::Itf, "ITF"),
        ];
        for (symbology, name) in cases {
            assert_eq!(symbology.as_str(), name);
            assert_eq!(Symbology::from_str(name), Some(symbology));
        }
        assert_eq!(Symbology::from_str("ean13"), Some(Symbology::Ean13));
        assert_eq!(Symbology::from_str("upc"), None);
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(BarcodeFormat::Svg.extension(), "svg");
        assert_eq!(BarcodeFormat::Ascii.extension(), "txt");

        assert_eq!(BarcodeFormat::from_extension("PNG"), Some(BarcodeFormat::Png));
        assert_eq!(BarcodeFormat::from_extension("txt"), Some(BarcodeFormat::Ascii));
        assert_eq!(BarcodeFormat::from_extension("jpg"), None);
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(BarcodeColor::from_hex("#000000").unwrap(), BarcodeColor::black());
        assert_eq!(BarcodeColor::from_hex("#fff").unwrap(), BarcodeColor::white());
        assert_eq!(
            BarcodeColor::from_hex("336699").unwrap(),
            BarcodeColor::new(51, 102, 153)
        );

        assert!(BarcodeColor::from_hex("#12345").unwrap_err().is_invalid_argument());
        assert!(BarcodeColor::from_hex("#gggggg").unwrap_err().is_invalid_argument());
        assert!(BarcodeColor::from_hex("").unwrap_err().is_invalid_argument());
    }
}
