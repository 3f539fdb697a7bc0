//! The single entry point for hosts. Requests arrive either as typed values or
//! as JSON, are validated once here and then dispatched to the QR builder or
//! the 1-D encoders. The loose "string or object" payload shape is resolved
//! into one canonical text field before anything is encoded.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::barcode::{self, BarPattern, Symbology};
use crate::builder::QRBuilder;
use crate::common::error::{SymbolError, SymbolResult};
use crate::common::mask::MaskPattern;
use crate::common::metadata::{ECLevel, Version};
use crate::render::{self, BarcodeStyle, QrStyle};

// Option values
//------------------------------------------------------------------------------

// "auto" or a number, as hosts send either
#[derive(Deserialize)]
#[serde(untagged)]
enum AutoOr {
    Number(i64),
    Text(String),
}

impl AutoOr {
    // None for "auto", otherwise the number, also when sent as a string
    fn resolve<E: de::Error>(self, what: &str, max: i64) -> Result<Option<u8>, E> {
        let n = match self {
            Self::Number(n) => n,
            Self::Text(s) if s.trim().eq_ignore_ascii_case("auto") => return Ok(None),
            Self::Text(s) => match s.trim().parse::<i64>() {
                Ok(n) => n,
                Err(_) => return Err(E::custom(format!("invalid {what} {s:?}"))),
            },
        };
        u8::try_from(n)
            .ok()
            .filter(|&n| i64::from(n) <= max)
            .map(Some)
            .ok_or_else(|| E::custom(format!("invalid {what} {n}, expected \"auto\" or 0..={max}")))
    }
}

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum VersionChoice {
    #[default]
    Auto,
    Fixed(Version),
}

impl<'de> Deserialize<'de> for VersionChoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match AutoOr::deserialize(deserializer)?.resolve("QR version", 40)? {
            None => Ok(Self::Auto),
            Some(v) => Version::new(v).map(Self::Fixed).map_err(de::Error::custom),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum MaskChoice {
    #[default]
    Auto,
    Fixed(MaskPattern),
}

impl<'de> Deserialize<'de> for MaskChoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match AutoOr::deserialize(deserializer)?.resolve("mask pattern", 7)? {
            None => Ok(Self::Auto),
            Some(m) => MaskPattern::try_new(m).map(Self::Fixed).map_err(de::Error::custom),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Matrix,
    #[default]
    Svg,
    Ascii,
    #[serde(alias = "dataurl")]
    Base64,
}

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarcodeFormat {
    #[default]
    Pattern,
    Svg,
}

// Options
//------------------------------------------------------------------------------

// Upper bounds keep every rendered coordinate small enough to compute and hold
const MAX_SIZE: usize = 1000;
const MAX_MARGIN: usize = 1000;
const MAX_WIDTH: usize = 100_000;

fn check_range(name: &str, value: usize, min: usize, max: usize) -> SymbolResult<()> {
    if (min..=max).contains(&value) {
        return Ok(());
    }
    Err(SymbolError::Validation(format!("{name} must be in {min}..={max}, got {value}")))
}

#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct QrOptions {
    pub error_correction: ECLevel,
    pub version: VersionChoice,
    pub mask: MaskChoice,
    pub format: OutputFormat,
    pub module_size: usize,
    pub margin: usize,
    pub dark_color: String,
    pub light_color: String,
}

impl Default for QrOptions {
    fn default() -> Self {
        let style = QrStyle::default();
        Self {
            error_correction: ECLevel::M,
            version: VersionChoice::Auto,
            mask: MaskChoice::Auto,
            format: OutputFormat::default(),
            module_size: style.module_size,
            margin: style.margin,
            dark_color: style.dark_color,
            light_color: style.light_color,
        }
    }
}

impl QrOptions {
    pub fn validate(&self) -> SymbolResult<()> {
        check_range("moduleSize", self.module_size, 1, MAX_SIZE)?;
        check_range("margin", self.margin, 0, MAX_MARGIN)?;
        if self.dark_color.trim().is_empty() || self.light_color.trim().is_empty() {
            return Err(SymbolError::Validation("colors must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn style(&self) -> QrStyle {
        QrStyle {
            module_size: self.module_size,
            margin: self.margin,
            dark_color: self.dark_color.clone(),
            light_color: self.light_color.clone(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BarcodeOptions {
    #[serde(rename = "type")]
    pub symbology: Symbology,
    pub format: BarcodeFormat,
    pub width: Option<usize>,
    pub height: usize,
    pub bar_width: usize,
    pub show_text: bool,
    pub font_size: usize,
    pub margin: usize,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        let style = BarcodeStyle::default();
        Self {
            symbology: Symbology::default(),
            format: BarcodeFormat::default(),
            width: style.width,
            height: style.height,
            bar_width: style.bar_width,
            show_text: style.show_text,
            font_size: style.font_size,
            margin: style.margin,
        }
    }
}

impl BarcodeOptions {
    pub fn validate(&self) -> SymbolResult<()> {
        if let Some(width) = self.width {
            check_range("width", width, 1, MAX_WIDTH)?;
        }
        check_range("height", self.height, 1, MAX_SIZE)?;
        check_range("barWidth", self.bar_width, 1, MAX_SIZE)?;
        check_range("fontSize", self.font_size, usize::from(self.show_text), MAX_SIZE)?;
        check_range("margin", self.margin, 0, MAX_MARGIN)
    }

    pub fn style(&self) -> BarcodeStyle {
        BarcodeStyle {
            width: self.width,
            height: self.height,
            bar_width: self.bar_width,
            show_text: self.show_text,
            font_size: self.font_size,
            margin: self.margin,
        }
    }
}

// Outputs
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrMatrix {
    pub matrix: Vec<Vec<bool>>,
    pub version: usize,
    pub size: usize,
    pub error_correction: ECLevel,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(untagged)]
pub enum QrOutput {
    Matrix(QrMatrix),
    Svg(String),
    Ascii(String),
    DataUrl(String),
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(untagged)]
pub enum RenderOutput {
    Qr(QrOutput),
    Bars(BarPattern),
    BarcodeSvg(String),
}

impl RenderOutput {
    /// Text form of the output, `None` for structured matrix and bar outputs.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Qr(QrOutput::Svg(s) | QrOutput::Ascii(s) | QrOutput::DataUrl(s)) => Some(s),
            Self::BarcodeSvg(s) => Some(s),
            Self::Qr(QrOutput::Matrix(_)) | Self::Bars(_) => None,
        }
    }

    pub fn to_json(&self) -> SymbolResult<String> {
        serde_json::to_string(self).map_err(|e| SymbolError::Internal(e.to_string()))
    }
}

// Generation
//------------------------------------------------------------------------------

fn check_data(data: &str) -> SymbolResult<()> {
    if data.is_empty() {
        return Err(SymbolError::Validation("data must not be empty".to_string()));
    }
    Ok(())
}

/// Encodes `data` as a QR symbol and renders it in `options.format`.
pub fn generate_qr(data: &str, options: &QrOptions) -> SymbolResult<QrOutput> {
    check_data(data)?;
    options.validate()?;

    let mut builder = QRBuilder::new(data.as_bytes());
    builder.ec_level(options.error_correction);
    if let VersionChoice::Fixed(v) = options.version {
        builder.version(v);
    }
    if let MaskChoice::Fixed(m) = options.mask {
        builder.mask(m);
    }
    let qr = builder.build()?;

    let style = options.style();
    let out = match options.format {
        OutputFormat::Matrix => QrOutput::Matrix(QrMatrix {
            matrix: qr.to_matrix(),
            version: *qr.version() as usize,
            size: qr.width(),
            error_correction: qr.ec_level(),
        }),
        OutputFormat::Svg => QrOutput::Svg(render::qr_to_svg(&qr, &style)),
        OutputFormat::Ascii => QrOutput::Ascii(render::qr_to_ascii(&qr, style.margin)),
        OutputFormat::Base64 => QrOutput::DataUrl(render::qr_to_data_url(&qr, &style)),
    };
    Ok(out)
}

/// Encodes `data` with the symbology in `options.symbology`.
pub fn generate_barcode(data: &str, options: &BarcodeOptions) -> SymbolResult<BarPattern> {
    check_data(data)?;
    barcode::generate(data, options.symbology)
}

/// Encodes `data` and renders the bars as SVG, regardless of `options.format`.
pub fn render_barcode_svg(data: &str, options: &BarcodeOptions) -> SymbolResult<String> {
    options.validate()?;
    let bars = generate_barcode(data, options)?;
    Ok(render::barcode_to_svg(&bars, &options.style()))
}

// Request
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SymbolRequest {
    Qr { data: String, options: QrOptions },
    Barcode { data: String, options: BarcodeOptions },
}

// Payload objects may carry the text under any of these keys, first match wins
#[derive(Deserialize)]
#[serde(untagged)]
enum RawData {
    Text(String),
    Object {
        data: Option<String>,
        text: Option<String>,
        content: Option<String>,
        code: Option<String>,
    },
}

impl RawData {
    fn resolve(self) -> SymbolResult<String> {
        match self {
            Self::Text(s) => Ok(s),
            Self::Object { data, text, content, code } => {
                data.or(text).or(content).or(code).ok_or_else(|| {
                    SymbolError::Validation(
                        "data object needs one of data, text, content or code".to_string(),
                    )
                })
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRequest {
    #[serde(default)]
    symbology: Option<String>,
    data: RawData,
    #[serde(default)]
    options: Value,
}

fn invalid_json(e: serde_json::Error) -> SymbolError {
    SymbolError::Validation(e.to_string())
}

impl SymbolRequest {
    pub fn qr(data: impl Into<String>, options: QrOptions) -> Self {
        Self::Qr { data: data.into(), options }
    }

    pub fn barcode(data: impl Into<String>, options: BarcodeOptions) -> Self {
        Self::Barcode { data: data.into(), options }
    }

    pub fn data(&self) -> &str {
        match self {
            Self::Qr { data, .. } | Self::Barcode { data, .. } => data,
        }
    }

    /// Parses `{"symbology": ..., "data": ..., "options": {...}}`.
    ///
    /// `data` is a string or an object holding the text under `data`, `text`,
    /// `content` or `code`. `symbology` is `"QR"` or a barcode type; when it is
    /// missing the request is a barcode if `options.type` is set, QR otherwise.
    pub fn from_json(json: &str) -> SymbolResult<Self> {
        let raw: RawRequest = serde_json::from_str(json).map_err(invalid_json)?;
        let data = raw.data.resolve()?;
        let options = match raw.options {
            Value::Null => Value::Object(Default::default()),
            v => v,
        };

        let barcode = match raw.symbology {
            Some(s) if s.eq_ignore_ascii_case("qr") => None,
            Some(s) => {
                let sym = serde_json::from_value::<Symbology>(Value::String(s));
                Some(Some(sym.map_err(invalid_json)?))
            }
            None if options.get("type").is_some() => Some(None),
            None => None,
        };

        let req = match barcode {
            None => {
                let options = serde_json::from_value(options).map_err(invalid_json)?;
                Self::Qr { data, options }
            }
            Some(sym) => {
                let mut options: BarcodeOptions =
                    serde_json::from_value(options).map_err(invalid_json)?;
                // An explicit symbology wins over options.type
                if let Some(sym) = sym {
                    options.symbology = sym;
                }
                Self::Barcode { data, options }
            }
        };
        req.validate()?;
        Ok(req)
    }

    pub fn validate(&self) -> SymbolResult<()> {
        check_data(self.data())?;
        match self {
            Self::Qr { options, .. } => options.validate(),
            Self::Barcode { options, .. } => options.validate(),
        }
    }

    pub fn generate(&self) -> SymbolResult<RenderOutput> {
        self.validate()?;
        match self {
            Self::Qr { data, options } => generate_qr(data, options).map(RenderOutput::Qr),
            Self::Barcode { data, options } => match options.format {
                BarcodeFormat::Pattern => {
                    generate_barcode(data, options).map(RenderOutput::Bars)
                }
                BarcodeFormat::Svg => {
                    render_barcode_svg(data, options).map(RenderOutput::BarcodeSvg)
                }
            },
        }
    }
}
