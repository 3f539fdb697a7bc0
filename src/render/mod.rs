//! Text renderers for finished symbols. Rendering never fails and never
//! touches the symbol it is given.

mod ascii;
mod data_url;
mod svg;

pub use ascii::qr_to_ascii;
pub use data_url::{qr_to_data_url, svg_data_url};
pub use svg::{barcode_to_svg, qr_to_svg};

// Styles
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrStyle {
    /// Pixels per module in the SVG `width`/`height`.
    pub module_size: usize,
    /// Quiet zone in modules on every side.
    pub margin: usize,
    pub dark_color: String,
    pub light_color: String,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            module_size: 10,
            margin: 4,
            dark_color: "#000000".to_string(),
            light_color: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeStyle {
    /// Overrides the rendered width, the bars are stretched to fit.
    pub width: Option<usize>,
    pub height: usize,
    pub bar_width: usize,
    pub show_text: bool,
    pub font_size: usize,
    pub margin: usize,
}

impl Default for BarcodeStyle {
    fn default() -> Self {
        Self { width: None, height: 100, bar_width: 2, show_text: true, font_size: 14, margin: 10 }
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => res.push_str("&amp;"),
            '<' => res.push_str("&lt;"),
            '>' => res.push_str("&gt;"),
            '"' => res.push_str("&quot;"),
            '\'' => res.push_str("&apos;"),
            _ => res.push(ch),
        }
    }
    res
}
