use crate::barcode::BarPattern;
use crate::builder::QR;

use super::{escape_xml, BarcodeStyle, QrStyle};

const SVG_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

// QR
//------------------------------------------------------------------------------

/// SVG markup for `qr`. The viewport is measured in modules, one subpath per
/// horizontal run of dark modules, surrounded by `margin` light modules.
pub fn qr_to_svg(qr: &QR, style: &QrStyle) -> String {
    let w = qr.width();
    // Saturating, so oversized styles give a huge viewport rather than a panic
    let view = w.saturating_add(style.margin.saturating_mul(2));
    let px = view.saturating_mul(style.module_size);

    let mut res = String::from(SVG_HEADER);
    res += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{px}\" height=\"{px}\" \
         viewBox=\"0 0 {view} {view}\" shape-rendering=\"crispEdges\">\n"
    );
    res += &format!(
        "\t<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        escape_xml(&style.light_color)
    );

    let mut subpaths = Vec::new();
    for r in 0..w {
        let mut c = 0;
        while c < w {
            if !qr.get(r as i16, c as i16).is_dark() {
                c += 1;
                continue;
            }
            let start = c;
            while c < w && qr.get(r as i16, c as i16).is_dark() {
                c += 1;
            }
            let (x, y) = (start.saturating_add(style.margin), r.saturating_add(style.margin));
            let len = c - start;
            subpaths.push(format!("M{x},{y}h{len}v1h-{len}z"));
        }
    }

    res += &format!(
        "\t<path d=\"{}\" fill=\"{}\"/>\n",
        subpaths.join(" "),
        escape_xml(&style.dark_color)
    );
    res += "</svg>\n";
    res
}

// Barcode
//------------------------------------------------------------------------------

/// SVG markup for a 1-D symbol: one `<rect>` per bar run, with the encoded
/// text centred underneath when `show_text` is set.
pub fn barcode_to_svg(bars: &BarPattern, style: &BarcodeStyle) -> String {
    let margins = style.margin.saturating_mul(2);
    let natural_w = bars.len().saturating_mul(style.bar_width).saturating_add(margins);
    let text_h =
        if style.show_text { style.font_size.saturating_add(style.font_size / 2) } else { 0 };
    let total_h = style.height.saturating_add(text_h).saturating_add(margins);
    let width = style.width.unwrap_or(natural_w);

    let mut res = String::from(SVG_HEADER);
    res += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{width}\" \
         height=\"{total_h}\" viewBox=\"0 0 {natural_w} {total_h}\" \
         preserveAspectRatio=\"none\" shape-rendering=\"crispEdges\">\n"
    );
    res += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";

    for (_, start, len) in bars.runs().into_iter().filter(|&(bar, ..)| bar) {
        res += &format!(
            "\t<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#000000\"/>\n",
            style.margin.saturating_add(start.saturating_mul(style.bar_width)),
            style.margin,
            len.saturating_mul(style.bar_width),
            style.height
        );
    }

    if style.show_text {
        res += &format!(
            "\t<text x=\"{}\" y=\"{}\" font-family=\"monospace\" font-size=\"{}\" \
             text-anchor=\"middle\" fill=\"#000000\">{}</text>\n",
            natural_w / 2,
            style.margin.saturating_add(style.height).saturating_add(style.font_size),
            style.font_size,
            escape_xml(&bars.data)
        );
    }

    res += "</svg>\n";
    res
}

#[cfg(test)]
mod svg_tests {
    use super::{barcode_to_svg, qr_to_svg};
    use crate::barcode::{generate, Symbology};
    use crate::builder::QRBuilder;
    use crate::common::{ECLevel, MaskPattern};
    use crate::render::{BarcodeStyle, QrStyle};

    #[test]
    fn test_qr_svg() {
        let qr = QRBuilder::new(b"HELLO WORLD").ec_level(ECLevel::Q).build().unwrap();
        let style = QrStyle { module_size: 2, margin: 1, ..Default::default() };
        let svg = qr_to_svg(&qr, &style);
        assert!(svg.contains("width=\"46\" height=\"46\" viewBox=\"0 0 23 23\""));
        assert!(svg.contains("fill=\"#FFFFFF\"/>"));
        // Top row starts with the 7 module finder edge
        assert!(svg.contains("<path d=\"M1,1h7v1h-7z M"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_qr_svg_is_stable() {
        let qr = QRBuilder::new(b"stable").mask(MaskPattern::new(5)).build().unwrap();
        let before = qr.to_matrix();
        let style = QrStyle::default();
        assert_eq!(qr_to_svg(&qr, &style), qr_to_svg(&qr, &style));
        assert_eq!(qr.to_matrix(), before);
    }

    #[test]
    fn test_qr_svg_escapes_colors() {
        let qr = QRBuilder::new(b"1").build().unwrap();
        let style = QrStyle { dark_color: "\"><x".to_string(), ..Default::default() };
        let svg = qr_to_svg(&qr, &style);
        assert!(svg.contains("fill=\"&quot;&gt;&lt;x\""));
    }

    #[test]
    fn test_barcode_svg() {
        let bars = generate("HELLO", Symbology::Code128).unwrap();
        let style =
            BarcodeStyle { bar_width: 1, margin: 0, show_text: false, ..Default::default() };
        let svg = barcode_to_svg(&bars, &style);
        assert!(svg.contains("viewBox=\"0 0 88 100\""));
        // Start B is 11010010000
        assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"2\" height=\"100\""));
        assert!(svg.contains("<rect x=\"3\" y=\"0\" width=\"1\" height=\"100\""));
        assert!(svg.contains("<rect x=\"6\" y=\"0\" width=\"1\" height=\"100\""));
        assert!(!svg.contains("<text"));
        let bar_count = bars.runs().iter().filter(|r| r.0).count();
        assert_eq!(svg.matches("fill=\"#000000\"").count(), bar_count);
    }

    #[test]
    fn test_barcode_svg_text() {
        let bars = generate("A&B", Symbology::Code128).unwrap();
        let svg = barcode_to_svg(&bars, &BarcodeStyle { width: Some(300), ..Default::default() });
        assert!(svg.contains("width=\"300\""));
        assert!(svg.contains(">A&amp;B</text>"));
    }

    #[test]
    fn test_oversized_styles_do_not_overflow() {
        let qr = QRBuilder::new(b"HI").build().unwrap();
        let style = QrStyle { module_size: usize::MAX, ..Default::default() };
        let svg = qr_to_svg(&qr, &style);
        assert!(svg.contains(&format!("width=\"{}\"", usize::MAX)));

        let bars = generate("HI", Symbology::Code128).unwrap();
        let style =
            BarcodeStyle { bar_width: usize::MAX, font_size: usize::MAX, ..Default::default() };
        assert!(barcode_to_svg(&bars, &style).ends_with("</svg>\n"));
    }
}
