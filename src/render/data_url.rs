use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::builder::QR;

use super::{qr_to_svg, QrStyle};

const SVG_DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

/// Wraps SVG markup in a base64 `data:` URL, ready for an `<img src>`.
pub fn svg_data_url(svg: &str) -> String {
    format!("{SVG_DATA_URL_PREFIX}{}", STANDARD.encode(svg))
}

pub fn qr_to_data_url(qr: &QR, style: &QrStyle) -> String {
    svg_data_url(&qr_to_svg(qr, style))
}

#[cfg(test)]
mod data_url_tests {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    use super::{qr_to_data_url, svg_data_url};
    use crate::builder::QRBuilder;
    use crate::render::{qr_to_svg, QrStyle};

    #[test]
    fn test_svg_data_url() {
        assert_eq!(svg_data_url("<svg/>"), "data:image/svg+xml;base64,PHN2Zy8+");
    }

    #[test]
    fn test_qr_data_url_decodes_to_svg() {
        let qr = QRBuilder::new(b"https://example.com").build().unwrap();
        let style = QrStyle::default();
        let url = qr_to_data_url(&qr, &style);
        let encoded = url.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), qr_to_svg(&qr, &style));
    }
}
