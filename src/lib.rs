//! # symbolism
//!
//! A Rust library for encoding QR codes and 1-D barcodes into SVG, ASCII art and data URLs.
//! QR symbols carry genuine Reed-Solomon error correction and a penalty-scored mask; the 1-D
//! symbologies (Code128, Code39, EAN-13, UPC-A) come with their check symbols.
//!
//! ## Features
//!
//! - **QR Code Generation**: Numeric, alphanumeric and byte modes, versions 1-40, EC levels L/M/Q/H
//! - **Barcode Generation**: Code128 (set B), Code39, EAN-13 and UPC-A bar patterns
//! - **Check Digits**: Mod-103 and mod-10 check symbols, plus EAN-13 / UPC-A validators
//! - **Rendering**: SVG, terminal friendly ASCII and base64 `data:` URLs
//! - **JSON Requests**: Hosts can pass requests straight through as JSON
//!
//! ## Quick Start
//!
//! ### QR Code Generation
//!
//! ```rust
//! use symbolism::{render, ECLevel, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Version and mask are chosen automatically, EC level defaults to M
//! let qr = QRBuilder::new(b"HELLO WORLD").ec_level(ECLevel::Q).build()?;
//! assert_eq!(qr.width(), 21);
//!
//! let svg = render::qr_to_svg(&qr, &render::QrStyle::default());
//! assert!(svg.starts_with("<?xml"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Barcodes
//!
//! ```rust
//! use symbolism::barcode::{generate, validate_ean13, Symbology};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bars = generate("400638133393", Symbology::EAN13)?;
//! assert_eq!(bars.data, "4006381333931");
//! assert_eq!(bars.pattern.len(), 95);
//! assert!(validate_ean13(&bars.data));
//! # Ok(())
//! # }
//! ```
//!
//! ### JSON Requests
//!
//! ```rust
//! use symbolism::SymbolRequest;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = r#"{
//!     "data": { "text": "hello" },
//!     "options": { "errorCorrection": "H", "format": "matrix" }
//! }"#;
//! let req = SymbolRequest::from_json(json)?;
//! let out = req.generate()?;
//! assert!(out.to_json()?.contains("\"errorCorrection\":\"H\""));
//! # Ok(())
//! # }
//! ```
//!
//! ## QR Code Components
//!
//! ### Versions
//! - Versions 1-40, with sizes from 21x21 to 177x177 modules
//!
//! ### Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction
//!
//! ### Masks
//! Eight XOR patterns over the data modules. Unless one is set, all eight are scored with the
//! four standard penalty rules and the lowest score wins.
//!
//! ## Progress Reports
//!
//! Enable the `report` feature to print the stages of every QR build to stdout.

#![allow(clippy::items_after_test_module)]

pub mod barcode;
pub mod builder;
pub(crate) mod common;
pub mod render;
pub mod request;

pub use barcode::{BarPattern, Symbology};
pub use builder::{QRBuilder, QR};
pub use common::codec::Mode;
pub use common::error::{SymbolError, SymbolResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{Color, ECLevel, Version};
pub use request::{
    generate_barcode, generate_qr, render_barcode_svg, BarcodeFormat, BarcodeOptions, MaskChoice,
    OutputFormat, QrMatrix, QrOptions, QrOutput, RenderOutput, SymbolRequest, VersionChoice,
};
