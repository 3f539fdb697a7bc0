mod checksum;
mod code128;
mod code39;
mod ean;
mod tables;

pub use checksum::{
    code128_checksum, ean13_check_digit, upca_check_digit, validate_ean13, validate_upca,
};
pub use code128::encode_code128;
pub use code39::encode_code39;
pub use ean::{complete_ean13, complete_upca, encode_ean13, encode_upca};

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::common::error::SymbolResult;

// Symbology
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum Symbology {
    #[default]
    #[serde(alias = "CODE128", alias = "code128")]
    Code128,
    #[serde(alias = "CODE39", alias = "code39")]
    Code39,
    #[serde(alias = "EAN-13", alias = "ean13")]
    EAN13,
    #[serde(alias = "UPC-A", alias = "upca")]
    UPCA,
}

impl Display for Symbology {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Code128 => "Code128",
            Self::Code39 => "Code39",
            Self::EAN13 => "EAN13",
            Self::UPCA => "UPCA",
        };
        f.write_str(s)
    }
}

// Bar pattern
//------------------------------------------------------------------------------

/// Encoded 1-D symbol. `pattern` holds one character per module, `'1'` for a
/// bar and `'0'` for a space. `data` is the text the bars carry, which can
/// differ from the input: Code39 uppercases, EAN-13 and UPC-A append the check
/// digit.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct BarPattern {
    pub pattern: String,
    pub data: String,
    #[serde(rename = "type")]
    pub symbology: Symbology,
}

impl BarPattern {
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    pub fn modules(&self) -> impl Iterator<Item = bool> + '_ {
        self.pattern.bytes().map(|b| b == b'1')
    }

    /// Consecutive modules of the same colour as `(is_bar, start, len)`.
    pub fn runs(&self) -> Vec<(bool, usize, usize)> {
        let mut runs: Vec<(bool, usize, usize)> = Vec::new();
        for (i, bar) in self.modules().enumerate() {
            match runs.last_mut() {
                Some((b, _, len)) if *b == bar => *len += 1,
                _ => runs.push((bar, i, 1)),
            }
        }
        runs
    }
}

/// Validates `data` against the alphabet of `symbology` and encodes it.
pub fn generate(data: &str, symbology: Symbology) -> SymbolResult<BarPattern> {
    let (pattern, data) = match symbology {
        Symbology::Code128 => (encode_code128(data)?, data.to_string()),
        Symbology::Code39 => encode_code39(data)?,
        Symbology::EAN13 => encode_ean13(data)?,
        Symbology::UPCA => encode_upca(data)?,
    };
    Ok(BarPattern { pattern, data, symbology })
}
