//! Check symbols for the 1-D symbologies.

use crate::common::error::{SymbolError, SymbolResult};

use super::tables::{CODE128_MODULO, CODE128_START_B};

/// Mod-103 weighted sum: the start symbol counts once, the data symbol at
/// position `i` counts `i + 1` times.
pub fn code128_checksum(values: &[usize]) -> usize {
    let weighted = values.iter().enumerate().map(|(i, v)| v * (i + 1)).sum::<usize>();
    (CODE128_START_B + weighted) % CODE128_MODULO
}

// Mod-10 check digit over `digits`, weights alternating from the leftmost digit
fn mod10_check_digit(digits: &[u8], weights: [u32; 2]) -> u8 {
    let sum = digits.iter().enumerate().map(|(i, &d)| d as u32 * weights[i & 1]).sum::<u32>();
    ((10 - sum % 10) % 10) as u8
}

// Decimal digits of `data`, failing on the first non-digit
pub(super) fn parse_digits(data: &str, symbology: &str) -> SymbolResult<Vec<u8>> {
    data.chars()
        .enumerate()
        .map(|(i, ch)| match ch.to_digit(10) {
            Some(d) => Ok(d as u8),
            None => Err(SymbolError::invalid_char(ch, i, symbology)),
        })
        .collect()
}

/// Check digit for the first 12 digits of an EAN-13 code, weights 1, 3 from the left.
pub fn ean13_check_digit(digits: &[u8]) -> u8 {
    debug_assert!(digits.len() == 12, "EAN-13 check digit needs 12 digits: {}", digits.len());
    mod10_check_digit(digits, [1, 3])
}

/// Check digit for the first 11 digits of a UPC-A code, weights 3, 1 from the left.
pub fn upca_check_digit(digits: &[u8]) -> u8 {
    debug_assert!(digits.len() == 11, "UPC-A check digit needs 11 digits: {}", digits.len());
    mod10_check_digit(digits, [3, 1])
}

/// True when `data` is 13 digits whose last digit is the EAN-13 check digit.
pub fn validate_ean13(data: &str) -> bool {
    match parse_digits(data, "EAN-13") {
        Ok(d) if d.len() == 13 => ean13_check_digit(&d[..12]) == d[12],
        _ => false,
    }
}

/// True when `data` is 12 digits whose last digit is the UPC-A check digit.
pub fn validate_upca(data: &str) -> bool {
    match parse_digits(data, "UPC-A") {
        Ok(d) if d.len() == 12 => upca_check_digit(&d[..11]) == d[11],
        _ => false,
    }
}
