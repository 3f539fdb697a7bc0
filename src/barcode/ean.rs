use crate::common::error::{SymbolError, SymbolResult};

use super::checksum::{ean13_check_digit, parse_digits, upca_check_digit};
use super::tables::{EAN_CENTER_GUARD, EAN_END_GUARD, EAN_L_PATTERNS, EAN_PARITY, EAN_START_GUARD};

// Digit count
//------------------------------------------------------------------------------

fn check_len(digits: &[u8], allowed: [usize; 2], symbology: &str) -> SymbolResult<()> {
    if !allowed.contains(&digits.len()) {
        return Err(SymbolError::Validation(format!(
            "{symbology} needs {} or {} digits, got {}",
            allowed[0],
            allowed[1],
            digits.len()
        )));
    }
    Ok(())
}

fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

// EAN-13
//------------------------------------------------------------------------------

/// Completes 12 digits with their check digit, or verifies the check digit of
/// 13. Returns the full 13-digit code.
///
/// A 13-digit code whose check digit is wrong is a validation error, so every
/// returned code satisfies [`validate_ean13`](super::validate_ean13).
pub fn complete_ean13(data: &str) -> SymbolResult<String> {
    let mut digits = parse_digits(data, "EAN-13")?;
    check_len(&digits, [12, 13], "EAN-13")?;

    let check = ean13_check_digit(&digits[..12]);
    match digits.get(12).copied() {
        Some(d) if d != check => {
            return Err(SymbolError::Validation(format!(
                "EAN-13 check digit {d} is wrong, expected {check}"
            )))
        }
        Some(_) => (),
        None => digits.push(check),
    }
    Ok(digits_to_string(&digits))
}

/// Bar pattern of a complete 13-digit code: 95 modules.
pub fn encode_ean13(data: &str) -> SymbolResult<(String, String)> {
    let code = complete_ean13(data)?;
    let digits = code.bytes().map(|b| b - b'0').collect::<Vec<_>>();

    let parity = EAN_PARITY[digits[0] as usize];
    let mut pattern = String::with_capacity(95);
    pattern.push_str(EAN_START_GUARD);
    for (&d, p) in digits[1..7].iter().zip(parity.chars()) {
        let l = EAN_L_PATTERNS[d as usize];
        match p {
            'L' => pattern.push_str(l),
            _ => pattern.extend(l.chars().rev().map(invert)),
        }
    }
    pattern.push_str(EAN_CENTER_GUARD);
    for &d in &digits[7..] {
        pattern.extend(EAN_L_PATTERNS[d as usize].chars().map(invert));
    }
    pattern.push_str(EAN_END_GUARD);

    debug_assert!(pattern.len() == 95, "EAN-13 pattern must be 95 modules: {}", pattern.len());
    Ok((pattern, code))
}

fn invert(bit: char) -> char {
    if bit == '1' {
        '0'
    } else {
        '1'
    }
}


// UPC-A
//------------------------------------------------------------------------------

/// Completes 11 digits with their check digit, or verifies the check digit of
/// 12. Returns the full 12-digit code.
///
/// A 12-digit code whose check digit is wrong is a validation error, so every
/// returned code satisfies [`validate_upca`](super::validate_upca).
pub fn complete_upca(data: &str) -> SymbolResult<String> {
    let mut digits = parse_digits(data, "UPC-A")?;
    check_len(&digits, [11, 12], "UPC-A")?;

    let check = upca_check_digit(&digits[..11]);
    match digits.get(11).copied() {
        Some(d) if d != check => {
            return Err(SymbolError::Validation(format!(
                "UPC-A check digit {d} is wrong, expected {check}"
            )))
        }
        Some(_) => (),
        None => digits.push(check),
    }
    Ok(digits_to_string(&digits))
}

/// UPC-A is EAN-13 with a leading zero; the bars are identical.
pub fn encode_upca(data: &str) -> SymbolResult<(String, String)> {
    let code = complete_upca(data)?;
    let (pattern, _) = encode_ean13(&format!("0{code}"))?;
    Ok((pattern, code))
}
