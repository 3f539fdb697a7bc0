use crate::common::error::{SymbolError, SymbolResult};

use super::checksum::code128_checksum;
use super::tables::{code128b_value, CODE128_PATTERNS, CODE128_START_B, CODE128_STOP};

/// Code128 in code set B: start B, one symbol per character, mod-103 check
/// symbol, stop. Every symbol is 11 modules wide.
pub fn encode_code128(data: &str) -> SymbolResult<String> {
    if data.is_empty() {
        return Err(SymbolError::Validation("Code128 data must not be empty".to_string()));
    }

    let values = data
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            code128b_value(ch).ok_or_else(|| SymbolError::invalid_char(ch, i, "Code128"))
        })
        .collect::<SymbolResult<Vec<_>>>()?;
    let checksum = code128_checksum(&values);

    let mut pattern = String::with_capacity(11 * (values.len() + 3));
    pattern.push_str(CODE128_PATTERNS[CODE128_START_B]);
    values.iter().for_each(|&v| pattern.push_str(CODE128_PATTERNS[v]));
    pattern.push_str(CODE128_PATTERNS[checksum]);
    pattern.push_str(CODE128_PATTERNS[CODE128_STOP]);
    Ok(pattern)
}

#[cfg(test)]
mod code128_tests {
    use test_case::test_case;

    use super::encode_code128;

    #[test]
    fn test_hello() {
        let pattern = encode_code128("HELLO").unwrap();
        assert_eq!(pattern.len(), 11 * 8);
        assert_eq!(
            pattern,
            "11010010000\
             11000101000\
             10001101000\
             10001101110\
             10001101110\
             10001110110\
             11000101000\
             11000111010"
        );
    }

    #[test_case("a")]
    #[test_case("Hello, World!")]
    #[test_case(" ~")]
    fn test_length(data: &str) {
        let pattern = encode_code128(data).unwrap();
        assert_eq!(pattern.len(), 11 * (data.chars().count() + 3));
        assert!(pattern.starts_with("11010010000"));
        assert!(pattern.ends_with("11000111010"));
    }

    #[test_case("tab\there", "'\\t' at position 3")]
    #[test_case("café", "'é' at position 3")]
    fn test_invalid_char(data: &str, exp: &str) {
        let err = encode_code128(data).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains(exp), "{err}");
    }

    #[test]
    fn test_empty() {
        assert!(encode_code128("").unwrap_err().is_validation());
    }
}
