use crate::common::error::{SymbolError, SymbolResult};

use super::tables::{code39_pattern, CODE39_GUARD_PATTERN};

/// Code39 over the uppercased input, wrapped in `*` guards. Symbols are 12
/// modules wide with a single narrow space between them.
///
/// Returns the pattern together with the uppercased text it encodes.
pub fn encode_code39(data: &str) -> SymbolResult<(String, String)> {
    if data.is_empty() {
        return Err(SymbolError::Validation("Code39 data must not be empty".to_string()));
    }

    let text = data.to_uppercase();
    let symbols = text
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            code39_pattern(ch).ok_or_else(|| SymbolError::invalid_char(ch, i, "Code39"))
        })
        .collect::<SymbolResult<Vec<_>>>()?;

    let pattern = std::iter::once(CODE39_GUARD_PATTERN)
        .chain(symbols)
        .chain(std::iter::once(CODE39_GUARD_PATTERN))
        .collect::<Vec<_>>()
        .join("0");
    Ok((pattern, text))
}

#[cfg(test)]
mod code39_tests {
    use test_case::test_case;

    use super::encode_code39;

    #[test]
    fn test_code39() {
        let (pattern, text) = encode_code39("a1").unwrap();
        assert_eq!(text, "A1");
        assert_eq!(
            pattern,
            "100101101101\
             0110101001011\
             0110100101011\
             0100101101101"
        );
    }

    #[test_case("CODE 39")]
    #[test_case("$5.00/+%-")]
    fn test_length(data: &str) {
        let n = data.len();
        let (pattern, _) = encode_code39(data).unwrap();
        assert_eq!(pattern.len(), 12 * (n + 2) + (n + 1));
    }

    #[test_case("hello!", "'!' at position 5")]
    #[test_case("A*B", "'*' at position 1")]
    #[test_case("Ä", "'Ä' at position 0")]
    fn test_invalid_char(data: &str, exp: &str) {
        let err = encode_code39(data).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains(exp), "{err}");
    }
}
