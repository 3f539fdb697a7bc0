use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SymbolError {
    // Rejected input: illegal character, wrong digit count, bad check digit or option
    #[error("validation error: {0}")]
    Validation(String),

    // QR payload doesn't fit the requested version or any version up to 40
    #[error("capacity error: payload needs {required_bits} bits, only {available_bits} available")]
    Capacity { required_bits: usize, available_bits: usize },

    // Capacity tables and matrix layout disagree. Never caused by user input
    #[error("internal invariant violated: {0}")]
    Internal(String),
}

impl SymbolError {
    pub(crate) fn invalid_char(ch: char, pos: usize, symbology: &str) -> Self {
        Self::Validation(format!("invalid character {ch:?} at position {pos} for {symbology}"))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::Capacity { .. })
    }
}

pub type SymbolResult<T> = Result<T, SymbolError>;
