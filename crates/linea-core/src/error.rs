//! Error types for the LINEA workspace

use thiserror::Error;

/// Errors surfaced by the LINEA crates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineaError {
    // Identifier validation
    #[error("Identifier has {0} digits, expected 12 or 13")]
    BadLength(usize),

    #[error("Non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },

    #[error("Digit value out of range: {0}")]
    BadDigit(u8),

    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("Value {0} does not fit in 13 digits")]
    ValueTooLarge(u64),

    // Walker inputs
    #[error("Invalid alphabet: {0}")]
    BadAlphabet(String),

    #[error("Empty word")]
    EmptyWord,

    #[error("Word {word:?} contains symbol {symbol:?} outside the alphabet")]
    WordOutsideAlphabet { word: String, symbol: char },

    #[error("Word length mismatch: expected {expected}, got {actual}")]
    WordLengthMismatch { expected: usize, actual: usize },

    // Generator inputs
    #[error("Invalid prefix {0:?}: must be a digit string shorter than 12")]
    BadPrefix(String),

    // Symbol table configuration
    #[error("Bad bar character {found:?} at position {position}")]
    BadBar { position: usize, found: char },

    #[error("Run pattern {runs:?} for digit {digit} in set {set} is not 7 modules")]
    BadRunPattern { set: char, digit: u8, runs: [u8; 4] },

    // Generation
    #[error("Suffix space exhausted for prefix {prefix:?}")]
    SpaceExhausted { prefix: String },
}

/// Result type for LINEA operations
pub type LineaResult<T> = Result<T, LineaError>;
