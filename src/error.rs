//! Errors raised while validating a Boolean function description.

use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, TermError>;

/// A violation of the input contract of a [`BooleanFunction`][crate::function::BooleanFunction].
///
/// Variants are listed in the order the validator checks them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    #[error("both minterms and maxterms were supplied")]
    ConflictingTermFamilies,

    #[error("column string cannot be combined with minterms, maxterms or don't-cares")]
    RedundantColumnStringInputs,

    #[error("width {width} exceeds the maximum supported width {max}")]
    WidthTooLarge { width: u32, max: u32 },

    #[error("column string is {by} character(s) too short for width {width}")]
    ColumnStringTooShort { by: usize, width: u32 },

    #[error("column string is {by} character(s) too long for width {width}")]
    ColumnStringTooLong { by: usize, width: u32 },

    #[error("neither minterms nor maxterms were supplied")]
    MissingTermFamily,

    #[error("don't-cares overlap the term list at {indices:?}")]
    DontCareTermOverlap { indices: Vec<i64> },

    #[error("indices {indices:?} are outside 0..2^{width}")]
    TermOutOfRange { indices: Vec<i64>, width: u32 },

    #[error("invalid don't-care symbol {symbol:?}: expected one character other than '0' and '1'")]
    InvalidDontCareSymbol { symbol: String },

    #[error("unexpected symbol {symbol:?} at position {position} of the column string")]
    UnexpectedColumnSymbol { position: usize, symbol: char },

    #[error("{available} variable name(s) given, but width is {required}")]
    InsufficientVariableNames { required: u32, available: usize },
}
