use thiserror::Error;

/// Errors for candidates rejected by shape validation, before any checksum
/// arithmetic runs.
///
/// A well-formed candidate whose 9th digit merely fails the checksum is not
/// an error — [`validate`](crate::validate) returns `Ok(false)` for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatError {
    /// Input is not exactly 9 characters long.
    #[error("expected exactly 9 digits, got {0} characters")]
    Length(usize),

    /// Input contains a character outside '0'..='9'.
    #[error("non-digit character '{0}' in candidate")]
    NonDigit(char),

    /// "000000000" is never an assigned TIN/AFM.
    #[error("the all-zero number is not a valid TIN/AFM")]
    AllZeros,
}

/// Errors for generator options rejected before any random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GenerateError {
    /// `force_first_digit` must itself be a digit.
    #[error("force_first_digit must be 0-9, got {0}")]
    FirstDigitOutOfRange(u8),

    /// `individual` (first digit 1-4) and `legal_entity` (first digit 7-9)
    /// cannot both be requested.
    #[error("individual and legal_entity are mutually exclusive")]
    ConflictingCategories,
}
