//! Candidate validation and first-digit category classification.

use serde::{Deserialize, Serialize};

use crate::checksum::{AFM_LEN, compute_check_digit};
use crate::error::FormatError;

/// Category a TIN/AFM belongs to, encoded in its first digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Issued before 1/1/1999 (first digit 0).
    Pre99,
    /// Natural person (first digit 1-4).
    Individual,
    /// Legal entity (first digit 7-9).
    LegalEntity,
    /// First digits 5-6 are not assigned to any category.
    Reserved,
}

impl Category {
    /// Classify a first-digit value. Returns `None` for values above 9.
    pub fn from_first_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Category::Pre99),
            1..=4 => Some(Category::Individual),
            5 | 6 => Some(Category::Reserved),
            7..=9 => Some(Category::LegalEntity),
            _ => None,
        }
    }
}

/// Parse a candidate into its 9 digit values, enforcing the shape rules.
fn parse_digits(candidate: &str) -> Result<[u8; AFM_LEN], FormatError> {
    let count = candidate.chars().count();
    if count != AFM_LEN {
        return Err(FormatError::Length(count));
    }
    let mut digits = [0u8; AFM_LEN];
    for (slot, c) in digits.iter_mut().zip(candidate.chars()) {
        // char::to_digit(10) accepts ASCII '0'-'9' only.
        *slot = c.to_digit(10).ok_or(FormatError::NonDigit(c))? as u8;
    }
    if digits == [0; AFM_LEN] {
        return Err(FormatError::AllZeros);
    }
    Ok(digits)
}

/// Validate a 9-digit TIN/AFM candidate.
///
/// Returns `Ok(true)` when the 9th digit equals the check digit computed
/// from the first 8, `Ok(false)` when it does not, and a [`FormatError`]
/// when the input is not a well-formed candidate at all: wrong length,
/// non-digit characters, or the all-zero string. No trimming or separator
/// stripping is performed.
///
/// ```
/// assert_eq!(afm::validate("090000045"), Ok(true));
/// assert_eq!(afm::validate("123456789"), Ok(false));
/// assert!(afm::validate("000000000").is_err());
/// ```
pub fn validate(candidate: &str) -> Result<bool, FormatError> {
    let digits = parse_digits(candidate)?;
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digits[..8]);
    Ok(digits[8] == compute_check_digit(&prefix))
}

/// Classify a candidate by its first digit, after shape validation.
///
/// Does not verify the checksum; use [`validate`] for that.
pub fn category(candidate: &str) -> Result<Category, FormatError> {
    let digits = parse_digits(candidate)?;
    // parse_digits guarantees digits[0] <= 9.
    Ok(Category::from_first_digit(digits[0]).unwrap_or(Category::Reserved))
}
