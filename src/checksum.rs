//! Check digit arithmetic.
//!
//! The 9th digit of a TIN/AFM is derived from the first 8: each prefix
//! digit is multiplied by a power-of-two weight (2^8 for the first digit
//! down to 2^1 for the eighth), the products are summed, and the sum is
//! reduced modulo 11 and then modulo 10.

/// Number of digits in a full TIN/AFM.
pub const AFM_LEN: usize = 9;

/// Weighted sum of an 8-digit prefix: digit `i` (0-based) carries weight
/// `2^(8 - i)`.
pub(crate) fn weighted_sum(prefix: &[u8; 8]) -> u32 {
    prefix
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) << (8 - i))
        .sum()
}

/// Reduce a weighted sum to its check digit.
pub(crate) fn reduce(sum: u32) -> u8 {
    (sum % 11 % 10) as u8
}

/// Compute the expected check digit for an 8-digit prefix.
///
/// Digits are values 0-9, not ASCII characters. The result is always in
/// 0-9; this operation cannot fail for any 8-digit input.
pub fn compute_check_digit(prefix: &[u8; 8]) -> u8 {
    reduce(weighted_sum(prefix))
}
