//! TIN/AFM generation under category and repetition constraints.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::checksum::{AFM_LEN, reduce};
use crate::error::GenerateError;
use crate::rng::random_digit;

/// Options for [`generate`].
///
/// All fields are optional; start from [`GenerateOptions::default`] and
/// chain the setters:
///
/// ```
/// use afm::GenerateOptions;
///
/// let opts = GenerateOptions::default().legal_entity().repeat_tolerance(0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Fixed first digit (0-9). Takes precedence over `pre99`,
    /// `individual` and `legal_entity`. Default: unset.
    pub force_first_digit: Option<u8>,
    /// Fix the first digit to 0, marking a number issued before 1/1/1999.
    /// Overrides `individual` and `legal_entity`. Default: `false`.
    pub pre99: bool,
    /// Draw the first digit from 1-4 (natural person). Default: `false`.
    pub individual: bool,
    /// Draw the first digit from 7-9 (legal entity). Default: `false`.
    pub legal_entity: bool,
    /// Cap on consecutive repeats of the previous digit within the 8-digit
    /// prefix. `None` disables the constraint; `Some(0)` forbids any
    /// adjacent repeat. The distinction between unset and 0 is deliberate.
    pub repeat_tolerance: Option<u32>,
    /// Produce a correct check digit (`true`, the default) or one drawn
    /// uniformly from the 9 wrong values.
    pub valid: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            force_first_digit: None,
            pre99: false,
            individual: false,
            legal_entity: false,
            repeat_tolerance: None,
            valid: true,
        }
    }
}

impl GenerateOptions {
    /// Fix the first digit, overriding every category flag.
    pub fn force_first_digit(mut self, digit: u8) -> Self {
        self.force_first_digit = Some(digit);
        self
    }

    /// Mark the number as issued before 1/1/1999 (first digit 0).
    pub fn pre99(mut self) -> Self {
        self.pre99 = true;
        self
    }

    /// Draw the first digit from the natural-person range 1-4.
    pub fn individual(mut self) -> Self {
        self.individual = true;
        self
    }

    /// Draw the first digit from the legal-entity range 7-9.
    pub fn legal_entity(mut self) -> Self {
        self.legal_entity = true;
        self
    }

    /// Cap consecutive digit repeats in the prefix (0 = no repeats).
    pub fn repeat_tolerance(mut self, tolerance: u32) -> Self {
        self.repeat_tolerance = Some(tolerance);
        self
    }

    /// Choose between a correct and a deliberately wrong check digit.
    pub fn valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    /// Eager option validation; runs before any random draw.
    fn check(&self) -> Result<(), GenerateError> {
        if let Some(d) = self.force_first_digit {
            if d > 9 {
                return Err(GenerateError::FirstDigitOutOfRange(d));
            }
        }
        if self.individual && self.legal_entity {
            return Err(GenerateError::ConflictingCategories);
        }
        Ok(())
    }
}

/// Generate a 9-digit TIN/AFM string.
///
/// The first digit follows the precedence `force_first_digit` > `pre99` >
/// category range (individual 1-4, legal entity 7-9, neither 1-9). Digits
/// 2-8 are uniform draws, excluding the previous digit once its run length
/// reaches `repeat_tolerance`. The 9th digit is the checksum digit, or a
/// deliberately different one when `valid` is off.
///
/// Fails only on malformed options; once they pass, generation always
/// completes in exactly 9 digit draws.
pub fn generate<R: Rng + ?Sized>(
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<String, GenerateError> {
    options.check()?;

    let min = if options.legal_entity { 7 } else { 1 };
    let max = if options.individual { 4 } else { 9 };
    let first = match options.force_first_digit {
        Some(d) => d,
        None if options.pre99 => 0,
        None => random_digit(rng, min, max, None),
    };

    let mut number = String::with_capacity(AFM_LEN);
    number.push((b'0' + first) as char);
    let mut sum = u32::from(first) << 8;
    let mut last = first;
    let mut repeats = 0u32;

    for weight in (1..=7u32).rev() {
        let exclude = match options.repeat_tolerance {
            Some(tolerance) if repeats >= tolerance => Some(last),
            _ => None,
        };
        let digit = random_digit(rng, 0, 9, exclude);
        number.push((b'0' + digit) as char);
        sum += u32::from(digit) << weight;
        repeats = if digit == last { repeats + 1 } else { 0 };
        last = digit;
    }

    let check = reduce(sum);
    let ninth = if options.valid {
        check
    } else {
        random_digit(rng, 0, 9, Some(check))
    };
    number.push((b'0' + ninth) as char);
    Ok(number)
}

/// [`generate`] with the `valid` flag forced on.
pub fn generate_valid<R: Rng + ?Sized>(
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<String, GenerateError> {
    generate(&options.clone().valid(true), rng)
}

/// [`generate`] with the `valid` flag forced off.
pub fn generate_invalid<R: Rng + ?Sized>(
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<String, GenerateError> {
    generate(&options.clone().valid(false), rng)
}
