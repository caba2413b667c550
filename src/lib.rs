//! # afm
//!
//! Validation and generation of Greek Tax Identification Numbers
//! (TIN/AFM): 9-digit codes whose final digit is a checksum derived from a
//! weighted sum of the preceding 8 digits modulo 11.
//!
//! The crate is a pure, stateless computation over fixed-length digit
//! strings. Randomness for the generator is injected as a [`rand::Rng`],
//! so seeded generators give fully deterministic output.
//!
//! ## Quick Start
//!
//! ```rust
//! use afm::{GenerateOptions, generate_valid, validate};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! assert_eq!(validate("090000045"), Ok(true));  // DEI
//! assert_eq!(validate("123456789"), Ok(false)); // checksum mismatch
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let number = generate_valid(&GenerateOptions::default().legal_entity(), &mut rng).unwrap();
//! assert_eq!(validate(&number), Ok(true));
//! assert!(matches!(number.as_bytes()[0], b'7'..=b'9'));
//! ```

mod checksum;
mod error;
mod generation;
mod rng;
mod validation;

pub use checksum::{AFM_LEN, compute_check_digit};
pub use error::{FormatError, GenerateError};
pub use generation::{GenerateOptions, generate, generate_invalid, generate_valid};
pub use validation::{Category, category, validate};
