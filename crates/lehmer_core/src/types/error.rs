//! Error types for structured error handling.
//!
//! This module provides:
//! - `ParamError`: Errors from generator parameter validation

use thiserror::Error;

/// Generator parameter validation errors.
///
/// A parameter set that fails validation cannot drive an overflow-safe,
/// full-period generator, so no generator is ever built from it.
///
/// # Examples
/// ```
/// use lehmer_core::types::ParamError;
///
/// let err = ParamError::InvalidModulus(1);
/// assert_eq!(format!("{}", err), "Invalid modulus: 1 (must exceed 2)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// Modulus too small to hold a non-trivial sequence.
    #[error("Invalid modulus: {0} (must exceed 2)")]
    InvalidModulus(i32),

    /// A multiplier outside `[2, m - 1]`.
    #[error("Invalid {name}: {value} (must lie in [2, {modulus}))")]
    MultiplierOutOfRange {
        /// Which multiplier failed
        name: &'static str,
        /// Offending value
        value: i32,
        /// Modulus it was checked against
        modulus: i32,
    },

    /// Schrage decomposition with `r >= q`, which may overflow.
    #[error("Unbounded decomposition for {name}: remainder {remainder} >= quotient {quotient}")]
    UnboundedDecomposition {
        /// Which multiplier failed
        name: &'static str,
        /// `m div a`
        quotient: i32,
        /// `m mod a`
        remainder: i32,
    },
}
