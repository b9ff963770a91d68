//! Error types for prime sampling.

use thiserror::Error;

/// Prime sampling error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimeError {
    /// The sample bound admits no primes.
    #[error("Prime sample limit must be at least 2, got {limit}")]
    SampleTooSmall {
        /// Requested upper bound
        limit: u32,
    },

    /// The sieve could not be allocated.
    #[error("Failed to allocate sieve for limit {limit}")]
    Allocation {
        /// Requested upper bound
        limit: u32,
    },
}
