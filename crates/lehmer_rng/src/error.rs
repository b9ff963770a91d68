//! Error types for generator construction.

use lehmer_core::ParamError;
use thiserror::Error;

use crate::config::ConfigError;

/// Generator construction error.
///
/// Advancement itself never fails: once a [`LehmerState`](crate::LehmerState)
/// exists every operation on it is infallible, and out-of-range caller input
/// (stream indices, probabilities) is resolved by wraparound or edge values.
#[derive(Debug, Error)]
pub enum LehmerError {
    /// The seed buffer could not be allocated.
    #[error("Failed to allocate seed buffer for {streams} streams")]
    Allocation {
        /// Requested number of streams
        streams: usize,
    },

    /// Inconsistent modulus/multiplier parameters.
    #[error("Invalid generator parameters: {0}")]
    Params(#[from] ParamError),

    /// The jump formula was requested for ordinary advancement.
    #[error("The jump formula is reserved for stream initialisation")]
    JumpFormula,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
