//! Integer arithmetic for multiplicative congruential generators.
//!
//! - [`modular`]: `(a * z) mod m` via a wide accumulator or Schrage's
//!   decomposition

pub mod modular;
