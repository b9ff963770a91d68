//! # lehmer_prime: Primality Testing on the Lehmer Generator (Layer 3)
//!
//! ## Layer 3 Role
//!
//! lehmer_prime consumes the generator through its public API only:
//! - Modular exponentiation (`modexp`)
//! - Miller–Rabin with witnesses drawn from a Lehmer stream (`miller_rabin`)
//! - Deterministic prime samples (`sample`)
//! - Audits of generator parameters (`audit`)
//!
//! ## Usage Example
//!
//! ```rust
//! use lehmer_core::LehmerParams;
//! use lehmer_prime::{audit_params, miller_rabin, prime_sample};
//! use lehmer_rng::LehmerState;
//!
//! let mut state = LehmerState::new(123_456_789);
//! let primes = prime_sample(100).unwrap();
//! assert!(primes.iter().all(|&p| miller_rabin(&mut state, u64::from(p), 10)));
//!
//! let audit = audit_params(&LehmerParams::STANDARD);
//! assert!(audit.is_trusted());
//! ```

#![warn(missing_docs)]

pub mod audit;
pub mod error;
pub mod miller_rabin;
pub mod modexp;
pub mod sample;

pub use audit::{audit_params, ParamAudit};
pub use error::PrimeError;
pub use miller_rabin::miller_rabin;
pub use modexp::modular_exponent;
pub use sample::prime_sample;
