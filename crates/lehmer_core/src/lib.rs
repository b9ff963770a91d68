//! # lehmer_core: Arithmetic Foundation for the Lehmer Generator
//!
//! ## Layer 1 (Foundation) Role
//!
//! lehmer_core is the bottom layer of the workspace, providing:
//! - Generator parameters and their validation (`params`)
//! - Overflow-safe modular multiplication (`math::modular`)
//! - Error types: `ParamError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other lehmer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use lehmer_core::math::modular::{multiply_mod, Schrage};
//! use lehmer_core::params::{LehmerParams, MODULUS, MULTIPLIER};
//!
//! let params = LehmerParams::STANDARD;
//! assert_eq!(params.modulus, MODULUS);
//!
//! // Both decompositions agree on the standard parameter set
//! let schrage = Schrage::new(MULTIPLIER, MODULUS);
//! assert_eq!(schrage.apply(123_456_789), multiply_mod(123_456_789, MULTIPLIER, MODULUS));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `LehmerParams`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod params;
pub mod types;

pub use params::LehmerParams;
pub use types::error::ParamError;
