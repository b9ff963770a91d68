//! Shared types for the Lehmer workspace.
//!
//! - [`error`]: Parameter validation errors

pub mod error;

pub use error::ParamError;
