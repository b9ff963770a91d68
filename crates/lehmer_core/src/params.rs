//! Generator parameters for the 32-bit Lehmer profile.
//!
//! The modulus is the Mersenne prime `2^31 − 1`, originally chosen so the
//! recurrence fits 32-bit signed registers. The step multiplier 48271 is the
//! revised Park–Miller value; the jump multiplier 22937 is a second prime used
//! only to spread the initial seeds of independent streams.

use crate::math::modular::Schrage;
use crate::types::error::ParamError;

/// Mersenne prime modulus `m = 2^31 − 1`.
pub const MODULUS: i32 = 2_147_483_647;

/// Step multiplier `a` (prime, full period modulo [`MODULUS`]).
pub const MULTIPLIER: i32 = 48_271;

/// Multiplier used to derive successive stream seeds from the root seed.
pub const JUMP_MULTIPLIER: i32 = 22_937;

/// Number of streams allocated when none is requested.
pub const DEFAULT_STREAMS: usize = 256;

/// Root seed substituted for a zero (or zero-reducing) seed.
pub const DEFAULT_SEED: i32 = 123_456_789;

/// A validated-on-demand set of generator parameters.
///
/// Bundles the modulus with the step and jump multipliers. Use
/// [`LehmerParams::validate`] before building a generator from values that
/// did not come from one of the provided constants.
///
/// # Examples
///
/// ```
/// use lehmer_core::params::{LehmerParams, MODULUS};
///
/// let params = LehmerParams::STANDARD;
/// assert!(params.validate().is_ok());
/// assert_eq!(params.modulus, MODULUS);
/// assert_eq!(params.step_schrage().quotient(), 44488);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LehmerParams {
    /// Prime modulus `m`.
    pub modulus: i32,
    /// Step multiplier `a`.
    pub multiplier: i32,
    /// Stream-separation multiplier `j`.
    pub jump_multiplier: i32,
}

impl Default for LehmerParams {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl LehmerParams {
    /// Park–Miller revised parameters (`a = 48271`).
    pub const STANDARD: Self = Self {
        modulus: MODULUS,
        multiplier: MULTIPLIER,
        jump_multiplier: JUMP_MULTIPLIER,
    };

    /// Park–Miller "minimal standard" parameters (`a = 16807`).
    pub const MINIMAL_STANDARD: Self = Self {
        modulus: MODULUS,
        multiplier: 16_807,
        jump_multiplier: JUMP_MULTIPLIER,
    };

    /// Creates a parameter set and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError`] if the set cannot drive an overflow-safe
    /// generator; see [`LehmerParams::validate`].
    pub fn new(modulus: i32, multiplier: i32, jump_multiplier: i32) -> Result<Self, ParamError> {
        let params = Self {
            modulus,
            multiplier,
            jump_multiplier,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks the structural requirements of the recurrence.
    ///
    /// - the modulus exceeds 2;
    /// - both multipliers lie in `[2, m − 1]`;
    /// - both multipliers admit a bounded Schrage decomposition (`r < q`).
    ///
    /// Primality is not checked here; see `lehmer_prime::audit_params`.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.modulus <= 2 {
            return Err(ParamError::InvalidModulus(self.modulus));
        }
        for (name, value) in [
            ("multiplier", self.multiplier),
            ("jump_multiplier", self.jump_multiplier),
        ] {
            if value < 2 || value >= self.modulus {
                return Err(ParamError::MultiplierOutOfRange {
                    name,
                    value,
                    modulus: self.modulus,
                });
            }
            let schrage = Schrage::new(value, self.modulus);
            if !schrage.is_bounded() {
                return Err(ParamError::UnboundedDecomposition {
                    name,
                    quotient: schrage.quotient(),
                    remainder: schrage.remainder(),
                });
            }
        }
        Ok(())
    }

    /// Schrage decomposition of the step multiplier.
    #[inline]
    pub const fn step_schrage(&self) -> Schrage {
        Schrage::new(self.multiplier, self.modulus)
    }

    /// Schrage decomposition of the jump multiplier.
    #[inline]
    pub const fn jump_schrage(&self) -> Schrage {
        Schrage::new(self.jump_multiplier, self.modulus)
    }

    /// Reduces an arbitrary value into the seed range `(0, m)`.
    ///
    /// Negative values are reduced with a Euclidean remainder. A value that
    /// reduces to zero is replaced by [`DEFAULT_SEED`], since zero is an
    /// absorbing state of the recurrence.
    ///
    /// ```
    /// use lehmer_core::params::{LehmerParams, DEFAULT_SEED, MODULUS};
    ///
    /// let params = LehmerParams::STANDARD;
    /// assert_eq!(params.bound_seed(42), 42);
    /// assert_eq!(params.bound_seed(-1), MODULUS - 1);
    /// assert_eq!(params.bound_seed(0), DEFAULT_SEED);
    /// assert_eq!(params.bound_seed(i64::from(MODULUS)), DEFAULT_SEED);
    /// ```
    pub fn bound_seed(&self, value: i64) -> i32 {
        let reduced = value.rem_euclid(i64::from(self.modulus));
        if reduced == 0 {
            // DEFAULT_SEED is only valid if it is itself below the modulus
            let fallback = i64::from(DEFAULT_SEED).rem_euclid(i64::from(self.modulus));
            if fallback == 0 {
                1
            } else {
                fallback as i32
            }
        } else {
            reduced as i32
        }
    }

    /// Whether `seed` satisfies the seed invariant `0 < seed < m`.
    #[inline]
    pub const fn is_valid_seed(&self, seed: i32) -> bool {
        seed > 0 && seed < self.modulus
    }
}
