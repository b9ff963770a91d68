//! Overflow-safe computation of `(a * z) mod m`.
//!
//! Two interchangeable routes are provided:
//!
//! - [`multiply_mod`] widens to `i64`, so `a * z` can never overflow.
//! - [`Schrage`] stays in `i32` by splitting `m = a * q + r` and evaluating
//!
//! ```text
//! γ(z) = a · (z mod q) − r · (z div q)
//! f(z) = γ(z) + m · δ(z),   δ(z) ∈ {0, 1}
//! ```
//!
//! Both terms of `γ` lie in `[0, m − 1]` whenever `r < q`, so `γ` lies in
//! `[−(m − 1), m − 1]` and `δ(z)` is exactly `1` when `γ(z)` is negative.
//!
//! ## References
//!
//! - Park, S. K. & Miller, K. W. (1988). "Random Number Generators: Good Ones
//!   Are Hard To Find". Communications of the ACM 31(10).
//! - Schrage, L. (1979). "A More Portable Fortran Random Number Generator".
//!   ACM Transactions on Mathematical Software 5(2).

/// Computes `(multiplier * seed) mod modulus` with an `i64` accumulator.
///
/// The result is the canonical residue in `[0, modulus)`.
///
/// # Examples
///
/// ```
/// use lehmer_core::math::modular::multiply_mod;
///
/// assert_eq!(multiply_mod(1, 48271, 2_147_483_647), 48271);
/// assert_eq!(multiply_mod(2_147_483_646, 2, 2_147_483_647), 2_147_483_645);
/// ```
#[inline]
pub fn multiply_mod(seed: i32, multiplier: i32, modulus: i32) -> i32 {
    debug_assert!(modulus > 0, "modulus must be positive");
    let product = i64::from(multiplier) * i64::from(seed);
    // rem_euclid into a positive i32 modulus always fits back into i32
    product.rem_euclid(i64::from(modulus)) as i32
}

/// Schrage's decomposition of a fixed multiplier over a fixed modulus.
///
/// Precomputes `q = m div a` and `r = m mod a` once, so every application
/// costs two divisions and two multiplications in native `i32` arithmetic.
///
/// # Examples
///
/// ```
/// use lehmer_core::math::modular::Schrage;
///
/// let schrage = Schrage::new(48271, 2_147_483_647);
/// assert_eq!(schrage.quotient(), 44488);
/// assert_eq!(schrage.remainder(), 3399);
/// assert_eq!(schrage.apply(1), 48271);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schrage {
    multiplier: i32,
    modulus: i32,
    quotient: i32,
    remainder: i32,
}

impl Schrage {
    /// Precomputes the quotient and remainder for `multiplier` over `modulus`.
    ///
    /// # Panics
    ///
    /// Panics if `multiplier` is not positive.
    pub const fn new(multiplier: i32, modulus: i32) -> Self {
        assert!(multiplier > 0, "multiplier must be positive");
        Self {
            multiplier,
            modulus,
            quotient: modulus / multiplier,
            remainder: modulus % multiplier,
        }
    }

    /// Returns the multiplier `a`.
    #[inline]
    pub const fn multiplier(&self) -> i32 {
        self.multiplier
    }

    /// Returns the modulus `m`.
    #[inline]
    pub const fn modulus(&self) -> i32 {
        self.modulus
    }

    /// Returns `q = m div a`.
    #[inline]
    pub const fn quotient(&self) -> i32 {
        self.quotient
    }

    /// Returns `r = m mod a`.
    #[inline]
    pub const fn remainder(&self) -> i32 {
        self.remainder
    }

    /// Whether the decomposition is overflow-free, i.e. `r < q`.
    ///
    /// Only bounded decompositions may be used with [`Schrage::apply`].
    #[inline]
    pub const fn is_bounded(&self) -> bool {
        self.remainder < self.quotient
    }

    /// Evaluates `γ(z) = a · (z mod q) − r · (z div q)`.
    ///
    /// The result lies in `[−(m − 1), m − 1]` for `z` in `(0, m)`.
    #[inline]
    pub fn gamma(&self, seed: i32) -> i32 {
        debug_assert!(
            seed > 0 && seed < self.modulus,
            "seed {} outside (0, {})",
            seed,
            self.modulus
        );
        self.multiplier * (seed % self.quotient) - self.remainder * (seed / self.quotient)
    }

    /// Evaluates the correction term `δ(z)` of `f(z) = γ(z) + m · δ(z)`.
    ///
    /// `δ(z)` equals `(z div q) − (a · z div m)`, which is `1` exactly when
    /// `γ(z)` is negative and `0` otherwise.
    #[inline]
    pub fn delta(&self, seed: i32) -> i32 {
        i32::from(self.gamma(seed) < 0)
    }

    /// Computes `(a · z) mod m` without leaving `i32`.
    #[inline]
    pub fn apply(&self, seed: i32) -> i32 {
        let gamma = self.gamma(seed);
        if gamma < 0 {
            gamma + self.modulus
        } else {
            gamma
        }
    }
}
