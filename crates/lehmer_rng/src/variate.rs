//! Bernoulli and Binomial variates.
//!
//! Both variates threshold normalised uniforms against a probability `p`.
//! Probabilities outside the open interval `(0, 1)` are never an error: they
//! resolve to the deterministic edge outcome and consume no draws.
//!
//! ## References
//!
//! - Hogg, R. V. & Tanis, E. A. "Probability and Statistical Inference",
//!   The Bernoulli and Binomial Distributions.

use crate::state::LehmerState;

/// A source of uniform values in `[0, 1)`.
///
/// Implemented by [`LehmerState`] (active stream) and
/// [`LehmerStream`](crate::partition::LehmerStream).
pub trait UniformSource {
    /// Advances the source and returns the next uniform value.
    fn next_uniform(&mut self) -> f64;
}

impl UniformSource for LehmerState {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        LehmerState::next_uniform(self)
    }
}

#[inline]
fn is_valid_probability(p: f64) -> bool {
    0.0 < p && p < 1.0
}

/// Draws a Bernoulli variate: `1` with probability `p`, else `0`.
///
/// - `p <= 0` returns `0` and `p >= 1` returns `1` without drawing.
/// - `NaN` is treated as out of range on the high side and returns `1`.
/// - Otherwise exactly one uniform `u` is drawn and the result is `u < p`.
///
/// # Examples
///
/// ```
/// use lehmer_rng::variate::bernoulli;
/// use lehmer_rng::LehmerState;
///
/// let mut state = LehmerState::new(42);
/// assert_eq!(bernoulli(&mut state, 0.0), 0);
/// assert_eq!(bernoulli(&mut state, 1.0), 1);
/// assert!(bernoulli(&mut state, 0.5) <= 1);
/// ```
pub fn bernoulli<S: UniformSource + ?Sized>(source: &mut S, p: f64) -> u32 {
    if !is_valid_probability(p) {
        return if p <= 0.0 { 0 } else { 1 };
    }
    u32::from(source.next_uniform() < p)
}

/// Draws a Binomial variate as the sum of `n` Bernoulli trials.
///
/// - `p <= 0` returns `0`, `p >= 1` (or `NaN`) returns `n`, and `n == 0`
///   returns `0`, all without drawing.
/// - Otherwise exactly `n` uniforms are drawn.
pub fn binomial<S: UniformSource + ?Sized>(source: &mut S, n: u32, p: f64) -> u32 {
    if !is_valid_probability(p) {
        return if p <= 0.0 { 0 } else { n };
    }
    (0..n).map(|_| bernoulli(&mut *source, p)).sum()
}

impl LehmerState {
    /// Bernoulli draw on the active stream; see [`bernoulli`].
    #[inline]
    pub fn bernoulli(&mut self, p: f64) -> u32 {
        bernoulli(self, p)
    }

    /// Binomial draw on the active stream; see [`binomial`].
    #[inline]
    pub fn binomial(&mut self, n: u32, p: f64) -> u32 {
        binomial(self, n, p)
    }
}
