//! Mapping of integer seeds onto the unit interval.

use crate::state::LehmerState;

/// Maps `seed` to `seed / modulus`.
///
/// For any seed satisfying `0 < seed < modulus` the result lies in `(0, 1)`,
/// and in particular in `[0, 1)`.
///
/// # Examples
///
/// ```
/// use lehmer_rng::normalize::to_unit_interval;
///
/// let u = to_unit_interval(1_073_741_823, 2_147_483_647);
/// assert!((u - 0.5).abs() < 1e-9);
/// ```
#[inline]
pub fn to_unit_interval(seed: i32, modulus: i32) -> f64 {
    f64::from(seed) / f64::from(modulus)
}

impl LehmerState {
    /// Normalises the active seed to `[0, 1)` without advancing.
    #[inline]
    pub fn normalize(&self) -> f64 {
        to_unit_interval(self.get_seed(), self.params.modulus)
    }

    /// Advances the active stream and returns the normalised new seed.
    ///
    /// ```
    /// use lehmer_rng::LehmerState;
    ///
    /// let mut state = LehmerState::new(42);
    /// let u = state.next_uniform();
    /// assert!((0.0..1.0).contains(&u));
    /// ```
    #[inline]
    pub fn next_uniform(&mut self) -> f64 {
        self.step();
        self.normalize()
    }

    /// Fills the buffer with successive uniform values from the active stream.
    ///
    /// Empty buffers are handled gracefully (no draw is consumed).
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_uniform();
        }
    }
}
