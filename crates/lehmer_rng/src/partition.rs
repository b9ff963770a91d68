//! Parallel use of independent streams.
//!
//! [`LehmerState::split_streams`] hands every stream out as an owned
//! [`LehmerStream`], and [`run_replicates`] runs one closure per stream on the
//! rayon thread pool. Each stream advances only its own seed, so results are
//! identical to running the replicates one after another.

use lehmer_core::LehmerParams;
use rayon::prelude::*;
use tracing::debug;

use crate::generator::{StepFormula, Stepper};
use crate::normalize::to_unit_interval;
use crate::state::LehmerState;
use crate::variate::{bernoulli, binomial, UniformSource};

/// A single stream detached from its [`LehmerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LehmerStream {
    index: usize,
    seed: i32,
    params: LehmerParams,
    advance: Stepper,
}

impl LehmerStream {
    /// Position of this stream in the state it was split from.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current seed.
    #[inline]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Formula used for advancement.
    #[inline]
    pub fn formula(&self) -> StepFormula {
        self.advance.formula()
    }

    /// Advances the stream by one step.
    #[inline]
    pub fn step(&mut self) {
        self.seed = self.advance.next(self.seed);
    }

    /// Advances the stream and returns the new seed.
    #[inline]
    pub fn step_and_get(&mut self) -> i32 {
        self.step();
        self.seed
    }

    /// Normalised current seed.
    #[inline]
    pub fn normalize(&self) -> f64 {
        to_unit_interval(self.seed, self.params.modulus)
    }

    /// Advances the stream and returns the normalised new seed.
    #[inline]
    pub fn next_uniform(&mut self) -> f64 {
        self.step();
        self.normalize()
    }

    /// Bernoulli draw on this stream.
    pub fn bernoulli(&mut self, p: f64) -> u32 {
        bernoulli(self, p)
    }

    /// Binomial draw on this stream.
    pub fn binomial(&mut self, n: u32, p: f64) -> u32 {
        binomial(self, n, p)
    }
}

impl UniformSource for LehmerStream {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        LehmerStream::next_uniform(self)
    }
}

impl LehmerState {
    /// Consumes the state and returns every stream as an owned handle, in
    /// stream order.
    pub fn split_streams(self) -> Vec<LehmerStream> {
        debug!(
            streams = self.seeds.len(),
            formula = %self.formula(),
            "Splitting Lehmer state into streams"
        );
        let params = self.params;
        let advance = self.advance;
        self.seeds
            .into_iter()
            .enumerate()
            .map(|(index, seed)| LehmerStream {
                index,
                seed,
                params,
                advance,
            })
            .collect()
    }

    /// Writes the seeds of detached streams back into this state.
    ///
    /// Streams whose index is outside this state are ignored.
    pub fn absorb_streams(&mut self, streams: &[LehmerStream]) {
        for stream in streams {
            if let Some(slot) = self.seeds.get_mut(stream.index) {
                *slot = stream.seed;
            }
        }
    }
}

/// Runs `replicate` once per stream in parallel and returns the results in
/// stream order.
///
/// The closure receives the stream index and the stream itself. After the
/// run, every stream's advanced seed is written back into `state`.
///
/// # Examples
///
/// ```
/// use lehmer_rng::partition::run_replicates;
/// use lehmer_rng::LehmerState;
///
/// let mut state = LehmerState::with_streams(8, 1).unwrap();
/// let means = run_replicates(&mut state, |_, stream| {
///     (0..1000).map(|_| stream.next_uniform()).sum::<f64>() / 1000.0
/// });
/// assert_eq!(means.len(), 8);
/// ```
pub fn run_replicates<T, F>(state: &mut LehmerState, replicate: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize, &mut LehmerStream) -> T + Send + Sync,
{
    let mut streams = state.clone().split_streams();
    let results: Vec<T> = streams
        .par_iter_mut()
        .map(|stream| replicate(stream.index, stream))
        .collect();
    state.absorb_streams(&streams);
    debug!(replicates = results.len(), "Replicates completed");
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_preserves_seeds_and_order() {
        let state = LehmerState::with_streams(16, 1).unwrap();
        let seeds = state.seeds().to_vec();
        let streams = state.split_streams();
        assert_eq!(streams.len(), 16);
        for (index, stream) in streams.iter().enumerate() {
            assert_eq!(stream.index(), index);
            assert_eq!(stream.seed(), seeds[index]);
        }
    }

    #[test]
    fn test_stream_matches_selected_state() {
        let mut state = LehmerState::with_streams(4, 99).unwrap();
        let mut streams = state.clone().split_streams();
        state.select(2);
        for _ in 0..1000 {
            assert_eq!(streams[2].step_and_get(), state.step_and_get());
        }
    }

    #[test]
    fn test_stream_keeps_formula() {
        let mut state = LehmerState::with_streams(2, 5).unwrap();
        state.set_formula(StepFormula::Gamma).unwrap();
        let streams = state.split_streams();
        assert!(streams.iter().all(|s| s.formula() == StepFormula::Gamma));
    }

    #[test]
    fn test_stream_variates_match_state() {
        let mut state = LehmerState::with_streams(2, 7).unwrap();
        let mut stream = state.clone().split_streams()[0];
        assert_eq!(stream.binomial(50, 0.3), state.binomial(50, 0.3));
        assert_eq!(stream.bernoulli(0.6), state.bernoulli(0.6));
        assert_eq!(stream.seed(), state.get_seed());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut parallel = LehmerState::with_streams(32, 2024).unwrap();
        let mut sequential = parallel.clone();

        let totals = run_replicates(&mut parallel, |_, stream| stream.binomial(100, 0.5));

        let expected: Vec<u32> = (0..32)
            .map(|index| {
                sequential.select(index);
                sequential.binomial(100, 0.5)
            })
            .collect();
        assert_eq!(totals, expected);

        sequential.select(0);
        assert_eq!(parallel.seeds(), sequential.seeds());
    }

    #[test]
    fn test_replicates_receive_stream_index() {
        let mut state = LehmerState::with_streams(10, 3).unwrap();
        let indices = run_replicates(&mut state, |index, stream| {
            assert_eq!(index, stream.index());
            index
        });
        assert_eq!(indices, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_absorb_ignores_foreign_indices() {
        let mut small = LehmerState::with_streams(2, 1).unwrap();
        let before = small.seeds().to_vec();
        let large = LehmerState::with_streams(4, 8).unwrap().split_streams();
        small.absorb_streams(&large[2..]);
        assert_eq!(small.seeds(), before.as_slice());
    }
}
