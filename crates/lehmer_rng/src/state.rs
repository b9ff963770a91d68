//! Stream state and stream initialisation.
//!
//! A [`LehmerState`] owns one seed per stream and an active-stream index.
//! Stream seeds are planted by chaining the jump formula from a single root
//! seed:
//!
//! ```text
//! seed[0] = root mod m
//! seed[i] = j · seed[i − 1] mod m
//! ```
//!
//! Every stored seed satisfies `0 < seed < m` for the lifetime of the state.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use lehmer_core::params::{DEFAULT_SEED, DEFAULT_STREAMS};
use lehmer_core::LehmerParams;
use tracing::{debug, warn};

use crate::config::LehmerConfig;
use crate::error::LehmerError;
use crate::generator::{StepFormula, Stepper};

/// Number of seeds shown by the `Display` summary.
const DISPLAY_SEEDS: usize = 10;

/// Multi-stream Lehmer generator state.
///
/// Owns a contiguous buffer of stream seeds whose length is fixed at
/// construction. All operations act on the active stream only; the seeds of
/// the other streams are neither read nor written.
///
/// # Examples
///
/// ```rust
/// use lehmer_rng::LehmerState;
///
/// let mut state = LehmerState::with_streams(256, 123_456_789).unwrap();
/// state.select(0);
/// for _ in 0..10_000 {
///     state.step();
/// }
/// assert_eq!(state.get_seed(), 1_753_928_844);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LehmerState {
    pub(crate) seeds: Vec<i32>,
    pub(crate) active: usize,
    pub(crate) params: LehmerParams,
    pub(crate) advance: Stepper,
    pub(crate) jump: Stepper,
}

impl LehmerState {
    /// Creates a state with [`DEFAULT_STREAMS`] streams, the standard
    /// parameters and the modulo formula.
    ///
    /// A root seed that reduces to zero is replaced by [`DEFAULT_SEED`].
    pub fn new(root_seed: i32) -> Self {
        let mut state = Self::from_parts(
            vec![0; DEFAULT_STREAMS],
            LehmerParams::STANDARD,
            StepFormula::Modulo,
        );
        state.plant(i64::from(root_seed));
        state.log_created();
        state
    }

    /// Creates a state with `stream_count` streams and the standard
    /// parameters. A `stream_count` of zero selects [`DEFAULT_STREAMS`].
    ///
    /// # Errors
    ///
    /// Returns [`LehmerError::Allocation`] if the seed buffer cannot be
    /// allocated.
    pub fn with_streams(stream_count: usize, root_seed: i32) -> Result<Self, LehmerError> {
        Self::with_params(
            LehmerParams::STANDARD,
            StepFormula::Modulo,
            stream_count,
            i64::from(root_seed),
        )
    }

    /// Creates a state from explicit parameters and step formula.
    ///
    /// # Errors
    ///
    /// - [`LehmerError::Params`] if `params` fail validation
    /// - [`LehmerError::JumpFormula`] if `formula` is [`StepFormula::Jump`]
    /// - [`LehmerError::Allocation`] if the seed buffer cannot be allocated
    pub fn with_params(
        params: LehmerParams,
        formula: StepFormula,
        stream_count: usize,
        root_seed: i64,
    ) -> Result<Self, LehmerError> {
        params.validate()?;
        if !formula.is_advancing() {
            return Err(LehmerError::JumpFormula);
        }

        let seeds = allocate_seeds(stream_count)?;
        let mut state = Self::from_parts(seeds, params, formula);
        state.plant(root_seed);
        state.log_created();
        Ok(state)
    }

    /// Creates a state from a validated configuration.
    ///
    /// The configured stream is selected after seeding.
    pub fn from_config(config: &LehmerConfig) -> Result<Self, LehmerError> {
        config.validate()?;
        let mut state = Self::with_params(
            config.profile.params(),
            config.formula,
            config.streams,
            config.seed,
        )?;
        state.select(config.stream);
        Ok(state)
    }

    fn from_parts(seeds: Vec<i32>, params: LehmerParams, formula: StepFormula) -> Self {
        Self {
            seeds,
            active: 0,
            advance: Stepper::new(formula, &params),
            jump: Stepper::new(StepFormula::Jump, &params),
            params,
        }
    }

    fn log_created(&self) {
        debug!(
            streams = self.stream_count(),
            formula = %self.formula(),
            multiplier = self.params.multiplier,
            root = self.seeds[0],
            "Lehmer state created"
        );
    }

    /// Plants every stream seed from `root_seed`, leaving the active index
    /// untouched.
    fn plant(&mut self, root_seed: i64) {
        if root_seed.rem_euclid(i64::from(self.params.modulus)) == 0 {
            warn!(
                root_seed,
                fallback = DEFAULT_SEED,
                "Root seed reduces to zero; substituting default seed"
            );
        }
        self.seeds[0] = self.params.bound_seed(root_seed);
        for index in 1..self.seeds.len() {
            self.seeds[index] = self.jump.next(self.seeds[index - 1]);
        }
    }

    /// Number of streams.
    #[inline]
    pub fn stream_count(&self) -> usize {
        self.seeds.len()
    }

    /// Index of the active stream.
    #[inline]
    pub fn active_stream(&self) -> usize {
        self.active
    }

    /// Parameters this state was built with.
    #[inline]
    pub fn params(&self) -> LehmerParams {
        self.params
    }

    /// Formula used for advancement.
    #[inline]
    pub fn formula(&self) -> StepFormula {
        self.advance.formula()
    }

    /// Read-only view of every stream seed.
    #[inline]
    pub fn seeds(&self) -> &[i32] {
        &self.seeds
    }

    /// Selects the active stream; indices wrap modulo the stream count.
    ///
    /// ```
    /// use lehmer_rng::LehmerState;
    ///
    /// let mut state = LehmerState::with_streams(4, 1).unwrap();
    /// state.select(6);
    /// assert_eq!(state.active_stream(), 2);
    /// ```
    #[inline]
    pub fn select(&mut self, stream: usize) {
        self.active = stream % self.seeds.len();
    }

    /// Moves to the next stream, wrapping to stream 0 after the last.
    pub fn next_stream(&mut self) {
        self.active = (self.active + 1) % self.seeds.len();
    }

    /// Moves to the previous stream, wrapping to the last after stream 0.
    pub fn previous_stream(&mut self) {
        let count = self.seeds.len();
        self.active = (self.active + count - 1) % count;
    }

    /// Seed of the active stream.
    #[inline]
    pub fn get_seed(&self) -> i32 {
        self.seeds[self.active]
    }

    /// Overwrites the active stream's seed, bounded into `(0, m)`.
    ///
    /// Values are reduced with a Euclidean remainder; a value that reduces to
    /// zero is replaced by [`DEFAULT_SEED`].
    pub fn set_seed(&mut self, value: i64) {
        self.seeds[self.active] = self.params.bound_seed(value);
    }

    /// Re-plants every stream from a new root seed.
    ///
    /// The active stream index is preserved across the call.
    ///
    /// ```
    /// use lehmer_rng::LehmerState;
    ///
    /// let mut state = LehmerState::new(42);
    /// state.select(1);
    /// state.reseed_all(1);
    /// assert_eq!(state.active_stream(), 1);
    /// assert_eq!(state.get_seed(), 22937);
    /// ```
    pub fn reseed_all(&mut self, root_seed: i64) {
        let active = self.active;
        self.active = 0;
        self.plant(root_seed);
        self.active = active;
        debug!(
            root = self.seeds[0],
            active, "Lehmer streams reseeded"
        );
    }

    /// Re-plants every stream using the active stream's current seed as root.
    pub fn regenerate(&mut self) {
        let root = self.get_seed();
        self.reseed_all(i64::from(root));
    }

    /// Re-plants every stream from the wall clock (seconds since the Unix
    /// epoch) and returns the root seed that was planted.
    ///
    /// A clock set before the epoch falls back to [`DEFAULT_SEED`] so the
    /// outcome stays deterministic.
    pub fn reseed_from_clock(&mut self) -> i32 {
        let root = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::from(DEFAULT_SEED)),
            Err(err) => {
                warn!(error = %err, fallback = DEFAULT_SEED, "System clock unavailable");
                i64::from(DEFAULT_SEED)
            }
        };
        self.reseed_all(root);
        self.seeds[0]
    }
}

fn allocate_seeds(stream_count: usize) -> Result<Vec<i32>, LehmerError> {
    let streams = if stream_count == 0 {
        DEFAULT_STREAMS
    } else {
        stream_count
    };
    let mut seeds = Vec::new();
    seeds
        .try_reserve_exact(streams)
        .map_err(|_| LehmerError::Allocation { streams })?;
    seeds.resize(streams, 0);
    Ok(seeds)
}

impl fmt::Display for LehmerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lehmer[{}]: streams={} active={} seed={} sequence=[",
            self.formula(),
            self.stream_count(),
            self.active,
            self.get_seed()
        )?;
        let shown = self.seeds.len().min(DISPLAY_SEEDS);
        for (index, seed) in self.seeds[..shown].iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", seed)?;
        }
        if self.seeds.len() > shown {
            write!(f, ", ... ({} more)", self.seeds.len() - shown)?;
        }
        f.write_str("]")
    }
}
