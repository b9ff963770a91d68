//! Seed advancement.
//!
//! A generator step replaces the active stream's seed `z` with `f(z) = a·z mod m`.
//! [`StepFormula`] selects how `f` is evaluated; all variants compute the same
//! residue, they differ only in the width of the arithmetic and the multiplier.

use std::fmt;
use std::str::FromStr;

use lehmer_core::math::modular::{multiply_mod, Schrage};
use lehmer_core::{LehmerParams, ParamError};
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::error::LehmerError;
use crate::state::LehmerState;

/// Closed set of step formulas.
///
/// `Modulo` and `Gamma` are interchangeable for ordinary advancement and agree
/// bit-for-bit on every seed. `Jump` applies the jump multiplier and is used
/// only to derive stream seeds.
///
/// # Examples
///
/// ```
/// use lehmer_core::{LehmerParams, ParamError};
/// use lehmer_rng::StepFormula;
///
/// let params = LehmerParams::STANDARD;
/// let seed = 123_456_789;
/// assert_eq!(
///     StepFormula::Modulo.apply(&params, seed),
///     StepFormula::Gamma.apply(&params, seed),
/// );
/// assert_eq!(StepFormula::Jump.apply(&params, 1), Ok(params.jump_multiplier));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepFormula {
    /// `(a · z) mod m` with a 64-bit accumulator.
    #[default]
    Modulo,
    /// Schrage's `γ` decomposition in 32-bit arithmetic.
    Gamma,
    /// Schrage's decomposition with the jump multiplier.
    Jump,
}

impl StepFormula {
    /// Whether this formula may advance a stream.
    #[inline]
    pub const fn is_advancing(self) -> bool {
        !matches!(self, StepFormula::Jump)
    }

    /// The multiplier this formula applies.
    #[inline]
    pub const fn multiplier(self, params: &LehmerParams) -> i32 {
        match self {
            StepFormula::Modulo | StepFormula::Gamma => params.multiplier,
            StepFormula::Jump => params.jump_multiplier,
        }
    }

    /// Evaluates one step of this formula on `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError`] if `params` fail [`LehmerParams::validate`].
    ///
    /// # Panics
    ///
    /// Panics if the result is zero, which only happens with parameters that
    /// do not form a full-period generator.
    pub fn apply(self, params: &LehmerParams, seed: i32) -> Result<i32, ParamError> {
        params.validate()?;
        Ok(Stepper::new(self, params).next(seed))
    }

    /// Lowercase name, as used in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            StepFormula::Modulo => "modulo",
            StepFormula::Gamma => "gamma",
            StepFormula::Jump => "jump",
        }
    }
}

impl FromStr for StepFormula {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "modulo" | "mod" => Ok(StepFormula::Modulo),
            "gamma" | "schrage" => Ok(StepFormula::Gamma),
            "jump" => Ok(StepFormula::Jump),
            _ => Err(ConfigError::InvalidFormula(s.to_string())),
        }
    }
}

impl fmt::Display for StepFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A step formula bound to concrete parameters, with its decomposition
/// precomputed.
///
/// Callers hand in parameters that already passed [`LehmerParams::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Stepper {
    formula: StepFormula,
    modulus: i32,
    multiplier: i32,
    schrage: Schrage,
}

impl Stepper {
    pub(crate) const fn new(formula: StepFormula, params: &LehmerParams) -> Self {
        let multiplier = formula.multiplier(params);
        Self {
            formula,
            modulus: params.modulus,
            multiplier,
            schrage: Schrage::new(multiplier, params.modulus),
        }
    }

    #[inline]
    pub(crate) const fn formula(&self) -> StepFormula {
        self.formula
    }

    /// Advances `seed` by one step.
    #[inline]
    pub(crate) fn next(&self, seed: i32) -> i32 {
        let next = match self.formula {
            StepFormula::Modulo => multiply_mod(seed, self.multiplier, self.modulus),
            StepFormula::Gamma | StepFormula::Jump => self.schrage.apply(seed),
        };
        // Zero is absorbing: continuing would emit a constant stream.
        assert!(
            next != 0,
            "Lehmer seed reached zero from {} (multiplier {}, modulus {}): parameters do not form a full-period generator",
            seed,
            self.multiplier,
            self.modulus
        );
        next
    }
}

impl LehmerState {
    /// Advances the active stream by one step.
    ///
    /// # Panics
    ///
    /// Panics if the seed reaches zero (a parameter defect, never a runtime
    /// input error).
    ///
    /// # Examples
    ///
    /// ```
    /// use lehmer_rng::LehmerState;
    ///
    /// let mut state = LehmerState::new(1);
    /// state.step();
    /// assert_eq!(state.get_seed(), 48271);
    /// ```
    #[inline]
    pub fn step(&mut self) {
        let next = self.advance.next(self.seeds[self.active]);
        self.seeds[self.active] = next;
    }

    /// Advances the active stream by one step and returns the new seed.
    #[inline]
    pub fn step_and_get(&mut self) -> i32 {
        self.step();
        self.get_seed()
    }

    /// Advances the active stream by `steps` steps.
    pub fn skip(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Switches the formula used for advancement.
    ///
    /// # Errors
    ///
    /// Returns [`LehmerError::JumpFormula`] for [`StepFormula::Jump`]; the
    /// active formula is left unchanged.
    pub fn set_formula(&mut self, formula: StepFormula) -> Result<(), LehmerError> {
        if !formula.is_advancing() {
            return Err(LehmerError::JumpFormula);
        }
        self.advance = Stepper::new(formula, &self.params);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lehmer_core::params::MODULUS;

    #[test]
    fn test_formula_parsing() {
        assert_eq!(StepFormula::from_str("modulo").unwrap(), StepFormula::Modulo);
        assert_eq!(StepFormula::from_str("MOD").unwrap(), StepFormula::Modulo);
        assert_eq!(StepFormula::from_str("Gamma").unwrap(), StepFormula::Gamma);
        assert_eq!(StepFormula::from_str("schrage").unwrap(), StepFormula::Gamma);
        assert_eq!(StepFormula::from_str("jump").unwrap(), StepFormula::Jump);
        assert!(StepFormula::from_str("delta").is_err());
    }

    #[test]
    fn test_formula_display_round_trip() {
        for formula in [StepFormula::Modulo, StepFormula::Gamma, StepFormula::Jump] {
            assert_eq!(StepFormula::from_str(&formula.to_string()).unwrap(), formula);
        }
    }

    #[test]
    fn test_only_jump_is_non_advancing() {
        assert!(StepFormula::Modulo.is_advancing());
        assert!(StepFormula::Gamma.is_advancing());
        assert!(!StepFormula::Jump.is_advancing());
    }

    #[test]
    fn test_first_steps_from_one() {
        let params = LehmerParams::STANDARD;
        assert_eq!(StepFormula::Modulo.apply(&params, 1), Ok(48271));
        assert_eq!(StepFormula::Gamma.apply(&params, 1), Ok(48271));
        assert_eq!(StepFormula::Modulo.apply(&params, 48271), Ok(182_605_794));
        assert_eq!(StepFormula::Gamma.apply(&params, 48271), Ok(182_605_794));
    }

    #[test]
    fn test_jump_differs_from_step() {
        let params = LehmerParams::STANDARD;
        assert_ne!(
            StepFormula::Jump.apply(&params, 12345),
            StepFormula::Modulo.apply(&params, 12345)
        );
    }

    #[test]
    #[should_panic(expected = "Lehmer seed reached zero")]
    fn test_zero_result_is_fatal() {
        // Composite modulus: 10 * 10 == 0 (mod 100)
        let params = LehmerParams {
            modulus: 100,
            multiplier: 10,
            jump_multiplier: 3,
        };
        let _ = StepFormula::Modulo.apply(&params, 10);
    }

    #[test]
    fn test_apply_rejects_unbounded_multiplier() {
        // q = 2147, r = 483647: the 32-bit decomposition would overflow
        let params = LehmerParams {
            multiplier: 1_000_000,
            ..LehmerParams::STANDARD
        };
        for formula in [StepFormula::Modulo, StepFormula::Gamma, StepFormula::Jump] {
            assert!(matches!(
                formula.apply(&params, 2_000_000_000),
                Err(ParamError::UnboundedDecomposition { .. })
            ));
        }
    }

    #[test]
    fn test_apply_rejects_degenerate_modulus() {
        let params = LehmerParams {
            modulus: 0,
            ..LehmerParams::STANDARD
        };
        assert_eq!(
            StepFormula::Modulo.apply(&params, 1),
            Err(ParamError::InvalidModulus(0))
        );
    }

    #[test]
    fn test_set_formula_rejects_jump() {
        let mut state = LehmerState::new(1);
        assert!(matches!(
            state.set_formula(StepFormula::Jump),
            Err(LehmerError::JumpFormula)
        ));
        assert_eq!(state.formula(), StepFormula::Modulo);

        state.set_formula(StepFormula::Gamma).unwrap();
        assert_eq!(state.formula(), StepFormula::Gamma);
    }

    #[test]
    fn test_skip_matches_repeated_step() {
        let mut stepped = LehmerState::new(42);
        let mut skipped = LehmerState::new(42);
        for _ in 0..500 {
            stepped.step();
        }
        skipped.skip(500);
        assert_eq!(stepped.get_seed(), skipped.get_seed());
    }

    #[test]
    fn test_step_stays_in_range() {
        let mut state = LehmerState::new(MODULUS - 1);
        for _ in 0..10_000 {
            let seed = state.step_and_get();
            assert!(seed > 0 && seed < MODULUS);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_modulo_and_gamma_agree(seed in 1i32..MODULUS) {
                let params = LehmerParams::STANDARD;
                prop_assert_eq!(
                    StepFormula::Modulo.apply(&params, seed),
                    StepFormula::Gamma.apply(&params, seed)
                );
            }

            #[test]
            fn test_jump_matches_wide_multiply(seed in 1i32..MODULUS) {
                let params = LehmerParams::STANDARD;
                prop_assert_eq!(
                    StepFormula::Jump.apply(&params, seed),
                    Ok(multiply_mod(seed, params.jump_multiplier, params.modulus))
                );
            }
        }
    }
}
