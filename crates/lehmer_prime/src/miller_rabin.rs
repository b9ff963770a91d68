//! Probabilistic primality testing.
//!
//! Writes `n − 1 = d · 2^s` with `d` odd and checks random witnesses
//! `a ∈ [2, n − 2]` drawn from the active stream of a [`LehmerState`].
//! A composite `n` survives a single round with probability at most 1/4.
//!
//! ## References
//!
//! - Rabin, M. O. (1980). "Probabilistic algorithm for testing primality".

use lehmer_rng::LehmerState;
use tracing::trace;

use crate::modexp::{modular_exponent, multiply_mod};

/// Tests whether `n` is probably prime using `rounds` random witnesses.
///
/// - `n < 2` is not prime, `2` and `3` are prime, other even `n` are not.
///   None of these consume a draw.
/// - Otherwise each round draws exactly one seed from the active stream and
///   uses the witness `2 + seed mod (n − 3)`.
///
/// A `false` result is always correct; a `true` result is wrong with
/// probability at most `4^-rounds`. Zero rounds accepts every odd `n > 3`.
///
/// # Examples
///
/// ```
/// use lehmer_prime::miller_rabin;
/// use lehmer_rng::LehmerState;
///
/// let mut state = LehmerState::new(123_456_789);
/// assert!(miller_rabin(&mut state, 2_147_483_647, 10));
/// assert!(!miller_rabin(&mut state, 561, 10));
/// ```
pub fn miller_rabin(state: &mut LehmerState, n: u64, rounds: u32) -> bool {
    match n {
        0 | 1 => return false,
        2 | 3 => return true,
        _ if n % 2 == 0 => return false,
        _ => {}
    }

    let n_minus_one = n - 1;
    let s = n_minus_one.trailing_zeros();
    let d = n_minus_one >> s;

    for round in 0..rounds {
        // step_and_get is always positive
        let draw = state.step_and_get() as u64;
        let witness = 2 + draw % (n - 3);
        let composite = is_witness(witness, d, s, n);
        trace!(n, round, witness, composite, "Miller-Rabin round");
        if composite {
            return false;
        }
    }
    true
}

/// Whether `witness` proves `n` composite.
fn is_witness(witness: u64, d: u64, s: u32, n: u64) -> bool {
    let mut x = modular_exponent(witness, d, n);
    if x == 1 || x == n - 1 {
        return false;
    }
    for _ in 1..s {
        x = multiply_mod(x, x, n);
        if x == n - 1 {
            return false;
        }
        if x == 1 {
            return true;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> LehmerState {
        LehmerState::new(123_456_789)
    }

    #[test]
    fn test_trivial_cases_consume_no_draws() {
        let mut state = state();
        for n in [0, 1, 4, 100, 1_000_000] {
            assert!(!miller_rabin(&mut state, n, 20), "{} reported prime", n);
        }
        assert!(miller_rabin(&mut state, 2, 20));
        assert!(miller_rabin(&mut state, 3, 20));
        assert_eq!(state.get_seed(), 123_456_789);
    }

    #[test]
    fn test_small_primes() {
        let mut state = state();
        for n in [5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 97, 7919] {
            assert!(miller_rabin(&mut state, n, 20), "{} rejected", n);
        }
    }

    #[test]
    fn test_small_composites() {
        let mut state = state();
        for n in [9, 15, 21, 25, 27, 33, 35, 49, 91, 121, 7917] {
            assert!(!miller_rabin(&mut state, n, 20), "{} accepted", n);
        }
    }

    #[test]
    fn test_carmichael_numbers() {
        let mut state = state();
        for n in [561, 1105, 1729, 2465, 2821, 6601, 8911, 41041] {
            assert!(!miller_rabin(&mut state, n, 20), "{} accepted", n);
        }
    }

    #[test]
    fn test_generator_parameters() {
        let mut state = state();
        assert!(miller_rabin(&mut state, 2_147_483_647, 20));
        assert!(miller_rabin(&mut state, 48_271, 20));
        assert!(miller_rabin(&mut state, 22_937, 20));
        assert!(miller_rabin(&mut state, (1 << 61) - 1, 20));
        assert!(!miller_rabin(&mut state, 16_807, 20));
    }

    #[test]
    fn test_one_draw_per_round() {
        let mut tested = state();
        let mut shadow = state();
        assert!(miller_rabin(&mut tested, 1_000_003, 7));
        shadow.skip(7);
        assert_eq!(tested.get_seed(), shadow.get_seed());
    }

    #[test]
    fn test_zero_rounds_accepts_odd() {
        let mut state = state();
        assert!(miller_rabin(&mut state, 9, 0));
        assert_eq!(state.get_seed(), 123_456_789);
    }

    #[test]
    fn test_smallest_odd_candidate() {
        // n = 5 leaves witnesses {2, 3}
        let mut state = state();
        for _ in 0..100 {
            assert!(miller_rabin(&mut state, 5, 1));
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn trial_division(n: u64) -> bool {
            n >= 2 && (2..).take_while(|i| i * i <= n).all(|i| n % i != 0)
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_agrees_with_trial_division(n in 0u64..200_000, seed in 1i32..i32::MAX) {
                let mut state = LehmerState::new(seed);
                prop_assert_eq!(miller_rabin(&mut state, n, 25), trial_division(n));
            }
        }
    }
}
