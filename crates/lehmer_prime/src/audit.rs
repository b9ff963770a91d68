//! Deterministic audit of generator parameters.
//!
//! Checks by trial division that the modulus and both multipliers are prime,
//! and whether the step multiplier is a primitive root of the modulus. A prime
//! modulus with a primitive-root multiplier yields a full-period generator.

use std::fmt;

use lehmer_core::LehmerParams;
use tracing::debug;

use crate::modexp::modular_exponent;

/// Multipliers with a published full-period analysis.
pub const TRUSTED_MULTIPLIERS: [u64; 2] = [16_807, 48_271];

/// Mersenne primes accepted as moduli.
pub const TRUSTED_MODULI: [u64; 2] = [(1 << 31) - 1, (1 << 61) - 1];

/// Primality by trial division.
///
/// Exact but `O(√n)`; intended for 32-bit parameters.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Distinct prime factors of `n` in ascending order.
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut divisor = 2;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            factors.push(divisor);
            while n % divisor == 0 {
                n /= divisor;
            }
        }
        divisor += if divisor == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Whether `a` generates the full multiplicative group modulo the prime `p`.
///
/// `a` is a primitive root iff `a^((p − 1)/q) ≠ 1 (mod p)` for every prime
/// factor `q` of `p − 1`.
pub fn is_primitive_root(a: u64, p: u64) -> bool {
    if p < 2 || a % p == 0 {
        return false;
    }
    let order = p - 1;
    prime_factors(order)
        .into_iter()
        .all(|q| modular_exponent(a, order / q, p) != 1)
}

/// Result of [`audit_params`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamAudit {
    /// Parameters that were audited.
    pub params: LehmerParams,
    /// The modulus is prime.
    pub modulus_prime: bool,
    /// The step multiplier is prime.
    pub multiplier_prime: bool,
    /// The jump multiplier is prime.
    pub jump_multiplier_prime: bool,
    /// The step multiplier is a primitive root of the modulus.
    pub full_period: bool,
    /// The modulus is in [`TRUSTED_MODULI`].
    pub modulus_trusted: bool,
    /// The step multiplier is in [`TRUSTED_MULTIPLIERS`].
    pub multiplier_trusted: bool,
}

impl ParamAudit {
    /// Prime modulus, full-period multiplier, and both drawn from the
    /// trusted tables.
    pub fn is_trusted(&self) -> bool {
        self.modulus_prime && self.full_period && self.modulus_trusted && self.multiplier_trusted
    }
}

impl fmt::Display for ParamAudit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "MODULUS {} is prime? {}",
            self.params.modulus, self.modulus_prime
        )?;
        writeln!(
            f,
            "MULTIPLIER {} is prime? {} (primitive root: {})",
            self.params.multiplier, self.multiplier_prime, self.full_period
        )?;
        write!(
            f,
            "JUMP {} is prime? {}",
            self.params.jump_multiplier, self.jump_multiplier_prime
        )
    }
}

/// Audits a parameter set.
///
/// Negative parameters are reported as non-prime and untrusted.
///
/// # Examples
///
/// ```
/// use lehmer_core::LehmerParams;
/// use lehmer_prime::audit_params;
///
/// assert!(audit_params(&LehmerParams::STANDARD).is_trusted());
/// assert!(audit_params(&LehmerParams::MINIMAL_STANDARD).is_trusted());
/// ```
pub fn audit_params(params: &LehmerParams) -> ParamAudit {
    let modulus = u64::try_from(params.modulus).unwrap_or(0);
    let multiplier = u64::try_from(params.multiplier).unwrap_or(0);
    let jump = u64::try_from(params.jump_multiplier).unwrap_or(0);

    let modulus_prime = is_prime(modulus);
    let audit = ParamAudit {
        params: *params,
        modulus_prime,
        multiplier_prime: is_prime(multiplier),
        jump_multiplier_prime: is_prime(jump),
        full_period: modulus_prime && is_primitive_root(multiplier, modulus),
        modulus_trusted: TRUSTED_MODULI.contains(&modulus),
        multiplier_trusted: TRUSTED_MULTIPLIERS.contains(&multiplier),
    };
    debug!(
        modulus = params.modulus,
        multiplier = params.multiplier,
        trusted = audit.is_trusted(),
        "Parameter audit completed"
    );
    audit
}
