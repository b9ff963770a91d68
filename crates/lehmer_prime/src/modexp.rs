//! Modular exponentiation.

/// Computes `base^exponent mod modulus` by square-and-multiply.
///
/// Intermediate products are held in `u128`, so any `u64` modulus is safe.
/// A modulus of 1 yields 0 and `x^0` yields 1 for every other modulus.
///
/// # Panics
///
/// Panics if `modulus` is zero.
///
/// # Examples
///
/// ```
/// use lehmer_prime::modular_exponent;
///
/// assert_eq!(modular_exponent(2, 10, 1000), 24);
/// assert_eq!(modular_exponent(48_271, 2_147_483_646, 2_147_483_647), 1);
/// ```
pub fn modular_exponent(base: u64, exponent: u64, modulus: u64) -> u64 {
    assert!(modulus != 0, "modulus must be non-zero");
    if modulus == 1 {
        return 0;
    }

    let m = u128::from(modulus);
    let mut result: u128 = 1;
    let mut base = u128::from(base) % m;
    let mut exponent = exponent;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base % m;
        }
        exponent >>= 1;
        base = base * base % m;
    }

    // result < modulus <= u64::MAX
    result as u64
}

/// Computes `a · b mod modulus` without overflow.
#[inline]
pub(crate) fn multiply_mod(a: u64, b: u64, modulus: u64) -> u64 {
    (u128::from(a) * u128::from(b) % u128::from(modulus)) as u64
}
