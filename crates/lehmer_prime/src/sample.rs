//! Deterministic prime samples.

use tracing::debug;

use crate::error::PrimeError;

/// Returns every prime `p <= limit` in ascending order.
///
/// Uses a sieve of Eratosthenes over odd candidates.
///
/// # Errors
///
/// - [`PrimeError::SampleTooSmall`] if `limit < 2`
/// - [`PrimeError::Allocation`] if the sieve cannot be allocated
///
/// # Examples
///
/// ```
/// use lehmer_prime::prime_sample;
///
/// assert_eq!(prime_sample(20).unwrap(), vec![2, 3, 5, 7, 11, 13, 17, 19]);
/// assert!(prime_sample(1).is_err());
/// ```
pub fn prime_sample(limit: u32) -> Result<Vec<u32>, PrimeError> {
    if limit < 2 {
        return Err(PrimeError::SampleTooSmall { limit });
    }

    // Index i stands for the odd number 2i + 1.
    let len = (limit as usize - 1) / 2 + 1;
    let mut composite = Vec::new();
    composite
        .try_reserve_exact(len)
        .map_err(|_| PrimeError::Allocation { limit })?;
    composite.resize(len, false);

    let limit = u64::from(limit);
    let mut primes = vec![2];
    for index in 1..len {
        if composite[index] {
            continue;
        }
        let p = 2 * index as u64 + 1;
        primes.push(p as u32);
        let mut multiple = p * p;
        while multiple <= limit {
            composite[(multiple / 2) as usize] = true;
            multiple += 2 * p;
        }
    }

    debug!(limit, count = primes.len(), "Prime sample generated");
    Ok(primes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_below_two_is_error() {
        assert_eq!(
            prime_sample(0),
            Err(PrimeError::SampleTooSmall { limit: 0 })
        );
        assert_eq!(
            prime_sample(1),
            Err(PrimeError::SampleTooSmall { limit: 1 })
        );
    }

    #[test]
    fn test_small_limits() {
        assert_eq!(prime_sample(2).unwrap(), vec![2]);
        assert_eq!(prime_sample(3).unwrap(), vec![2, 3]);
        assert_eq!(prime_sample(4).unwrap(), vec![2, 3]);
        assert_eq!(prime_sample(9).unwrap(), vec![2, 3, 5, 7]);
        assert_eq!(prime_sample(11).unwrap(), vec![2, 3, 5, 7, 11]);
    }

    #[test]
    fn test_prime_counting() {
        assert_eq!(prime_sample(100).unwrap().len(), 25);
        assert_eq!(prime_sample(1_000).unwrap().len(), 168);
        assert_eq!(prime_sample(100_000).unwrap().len(), 9_592);
    }

    #[test]
    fn test_includes_limit_when_prime() {
        let primes = prime_sample(48_271).unwrap();
        assert_eq!(primes.last(), Some(&48_271));
        assert!(primes.windows(2).all(|w| w[0] < w[1]));
    }
}
