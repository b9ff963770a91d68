//! `rand` ecosystem integration.
//!
//! [`LehmerState`] implements [`RngCore`] and [`SeedableRng`] so code written
//! against `rand` (e.g. `Rng::gen_range`, `SliceRandom::shuffle`) can draw from
//! the active stream.
//!
//! A Lehmer draw carries 31 bits and its low-order bits are the weakest, so
//! each `u32` is assembled from the top 16 bits of two successive draws.

use rand::{Error, RngCore, SeedableRng};

use crate::state::LehmerState;

impl RngCore for LehmerState {
    fn next_u32(&mut self) -> u32 {
        // Seeds are in (0, 2^31 - 1), so bits 15..31 are the top 16 bits.
        let high = (self.step_and_get() as u32) >> 15;
        let low = (self.step_and_get() as u32) >> 15;
        (high << 16) | (low & 0xFFFF)
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for LehmerState {
    /// Little-endian root seed.
    type Seed = [u8; 4];

    /// Creates a default-sized state from a little-endian root seed.
    fn from_seed(seed: Self::Seed) -> Self {
        LehmerState::new(i32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::Rng;

    #[test]
    fn test_next_u32_uses_two_draws() {
        let mut rng = LehmerState::new(1);
        let mut shadow = LehmerState::new(1);
        let value = rng.next_u32();
        let high = (shadow.step_and_get() as u32) >> 15;
        let low = (shadow.step_and_get() as u32) >> 15;
        assert_eq!(value, (high << 16) | (low & 0xFFFF));
        assert_eq!(rng.get_seed(), shadow.get_seed());
    }

    #[test]
    fn test_fill_bytes_handles_partial_chunks() {
        let mut rng = LehmerState::new(9);
        let mut shadow = LehmerState::new(9);
        let mut bytes = [0u8; 7];
        rng.fill_bytes(&mut bytes);

        let first = shadow.next_u32().to_le_bytes();
        let second = shadow.next_u32().to_le_bytes();
        assert_eq!(&bytes[..4], &first);
        assert_eq!(&bytes[4..], &second[..3]);
    }

    #[test]
    fn test_from_seed_matches_new() {
        let seeded = LehmerState::from_seed(42i32.to_le_bytes());
        assert_eq!(seeded, LehmerState::new(42));
    }

    #[test]
    fn test_seed_from_u64_is_deterministic() {
        let mut a = LehmerState::seed_from_u64(7);
        let mut b = LehmerState::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_rng_extension_methods() {
        let mut rng = LehmerState::new(123_456_789);
        for _ in 0..1000 {
            let value = rng.gen_range(10..20);
            assert!((10..20).contains(&value));
        }

        let mut items: Vec<u32> = (0..32).collect();
        items.shuffle(&mut rng);
        items.sort_unstable();
        assert_eq!(items, (0..32).collect::<Vec<_>>());
    }
}
