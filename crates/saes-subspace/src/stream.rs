//! Deterministic randomness for the distinguisher.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Scalar seed used when the caller does not provide one.
pub const DEFAULT_SEED: u32 = 5489;

/// Seedable stream of nibbles and small integers.
///
/// Every component that consumes randomness borrows one of these from the
/// caller; with the seed fixed, a whole run replays bit-for-bit. Wall-clock
/// and OS-entropy seeding are not offered.
#[derive(Clone, Debug)]
pub struct NibbleStream {
    rng: ChaCha20Rng,
}

impl NibbleStream {
    /// Seeds the stream from a 32-bit scalar.
    pub fn from_scalar(seed: u32) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..4].copy_from_slice(&seed.to_le_bytes());
        Self {
            rng: ChaCha20Rng::from_seed(bytes),
        }
    }

    /// Seeds the stream from an array of 32-bit words.
    ///
    /// Words fold into the 256-bit seed little-endian, XOR-wrapping after
    /// eight. The empty slice behaves like [`NibbleStream::unseeded`].
    pub fn from_words(words: &[u32]) -> Self {
        if words.is_empty() {
            return Self::unseeded();
        }
        let mut bytes = [0u8; 32];
        for (i, word) in words.iter().enumerate() {
            let offset = (i % 8) * 4;
            for (dst, src) in bytes[offset..offset + 4].iter_mut().zip(word.to_le_bytes()) {
                *dst ^= src;
            }
        }
        Self {
            rng: ChaCha20Rng::from_seed(bytes),
        }
    }

    /// Stream seeded with the fixed default scalar.
    pub fn unseeded() -> Self {
        Self::from_scalar(DEFAULT_SEED)
    }

    /// Draws a uniform integer in `[min, max]`, both ends inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn uniform(&mut self, min: u32, max: u32) -> u32 {
        assert!(min <= max, "empty range: {min} > {max}");
        self.rng.gen_range(min..=max)
    }

    /// Draws one nibble.
    #[inline]
    pub fn nibble(&mut self) -> u8 {
        self.uniform(0, 0xF) as u8
    }
}
