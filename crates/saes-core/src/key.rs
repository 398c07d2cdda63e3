//! Key types for the small-scale cipher.

use crate::cipher::NUM_ROUND_KEYS;
use crate::state::State;

/// Cipher key; shares the 4x4 nibble layout with [`State`].
pub type Key = State;

/// Expanded round keys: the whitening key plus one key per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Key; NUM_ROUND_KEYS]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=5).
    #[inline]
    pub fn get(&self, round: usize) -> &Key {
        &self.0[round]
    }
}
