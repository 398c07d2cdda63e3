//! Structured plaintext cosets and the shared constants table.

use saes_core::{inv_mix_column, inv_sbox, Key, State};

use crate::stream::NibbleStream;

/// Plaintexts per coset, one for each value of the active nibble.
pub const COSET_SIZE: usize = 16;

/// Off-diagonal nibbles shared by all members of one coset.
pub const FIXED_NIBBLES: usize = 12;

/// Flattened row-major positions outside the main diagonal, in the order
/// the shared nibbles fill them.
const OFF_DIAGONAL: [usize; FIXED_NIBBLES] = [1, 2, 3, 4, 6, 7, 8, 9, 11, 12, 13, 14];

/// Four candidate nibbles for the main diagonal of the secret key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagonalGuess([u8; 4]);

impl DiagonalGuess {
    /// Builds a guess from four explicit nibbles.
    ///
    /// # Panics
    ///
    /// Panics if any value exceeds 0xF.
    pub fn new(nibbles: [u8; 4]) -> Self {
        for &n in &nibbles {
            assert!(n <= 0xF, "nibble out of range: {n:#x}");
        }
        Self(nibbles)
    }

    /// Maps a candidate index in [0, 65536) onto a guess, most significant
    /// nibble first.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn from_index(index: usize) -> Self {
        assert!(index < 1 << 16, "candidate index out of range: {index}");
        Self([
            ((index >> 12) & 0xF) as u8,
            ((index >> 8) & 0xF) as u8,
            ((index >> 4) & 0xF) as u8,
            (index & 0xF) as u8,
        ])
    }

    /// The main diagonal of `key` as a guess.
    pub fn from_key_diagonal(key: &Key) -> Self {
        Self([key.get(0, 0), key.get(1, 1), key.get(2, 2), key.get(3, 3)])
    }

    /// The candidate index this guess occupies in the sweep order.
    pub fn index(&self) -> usize {
        usize::from(self.0[0]) << 12
            | usize::from(self.0[1]) << 8
            | usize::from(self.0[2]) << 4
            | usize::from(self.0[3])
    }

    /// The four guessed nibbles.
    pub fn nibbles(&self) -> [u8; 4] {
        self.0
    }

    /// True if the guess equals the main diagonal of `key`.
    pub fn matches_diagonal(&self, key: &Key) -> bool {
        *self == Self::from_key_diagonal(key)
    }
}

/// Shared table of off-diagonal nibbles, one row per planned test.
///
/// Built once before the candidate sweep; all 65536 candidates read the
/// same rows, so test t of one candidate and test t of another differ only
/// in the guessed diagonal.
#[derive(Clone, Debug)]
pub struct ConstantsTable {
    rows: Vec<[u8; FIXED_NIBBLES]>,
}

impl ConstantsTable {
    /// Draws `tests` rows of twelve nibbles from `stream`.
    pub fn generate(stream: &mut NibbleStream, tests: usize) -> Self {
        let mut rows = Vec::with_capacity(tests);
        for _ in 0..tests {
            rows.push(fresh_fixed_nibbles(stream));
        }
        Self { rows }
    }

    /// Number of planned tests.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The shared nibbles of test `test`.
    ///
    /// # Panics
    ///
    /// Panics if `test` is out of range.
    pub fn row(&self, test: usize) -> &[u8; FIXED_NIBBLES] {
        &self.rows[test]
    }
}

/// Draws the twelve shared nibbles for a single test straight from the
/// stream.
///
/// This is the uncorrelated legacy sampling strategy: equivalent in intent
/// to reading a [`ConstantsTable`] row, but nothing is shared across
/// candidates, so a full sweep re-draws everything 65536 times over. Kept
/// for cross-validation; the search path always reads the table.
pub fn fresh_fixed_nibbles(stream: &mut NibbleStream) -> [u8; FIXED_NIBBLES] {
    let mut nibbles = [0u8; FIXED_NIBBLES];
    for n in nibbles.iter_mut() {
        *n = stream.nibble();
    }
    nibbles
}

/// Builds the 16-plaintext coset for one test.
///
/// Member j carries, on its main diagonal, the column (j, 0, 0, 0) pulled
/// back through the single-column inverse mixing and the inverse S-box and
/// masked with the guess; the 12 off-diagonal positions come from `fixed`.
/// When the guess equals the key's main diagonal, the first round maps the
/// members onto a coset of the single-nibble space at (0, 0).
pub fn build_coset(guess: &DiagonalGuess, fixed: &[u8; FIXED_NIBBLES]) -> [State; COSET_SIZE] {
    let guess_nibbles = guess.nibbles();
    let mut coset = [State::ZERO; COSET_SIZE];
    for (active, plaintext) in coset.iter_mut().enumerate() {
        let mut column = [active as u8, 0, 0, 0];
        inv_mix_column(&mut column);

        let mut flat = [0u8; 16];
        for (i, entry) in column.into_iter().enumerate() {
            flat[5 * i] = inv_sbox(entry) ^ guess_nibbles[i];
        }
        for (slot, &position) in OFF_DIAGONAL.iter().enumerate() {
            flat[position] = fixed[slot];
        }
        *plaintext = State::from_nibbles(flat);
    }
    coset
}
