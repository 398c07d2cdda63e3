//! State representation helpers.

/// A 4x4 matrix of nibbles stored row-major, the cipher's state.
///
/// Round operations mostly address the matrix column-wise; the accessors
/// below keep that addressing explicit. [`crate::Key`] shares this layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State([u8; 16]);

impl State {
    /// The all-zero state.
    pub const ZERO: Self = Self([0; 16]);

    /// Builds a state from 16 nibbles in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if any value exceeds 0xF.
    pub fn from_nibbles(nibbles: [u8; 16]) -> Self {
        for &n in &nibbles {
            assert!(n <= 0xF, "nibble out of range: {n:#x}");
        }
        Self(nibbles)
    }

    /// Returns the nibble at (`row`, `col`).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < 4 && col < 4);
        self.0[4 * row + col]
    }

    /// Writes the nibble at (`row`, `col`).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        debug_assert!(row < 4 && col < 4);
        debug_assert!(value <= 0xF, "nibble out of range: {value:#x}");
        self.0[4 * row + col] = value;
    }

    /// Returns row `row` as an array.
    #[inline]
    pub fn row(&self, row: usize) -> [u8; 4] {
        [
            self.get(row, 0),
            self.get(row, 1),
            self.get(row, 2),
            self.get(row, 3),
        ]
    }

    /// Replaces row `row`.
    #[inline]
    pub fn set_row(&mut self, row: usize, values: [u8; 4]) {
        for (col, value) in values.into_iter().enumerate() {
            self.set(row, col, value);
        }
    }

    /// Returns column `col` as an array.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        [
            self.get(0, col),
            self.get(1, col),
            self.get(2, col),
            self.get(3, col),
        ]
    }

    /// Replaces column `col`.
    #[inline]
    pub fn set_column(&mut self, col: usize, values: [u8; 4]) {
        for (row, value) in values.into_iter().enumerate() {
            self.set(row, col, value);
        }
    }

    /// Element-wise XOR, the difference of two states.
    #[inline]
    pub fn xor(&self, rhs: &Self) -> Self {
        let mut out = *self;
        out.xor_in_place(rhs);
        out
    }

    /// XORs `rhs` into `self`.
    #[inline]
    pub fn xor_in_place(&mut self, rhs: &Self) {
        for (d, r) in self.0.iter_mut().zip(rhs.0.iter()) {
            *d ^= *r;
        }
    }

    /// Read-only view of the backing nibbles in row-major order.
    #[inline]
    pub fn as_nibbles(&self) -> &[u8; 16] {
        &self.0
    }
}
