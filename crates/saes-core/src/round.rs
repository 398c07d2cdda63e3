//! Round transformations of the small-scale cipher.

use crate::gf16::{mul, mul_x};
use crate::key::Key;
use crate::sbox::sbox;
use crate::state::State;

/// Substitutes every nibble of the state through the S-box.
#[inline]
pub fn sub_nibbles(state: &mut State) {
    for row in 0..4 {
        for col in 0..4 {
            state.set(row, col, sbox(state.get(row, col)));
        }
    }
}

/// Cyclically left-rotates row i by i positions.
#[inline]
pub fn shift_rows(state: &mut State) {
    for row in 1..4 {
        let old = state.row(row);
        let mut rotated = [0u8; 4];
        for (col, value) in rotated.iter_mut().enumerate() {
            *value = old[(col + row) % 4];
        }
        state.set_row(row, rotated);
    }
}

fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = mul_x(a0) ^ (mul_x(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ mul_x(a1) ^ (mul_x(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ mul_x(a2) ^ (mul_x(a3) ^ a3);
    col[3] = (mul_x(a0) ^ a0) ^ a1 ^ a2 ^ mul_x(a3);
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for c in 0..4 {
        let mut column = state.column(c);
        mix_single_column(&mut column);
        state.set_column(c, column);
    }
}

/// Inverts the column-mixing step on a single column in isolation.
///
/// The forward cipher never calls this; the structured sampler uses it to
/// pre-condition the active column of a coset.
#[inline]
pub fn inv_mix_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = mul(a0, 0xE) ^ mul(a1, 0xB) ^ mul(a2, 0xD) ^ mul(a3, 0x9);
    col[1] = mul(a0, 0x9) ^ mul(a1, 0xE) ^ mul(a2, 0xB) ^ mul(a3, 0xD);
    col[2] = mul(a0, 0xD) ^ mul(a1, 0x9) ^ mul(a2, 0xE) ^ mul(a3, 0xB);
    col[3] = mul(a0, 0xB) ^ mul(a1, 0xD) ^ mul(a2, 0x9) ^ mul(a3, 0xE);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &Key) {
    state.xor_in_place(round_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_rows_rotates_each_row_by_its_index() {
        let mut state =
            State::from_nibbles([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
        shift_rows(&mut state);
        assert_eq!(state.row(0), [0, 1, 2, 3]);
        assert_eq!(state.row(1), [5, 6, 7, 4]);
        assert_eq!(state.row(2), [10, 11, 8, 9]);
        assert_eq!(state.row(3), [15, 12, 13, 14]);
    }

    #[test]
    fn four_row_rotations_are_the_identity() {
        let original =
            State::from_nibbles([3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3]);
        let mut state = original;
        for _ in 0..4 {
            shift_rows(&mut state);
        }
        assert_eq!(state, original);
    }

    #[test]
    fn mix_columns_of_unit_column_gives_matrix_column() {
        let mut state = State::ZERO;
        state.set(0, 0, 0x1);
        mix_columns(&mut state);
        assert_eq!(state.column(0), [0x2, 0x1, 0x1, 0x3]);
        for c in 1..4 {
            assert_eq!(state.column(c), [0, 0, 0, 0]);
        }
    }

    #[test]
    fn partial_inverse_undoes_column_mixing() {
        for seed in 0u8..16 {
            let column = [seed, seed ^ 0x3, mul_x(seed), 0x9];
            let mut state = State::ZERO;
            state.set_column(0, column);
            mix_columns(&mut state);
            let mut mixed = state.column(0);
            inv_mix_column(&mut mixed);
            assert_eq!(mixed, column);
        }
    }

    #[test]
    fn round_key_addition_is_an_involution() {
        let key = State::from_nibbles([7, 0, 2, 9, 1, 1, 8, 4, 6, 2, 0, 3, 5, 5, 5, 0xF]);
        let original = State::from_nibbles([0, 2, 4, 6, 8, 10, 12, 14, 1, 3, 5, 7, 9, 11, 13, 15]);
        let mut state = original;
        add_round_key(&mut state, &key);
        add_round_key(&mut state, &key);
        assert_eq!(state, original);
    }
}
