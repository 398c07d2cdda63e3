//! Affine-subspace membership tests over difference matrices.
//!
//! The distinguishing property lives in three families of subspaces of
//! the state space. Diagonal spaces are zero on one broken diagonal and
//! column spaces are zero on one column; the third family, where the
//! diagonals land after a round without column mixing, is zero on one
//! anti-diagonal. Each predicate tests the union of the four cosets of
//! its family.

use saes_core::State;

/// True if some broken diagonal of `diff` is entirely zero.
///
/// Pattern i covers the cells (row, col) with row = col + i (mod 4);
/// pattern 0 is the main diagonal.
pub fn in_u(diff: &State) -> bool {
    (0..4).any(|i| (0..4).all(|col| diff.get((col + i) % 4, col) == 0))
}

/// True if some column of `diff` is entirely zero.
pub fn in_v(diff: &State) -> bool {
    (0..4).any(|col| (0..4).all(|row| diff.get(row, col) == 0))
}

/// True if some anti-diagonal of `diff` is entirely zero.
///
/// Pattern i covers the cells (row, col) with row + col = i (mod 4). This
/// is where the diagonal family lands in ciphertext differences, because
/// the final round omits column mixing; it is the subspace the collision
/// scan targets.
pub fn in_w(diff: &State) -> bool {
    (0..4).any(|i| (0..4).all(|col| diff.get((i + 4 - col) % 4, col) == 0))
}
