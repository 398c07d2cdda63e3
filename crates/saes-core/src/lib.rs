//! Small-scale AES: a 4-bit-word analogue of AES-128 on a 4x4 nibble state.
//!
//! This crate implements the cipher side of the workspace and provides:
//! - GF(2^4) arithmetic under the reduction polynomial x^4 + x + 1.
//! - The nibble S-box and the per-round state transformations.
//! - The key schedule and five-round single-block encryption (the last
//!   round skips MixColumns).
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened. It follows the small-scale AES variants of Cid, Murphy and
//! Robshaw, the usual reduced target for experimental cryptanalysis.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod gf16;
mod key;
mod round;
mod sbox;
mod state;

pub use crate::cipher::{derive_round_key, encrypt_block, expand_key, NUM_ROUND_KEYS, ROUNDS};
pub use crate::gf16::{mul, mul_x, mul_xn};
pub use crate::key::{Key, RoundKeys};
pub use crate::round::{add_round_key, inv_mix_column, mix_columns, shift_rows, sub_nibbles};
pub use crate::sbox::{inv_sbox, sbox};
pub use crate::state::State;
