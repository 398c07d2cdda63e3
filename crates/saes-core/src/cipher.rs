//! Key schedule and block encryption for the 5-round cipher.

use crate::gf16::mul_xn;
use crate::key::{Key, RoundKeys};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_nibbles};
use crate::sbox::sbox;
use crate::state::State;

/// Number of encryption rounds. The final round omits MixColumns.
pub const ROUNDS: usize = 5;

/// Keys in a full schedule: the whitening key plus one per round.
pub const NUM_ROUND_KEYS: usize = ROUNDS + 1;

/// Round constant for the schedule step at `round`: 0x1 at round 0, then
/// ascending powers of the field generator (0x2, 0x4, 0x8, 0x3).
fn round_constant(round: usize) -> u8 {
    if round == 0 {
        0x1
    } else {
        mul_xn(0x2, round - 1)
    }
}

/// Derives the key of round `round + 1` from the key of round `round`.
///
/// The last column is rotated up one entry and substituted through the
/// S-box; the round constant lands in its first entry. The result then
/// cascades across the columns.
pub fn derive_round_key(key: &Key, round: usize) -> Key {
    let mut transformed = key.column(3);
    transformed.rotate_left(1);
    for entry in transformed.iter_mut() {
        *entry = sbox(*entry);
    }
    transformed[0] ^= round_constant(round);

    let mut next = State::ZERO;
    let mut carry = transformed;
    for c in 0..4 {
        let old = key.column(c);
        let mut new = [0u8; 4];
        for (i, entry) in new.iter_mut().enumerate() {
            *entry = old[i] ^ carry[i];
        }
        next.set_column(c, new);
        carry = new;
    }
    next
}

/// Expands the initial key into all six round keys.
pub fn expand_key(key: &Key) -> RoundKeys {
    let mut keys = [*key; NUM_ROUND_KEYS];
    for round in 0..ROUNDS {
        keys[round + 1] = derive_round_key(&keys[round], round);
    }
    RoundKeys(keys)
}

/// Encrypts a single block with pre-expanded round keys.
pub fn encrypt_block(block: &State, round_keys: &RoundKeys) -> State {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_nibbles(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_nibbles(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state
}
