//! Collision tests over encrypted cosets and the random-permutation oracle.

use saes_core::{encrypt_block, RoundKeys, State};

use crate::sampler::COSET_SIZE;
use crate::stream::NibbleStream;
use crate::subspace::in_w;

/// Encrypts every member of a coset under the same schedule.
pub fn encrypt_coset(coset: &[State; COSET_SIZE], round_keys: &RoundKeys) -> [State; COSET_SIZE] {
    let mut ciphertexts = [State::ZERO; COSET_SIZE];
    for (ciphertext, plaintext) in ciphertexts.iter_mut().zip(coset.iter()) {
        *ciphertext = encrypt_block(plaintext, round_keys);
    }
    ciphertexts
}

/// Scans the 120 unordered ciphertext pairs for a difference inside the
/// target subspace, stopping at the first hit.
pub fn any_collision(ciphertexts: &[State; COSET_SIZE]) -> bool {
    for i in 0..COSET_SIZE {
        for j in (i + 1)..COSET_SIZE {
            if in_w(&ciphertexts[i].xor(&ciphertexts[j])) {
                return true;
            }
        }
    }
    false
}

/// Draws 16 pairwise-distinct random states, the stand-in for the
/// ciphertexts of a uniformly random permutation.
///
/// Rejection-sampled: a duplicate draw is discarded and retried, matching
/// the pairwise distinctness a permutation guarantees.
pub fn distinct_random_states(stream: &mut NibbleStream) -> [State; COSET_SIZE] {
    let mut states = [State::ZERO; COSET_SIZE];
    for filled in 0..COSET_SIZE {
        loop {
            let candidate = random_state(stream);
            if !states[..filled].contains(&candidate) {
                states[filled] = candidate;
                break;
            }
        }
    }
    states
}

fn random_state(stream: &mut NibbleStream) -> State {
    let mut nibbles = [0u8; 16];
    for n in nibbles.iter_mut() {
        *n = stream.nibble();
    }
    State::from_nibbles(nibbles)
}
