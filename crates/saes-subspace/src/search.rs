//! Exhaustive sweep of the 65536 diagonal-key candidates.

use saes_core::{expand_key, Key, RoundKeys};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::collision::{any_collision, distinct_random_states, encrypt_coset};
use crate::sampler::{build_coset, ConstantsTable, DiagonalGuess};
use crate::stream::NibbleStream;

/// Size of the candidate space: every four-nibble diagonal guess.
pub const CANDIDATE_COUNT: usize = 1 << 16;

/// Default number of collision tests per candidate, sized so the pair count
/// approaches the birthday bound of the target subspace dimension.
pub const DEFAULT_TESTS: usize = 4100;

/// Which oracle produces the states a collision test scans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OracleKind {
    /// Encrypt the structured coset under the secret key.
    Cipher,
    /// Replace ciphertexts with pairwise-distinct random states.
    RandomPermutation,
}

/// Parameters of one search run.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Secret key under attack; the sweep recovers its main diagonal.
    pub key: Key,
    /// Collision tests per candidate.
    pub tests_per_candidate: usize,
    /// State source for the collision tests.
    pub oracle: OracleKind,
}

impl SearchConfig {
    /// Cipher-backed search with the default test batch.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            tests_per_candidate: DEFAULT_TESTS,
            oracle: OracleKind::Cipher,
        }
    }
}

/// A candidate with no observed collision across its whole test batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Survivor {
    /// The surviving guess.
    pub guess: DiagonalGuess,
    /// Whether the guess equals the secret key's main diagonal. Diagnostic
    /// annotation only; it never feeds the verdict.
    pub is_right_key: bool,
}

/// Overall classification of the oracle after a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// At least one candidate survived, consistent with the 5-round cipher.
    CipherLike,
    /// Every candidate collided somewhere, consistent with a random
    /// permutation.
    RandomLike,
}

/// Result of a full candidate sweep.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Surviving candidates in sweep order.
    pub survivors: Vec<Survivor>,
    /// Final classification.
    pub verdict: Verdict,
}

impl SearchOutcome {
    fn from_survivors(survivors: Vec<Survivor>) -> Self {
        let verdict = if survivors.is_empty() {
            Verdict::RandomLike
        } else {
            Verdict::CipherLike
        };
        Self { survivors, verdict }
    }
}

fn survivor(guess: DiagonalGuess, key: &Key) -> Survivor {
    Survivor {
        guess,
        is_right_key: guess.matches_diagonal(key),
    }
}

/// Runs one candidate's whole test batch against the cipher oracle.
///
/// The candidate survives when no test produced a collision; the scan
/// stops at the first collision.
pub fn candidate_survives(
    guess: &DiagonalGuess,
    table: &ConstantsTable,
    round_keys: &RoundKeys,
) -> bool {
    for test in 0..table.len() {
        let coset = build_coset(guess, table.row(test));
        let ciphertexts = encrypt_coset(&coset, round_keys);
        if any_collision(&ciphertexts) {
            return false;
        }
    }
    true
}

/// Runs one candidate's test batch against the random-permutation oracle.
pub fn random_candidate_survives(stream: &mut NibbleStream, tests: usize) -> bool {
    for _ in 0..tests {
        let states = distinct_random_states(stream);
        if any_collision(&states) {
            return false;
        }
    }
    true
}

/// Sweeps all candidates sequentially and collects the survivors.
///
/// For the cipher oracle the key schedule and the shared constants table
/// are built once, before the loop, and every candidate reads them
/// immutably. The random-permutation oracle ignores the guesses and simply
/// runs the same number of batches against random states.
pub fn run_search(config: &SearchConfig, stream: &mut NibbleStream) -> SearchOutcome {
    let survivors: Vec<Survivor> = match config.oracle {
        OracleKind::Cipher => {
            let round_keys = expand_key(&config.key);
            let table = ConstantsTable::generate(stream, config.tests_per_candidate);
            (0..CANDIDATE_COUNT)
                .filter_map(|index| {
                    let guess = DiagonalGuess::from_index(index);
                    candidate_survives(&guess, &table, &round_keys)
                        .then(|| survivor(guess, &config.key))
                })
                .collect()
        }
        OracleKind::RandomPermutation => (0..CANDIDATE_COUNT)
            .filter_map(|index| {
                let guess = DiagonalGuess::from_index(index);
                random_candidate_survives(stream, config.tests_per_candidate)
                    .then(|| survivor(guess, &config.key))
            })
            .collect(),
    };
    SearchOutcome::from_survivors(survivors)
}

/// Sweeps the candidates across rayon workers.
///
/// Observable results equal [`run_search`]: the table and schedule are
/// shared read-only and survivors come back in sweep order. A
/// random-permutation config consumes the single sequential stream and
/// therefore falls back to the sequential sweep.
#[cfg(feature = "parallel")]
pub fn run_search_parallel(config: &SearchConfig, stream: &mut NibbleStream) -> SearchOutcome {
    if config.oracle == OracleKind::RandomPermutation {
        return run_search(config, stream);
    }
    let round_keys = expand_key(&config.key);
    let table = ConstantsTable::generate(stream, config.tests_per_candidate);
    let survivors: Vec<Survivor> = (0..CANDIDATE_COUNT)
        .into_par_iter()
        .filter_map(|index| {
            let guess = DiagonalGuess::from_index(index);
            candidate_survives(&guess, &table, &round_keys)
                .then(|| survivor(guess, &config.key))
        })
        .collect();
    SearchOutcome::from_survivors(survivors)
}
