//! Command-line interface for the small-scale AES subspace distinguisher.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use saes_core::{encrypt_block, expand_key, State};
use saes_subspace::{
    any_collision, build_coset, encrypt_coset, fresh_fixed_nibbles, run_search,
    run_search_parallel, DiagonalGuess, NibbleStream, OracleKind, SearchConfig, SearchOutcome,
    Survivor, Verdict, DEFAULT_SEED, DEFAULT_TESTS,
};

/// Default key for `search` and `demo`; its main diagonal is 0x0, 0x5,
/// 0xa, 0xf.
const SAMPLE_KEY_HEX: &str = "048c159d26ae37bf";

/// Collision tests per guess in the demo, enough for a wrong guess to
/// collide many times over.
const DEMO_TESTS: usize = 2500;

/// Small-scale AES distinguisher CLI.
#[derive(Parser)]
#[command(
    name = "saes",
    version,
    author,
    about = "Subspace-trail distinguisher for 5-round small-scale AES"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep all 65536 diagonal guesses and report the survivors.
    Search {
        /// Secret key as 16 hex characters (16 nibbles, row-major).
        #[arg(long, value_name = "HEX", default_value = SAMPLE_KEY_HEX)]
        key_hex: String,
        /// Collision tests per candidate.
        #[arg(long, default_value_t = DEFAULT_TESTS)]
        tests: usize,
        /// Stream seed for reproducible runs (defaults to a fixed constant).
        #[arg(long)]
        seed: Option<u32>,
        /// Oracle producing the states each collision test scans.
        #[arg(long, value_enum, default_value_t = OracleArg::Cipher)]
        oracle: OracleArg,
        /// Split the sweep across threads.
        #[arg(long, default_value_t = false)]
        parallel: bool,
    },
    /// Encrypt a single block.
    Encrypt {
        /// Key as 16 hex characters (16 nibbles, row-major).
        #[arg(long, value_name = "HEX", default_value = SAMPLE_KEY_HEX)]
        key_hex: String,
        /// Plaintext as 16 hex characters (16 nibbles, row-major).
        #[arg(long, value_name = "HEX")]
        plaintext_hex: String,
    },
    /// Contrast the right diagonal guess with a wrong one on fresh cosets.
    Demo {
        /// Stream seed for reproducible runs (defaults to a fixed constant).
        #[arg(long)]
        seed: Option<u32>,
    },
}

/// Oracle choice exposed on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OracleArg {
    /// Encrypt structured cosets under the secret key.
    Cipher,
    /// Replace ciphertexts with pairwise-distinct random states.
    Random,
}

impl From<OracleArg> for OracleKind {
    fn from(arg: OracleArg) -> Self {
        match arg {
            OracleArg::Cipher => OracleKind::Cipher,
            OracleArg::Random => OracleKind::RandomPermutation,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            key_hex,
            tests,
            seed,
            oracle,
            parallel,
        } => cmd_search(&key_hex, tests, seed, oracle, parallel),
        Commands::Encrypt {
            key_hex,
            plaintext_hex,
        } => cmd_encrypt(&key_hex, &plaintext_hex),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_search(
    key_hex: &str,
    tests: usize,
    seed: Option<u32>,
    oracle: OracleArg,
    parallel: bool,
) -> Result<()> {
    if tests == 0 {
        bail!("--tests must be at least 1");
    }
    let key = parse_state_hex(key_hex).context("parse --key-hex")?;
    let mut config = SearchConfig::new(key);
    config.tests_per_candidate = tests;
    config.oracle = oracle.into();
    let mut stream = seeded_stream(seed);

    println!("key: {}", state_hex(&key));
    println!(
        "oracle: {}",
        match config.oracle {
            OracleKind::Cipher => "cipher",
            OracleKind::RandomPermutation => "random permutation",
        }
    );
    println!("tests per candidate: {}", config.tests_per_candidate);
    match seed {
        Some(value) => println!("seed: {value}"),
        None => println!("seed: {DEFAULT_SEED} (default)"),
    }

    let outcome = if parallel {
        run_search_parallel(&config, &mut stream)
    } else {
        run_search(&config, &mut stream)
    };
    report_outcome(&outcome);
    Ok(())
}

fn cmd_encrypt(key_hex: &str, plaintext_hex: &str) -> Result<()> {
    let key = parse_state_hex(key_hex).context("parse --key-hex")?;
    let plaintext = parse_state_hex(plaintext_hex).context("parse --plaintext-hex")?;
    let round_keys = expand_key(&key);
    let ciphertext = encrypt_block(&plaintext, &round_keys);
    println!("{}", state_hex(&ciphertext));
    Ok(())
}

fn cmd_demo(seed: Option<u32>) -> Result<()> {
    let key = parse_state_hex(SAMPLE_KEY_HEX).context("parse demo key")?;
    let round_keys = expand_key(&key);
    let mut stream = seeded_stream(seed);

    let right = DiagonalGuess::from_key_diagonal(&key);
    let right_nibbles = right.nibbles();
    let wrong = DiagonalGuess::new([
        right_nibbles[0] ^ 0x1,
        right_nibbles[1],
        right_nibbles[2],
        right_nibbles[3],
    ]);

    println!("key: {}", state_hex(&key));
    println!("tests per guess: {DEMO_TESTS}");
    for (label, guess) in [("right", right), ("wrong", wrong)] {
        let mut collisions = 0usize;
        let mut first = None;
        for test in 0..DEMO_TESTS {
            let fixed = fresh_fixed_nibbles(&mut stream);
            let coset = build_coset(&guess, &fixed);
            if any_collision(&encrypt_coset(&coset, &round_keys)) {
                collisions += 1;
                if first.is_none() {
                    first = Some(test);
                }
            }
        }
        match first {
            Some(test) => println!(
                "{label} guess {}: {collisions} collisions in {DEMO_TESTS} tests, first at test {test}",
                guess_hex(&guess)
            ),
            None => println!(
                "{label} guess {}: no collisions in {DEMO_TESTS} tests",
                guess_hex(&guess)
            ),
        }
    }
    Ok(())
}

fn report_outcome(outcome: &SearchOutcome) {
    for survivor in &outcome.survivors {
        println!("{}", survivor_line(survivor));
    }
    match outcome.verdict {
        Verdict::CipherLike => {
            let count = outcome.survivors.len();
            let noun = if count == 1 { "candidate" } else { "candidates" };
            println!("classification: cipher-like ({count} surviving {noun})");
        }
        Verdict::RandomLike => println!("classification: random-like (no surviving candidates)"),
    }
}

fn survivor_line(survivor: &Survivor) -> String {
    let tag = if survivor.is_right_key {
        "right key"
    } else {
        "wrong key"
    };
    format!("{} - {}", guess_hex(&survivor.guess), tag)
}

fn guess_hex(guess: &DiagonalGuess) -> String {
    let [g0, g1, g2, g3] = guess.nibbles();
    format!("{g0:#x} - {g1:#x} - {g2:#x} - {g3:#x}")
}

fn seeded_stream(seed: Option<u32>) -> NibbleStream {
    match seed {
        Some(value) => NibbleStream::from_scalar(value),
        None => NibbleStream::unseeded(),
    }
}

/// Parses 16 hex characters into a state, one nibble per character in
/// row-major reading order.
fn parse_state_hex(hex_str: &str) -> Result<State> {
    let trimmed = hex_str.trim();
    let bytes = hex::decode(trimmed).context("decode hex")?;
    if bytes.len() != 8 {
        bail!(
            "expected 16 hex characters (16 nibbles), got {}",
            trimmed.len()
        );
    }
    let mut nibbles = [0u8; 16];
    for (i, byte) in bytes.iter().enumerate() {
        nibbles[2 * i] = byte >> 4;
        nibbles[2 * i + 1] = byte & 0xF;
    }
    Ok(State::from_nibbles(nibbles))
}

fn state_hex(state: &State) -> String {
    let nibbles = state.as_nibbles();
    let mut bytes = [0u8; 8];
    for (i, pair) in nibbles.chunks(2).enumerate() {
        bytes[i] = pair[0] << 4 | pair[1];
    }
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_key_parses_to_the_documented_diagonal() {
        let key = parse_state_hex(SAMPLE_KEY_HEX).unwrap();
        let diagonal = DiagonalGuess::from_key_diagonal(&key);
        assert_eq!(diagonal.nibbles(), [0x0, 0x5, 0xa, 0xf]);
    }

    #[test]
    fn state_hex_round_trips_parse_state_hex() {
        let state = parse_state_hex("fedcba9876543210").unwrap();
        assert_eq!(state_hex(&state), "fedcba9876543210");
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(parse_state_hex("048c").is_err());
        assert!(parse_state_hex("zz8c159d26ae37bf").is_err());
        assert!(parse_state_hex("048c159d26ae37bf00").is_err());
    }
}
