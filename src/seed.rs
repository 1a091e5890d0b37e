//! Deterministic pseudo-random derivation.
//!
//! Manifest compilation must be reproducible: the same inputs have to
//! produce the same catalog on every run and on every host. Random-looking
//! values are therefore never drawn from entropy. They are derived from a
//! caller-supplied seed string, hashed down to a fixed-width number and fed
//! through a keyed stream cipher generator.

use md5::{Digest, Md5};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Hashes a seed string down to a 128-bit numeric seed.
///
/// The digest is interpreted big-endian, so the numeric value matches the
/// conventional hex rendering of the hash.
///
/// ```
/// use manifest_funcs::seed_from_str;
///
/// assert_eq!(seed_from_str(""), 0xd41d_8cd9_8f00_b204_e980_0998_ecf8_427e);
/// assert_eq!(seed_from_str("host"), seed_from_str("host"));
/// ```
pub fn seed_from_str(seed: &str) -> u128 {
    let digest: [u8; 16] = Md5::digest(seed.as_bytes()).into();
    u128::from_be_bytes(digest)
}

/// Draws a uniform integer in `0..max` from a 128-bit seed.
///
/// The generator is re-keyed from scratch on every call, so equal inputs
/// always yield equal outputs. Draws above the largest multiple of `max`
/// are rejected and redrawn to keep the result unbiased.
///
/// # Panics
///
/// Panics if `max` is zero. Callers validate the bound before reaching
/// this point.
pub fn deterministic_rand_int(seed: u128, max: u64) -> u64 {
    assert!(max > 0, "max must be positive");

    let half = seed.to_be_bytes();
    let mut key = [0u8; 32];
    key[..16].copy_from_slice(&half);
    key[16..].copy_from_slice(&half);
    let mut rng = ChaCha8Rng::from_seed(key);

    // Largest acceptable draw is the top of the last full run of `max`
    // consecutive values below 2^64.
    let remainder = (u64::MAX % max + 1) % max;
    let cutoff = u64::MAX - remainder;
    loop {
        let draw = rng.next_u64();
        if draw <= cutoff {
            return draw % max;
        }
    }
}
