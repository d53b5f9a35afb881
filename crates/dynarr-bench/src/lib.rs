//! Deterministic workloads for benchmarking the dynarr container.
//!
//! - [`insert_offsets`]: seeded positions for a run of positional inserts
//! - [`erase_offsets`]: seeded positions that drain an array of known size

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Offsets for `count` successive inserts into an array that starts with
/// `initial_len` elements.
///
/// The `i`-th offset is valid for an array of `initial_len + i` elements,
/// so replaying them in order never inserts past `end()`.
pub fn insert_offsets(seed: u64, initial_len: usize, count: usize) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| bounded(&mut rng, initial_len + i + 1))
        .collect()
}

/// Offsets that erase every element of an array of `len` elements.
///
/// The `i`-th offset is valid for an array of `len - i` elements.
pub fn erase_offsets(seed: u64, len: usize) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|i| bounded(&mut rng, len - i)).collect()
}

/// Uniform-enough value in `[0, bound)`; `bound` must be non-zero.
fn bounded(rng: &mut ChaCha8Rng, bound: usize) -> usize {
    (rng.next_u64() % bound as u64) as usize
}
