//! Test utilities for dynarr development.
//!
//! Provides element types that record their own lifecycle
//! ([`fixtures::Tracked`]) and a few sequence builders shared by the
//! container's tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{clone_count, live_count, reset_counters, Tracked};

/// The literal sequence used throughout the scenario tests.
pub const SCENARIO: [i32; 8] = [2, 4, 6, 8, 8, 6, 4, 2];

/// `0, 1, ..., n - 1` as `i64`.
pub fn ascending(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

/// `n` tracked values `0, 1, ..., n - 1`.
pub fn tracked(n: usize) -> Vec<Tracked> {
    (0..n as i64).map(Tracked::new).collect()
}
