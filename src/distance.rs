//! Hamming distance between fixed-length words.
//!
//! This is the adjacency test for the whole crate: two dictionary words
//! are neighbors in the ladder graph iff their distance is exactly 1.

/// Count the positions at which two equal-length words differ.
///
/// Equal length is a precondition guaranteed by the caller: the solver
/// filters its dictionary down to a single word length before any
/// distance is computed, and query endpoints are validated against that
/// length up front.
pub fn hamming(a: &str, b: &str) -> usize {
    debug_assert_eq!(a.len(), b.len());

    a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count()
}
