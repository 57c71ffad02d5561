//! # Word Ladder
//!
//! A shortest word ladder solver using breadth-first search over an
//! implicit substitution graph.
//!
//! A word ladder connects a root word to a target word through a chain
//! of dictionary words, each differing from the previous one by a single
//! letter. The solver explores the graph level by level, so the first
//! ladder it finds is guaranteed to be a shortest one.

pub mod distance;
pub mod error;
pub mod solver;

pub use distance::hamming;
pub use error::{LadderError, LadderResult};
pub use solver::LadderSolver;

/// Find a shortest ladder from `root` to `target` using only `words`.
///
/// One-shot form of [`LadderSolver::find_path`]: filters `words` down to
/// the query length, validates both endpoints, and runs the search. Use
/// a [`LadderSolver`] directly to reuse one filtered dictionary across
/// several queries of the same length.
pub fn find_path(words: Vec<String>, root: &str, target: &str) -> LadderResult<Vec<String>> {
    if root.is_empty() || root.len() != target.len() {
        return Err(LadderError::InvalidInput);
    }

    LadderSolver::new(words, root.len()).find_path(root, target)
}
