//! Shortest word ladder search over an implicit substitution graph.
//!
//! The adjacency graph is never materialized. Each BFS level scans the
//! filtered dictionary for words one substitution away from the current
//! frontier, records which frontier words discovered them, and stops as
//! soon as the target shows up in a level. BFS level order makes that
//! first appearance a shortest one; walking the recorded predecessors
//! back from the target then yields one witness ladder.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::distance::hamming;
use crate::error::{LadderError, LadderResult};

/// Words discovered at one BFS depth, each mapped to the frontier words
/// one substitution away that reached them.
type Level = HashMap<String, Vec<String>>;

/// Shortest ladder solver over a dictionary of fixed-length words.
///
/// The constructor filters the supplied word list down to a single
/// length, and every query method takes `&self`, so one solver can be
/// shared read-only across concurrent queries of that length.
#[derive(Debug, Clone)]
pub struct LadderSolver {
    dictionary: Vec<String>,
    word_length: usize,
    max_depth: usize,
}

impl LadderSolver {
    /// Build a solver from an arbitrary word list, keeping only the words
    /// whose length equals `word_length`.
    ///
    /// The depth bound defaults to the square of the word length, a
    /// safety valve against unbounded search on disconnected graphs
    /// rather than a claim about graph diameter.
    pub fn new(words: Vec<String>, word_length: usize) -> Self {
        let dictionary: Vec<String> = words
            .into_iter()
            .filter(|word| word.len() == word_length)
            .collect();

        Self {
            dictionary,
            word_length,
            max_depth: word_length * word_length,
        }
    }

    /// Replace the default depth bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The length-filtered dictionary this solver searches.
    pub fn dictionary(&self) -> &[String] {
        &self.dictionary
    }

    /// Dictionary words exactly one substitution away from `word`.
    pub fn neighbors<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a str> {
        self.dictionary
            .iter()
            .map(String::as_str)
            .filter(move |candidate| hamming(candidate, word) == 1)
    }

    fn contains(&self, word: &str) -> bool {
        self.dictionary.iter().any(|w| w == word)
    }

    /// Find a shortest ladder from `root` to `target`.
    ///
    /// Both endpoints must be present in the filtered dictionary. The
    /// returned ladder starts at `root`, ends at `target`, and every
    /// consecutive pair differs by exactly one letter. When a word was
    /// reached from several frontier words at the same depth,
    /// reconstruction takes the lexicographically smallest predecessor,
    /// so the result is deterministic for a given dictionary.
    pub fn find_path(&self, root: &str, target: &str) -> LadderResult<Vec<String>> {
        if root.is_empty() || root.len() != target.len() {
            return Err(LadderError::InvalidInput);
        }
        if !self.contains(root) {
            return Err(LadderError::WordNotFound(root.to_string()));
        }
        if !self.contains(target) {
            return Err(LadderError::WordNotFound(target.to_string()));
        }
        if root == target {
            return Ok(vec![root.to_string()]);
        }

        let levels = self.search(root, target)?;
        reconstruct(&levels, root, target)
    }

    /// Level-synchronized BFS from `root`, recording predecessors per
    /// level, until `target` is discovered or the depth bound runs out.
    fn search(&self, root: &str, target: &str) -> LadderResult<Vec<Level>> {
        let mut levels: Vec<Level> = Vec::new();
        let mut discovered: HashSet<String> = HashSet::new();
        discovered.insert(root.to_string());
        let mut frontier: Vec<String> = vec![root.to_string()];

        for depth in 0..self.max_depth {
            let mut next: Level = HashMap::new();

            for word in &frontier {
                for leaf in self.neighbors(word) {
                    // A word discovered at an earlier depth is closed;
                    // ties within this level keep every predecessor.
                    if discovered.contains(leaf) {
                        continue;
                    }
                    next.entry(leaf.to_string()).or_default().push(word.clone());
                }
            }

            if next.is_empty() {
                // The root's component ran out before the bound did.
                return Err(LadderError::TargetUnreachable { levels: depth });
            }

            let found = next.contains_key(target);
            frontier = next.keys().cloned().collect();
            for word in &frontier {
                discovered.insert(word.clone());
            }
            levels.push(next);

            if found {
                return Ok(levels);
            }
        }

        Err(LadderError::TargetUnreachable {
            levels: self.max_depth,
        })
    }

    /// Shortest ladder length from `root` to every reachable dictionary
    /// word, counted in substitutions (the root itself reports zero).
    ///
    /// Each target is an independent query against the shared solver, so
    /// the dictionary is swept in parallel. Results are sorted by length,
    /// then word.
    pub fn reachable_from(&self, root: &str) -> Vec<(String, usize)> {
        let mut lengths: Vec<(String, usize)> = self
            .dictionary
            .par_iter()
            .filter_map(|target| {
                self.find_path(root, target)
                    .ok()
                    .map(|path| (target.clone(), path.len() - 1))
            })
            .collect();

        lengths.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        lengths
    }
}

/// Walk the recorded levels backward from `target`, prepending one
/// predecessor per level until the root is reached.
///
/// Ties are broken toward the lexicographically smallest predecessor. A
/// missing predecessor, or a walk that does not land on the root, means
/// the level structure is malformed and is reported rather than looped
/// on.
fn reconstruct(levels: &[Level], root: &str, target: &str) -> LadderResult<Vec<String>> {
    let mut path = vec![target.to_string()];
    let mut node = target.to_string();

    for level in levels.iter().rev() {
        let predecessors = level
            .get(&node)
            .ok_or_else(|| LadderError::MalformedPredecessors(node.clone()))?;
        let chosen = predecessors
            .iter()
            .min()
            .ok_or_else(|| LadderError::MalformedPredecessors(node.clone()))?;
        node = chosen.clone();
        path.push(node.clone());
    }

    if node != root {
        return Err(LadderError::MalformedPredecessors(node));
    }

    path.reverse();
    Ok(path)
}
