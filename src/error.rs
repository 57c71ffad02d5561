//! Error types for ladder queries.

use thiserror::Error;

/// Result type alias for ladder queries.
pub type LadderResult<T> = Result<T, LadderError>;

/// Failure kinds a ladder query can report.
///
/// Each variant reflects a structural property of the inputs (word
/// lengths, dictionary membership, graph connectivity), so none of them
/// is worth retrying without changed inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    /// Root and target have different lengths, or one of them is empty.
    #[error("root and target must be non-empty words of equal length")]
    InvalidInput,

    /// A query endpoint is absent from the length-filtered dictionary.
    #[error("word not found in dictionary: {0}")]
    WordNotFound(String),

    /// The search exhausted its depth bound, or the root's component,
    /// without discovering the target.
    #[error("target not reached after exploring {levels} levels")]
    TargetUnreachable { levels: usize },

    /// A non-root word had no recorded predecessor during path
    /// reconstruction. Unreachable if the search upheld its invariants.
    #[error("no predecessor recorded for {0}")]
    MalformedPredecessors(String),
}
