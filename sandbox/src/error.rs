//! Error types.

use thiserror::Error;

/// Errors raised while matching a query against a candidate pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A pool entry is not text.
    #[error("All items must be a string (item {index} is {kind})")]
    InvalidInputKind {
        /// Position of the offending entry in the pool.
        index: usize,
        /// Kind of value found instead of text.
        kind: &'static str,
    },
}
