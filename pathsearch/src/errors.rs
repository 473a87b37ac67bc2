use thiserror::Error;

/// Error produced when a search cannot run or breaks an invariant.
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("Unknown node {0:?}")]
    UnknownNode(String),

    #[error("Invalid search strategy {0:?} (expected BREADTH, DEPTH, BEST or A*)")]
    InvalidStrategy(String),

    /// Internal bookkeeping defect: the predecessor relation recorded
    /// during a search does not lead from the goal back to the start.
    #[error("Predecessor chain from {goal:?} does not terminate at {start:?}")]
    CorruptPredecessorChain { start: String, goal: String },
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
