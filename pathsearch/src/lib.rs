//! Search over small weighted graphs with embedded 2-D coordinates.
//!
//! Build a [Graph] from edge records, then run [search] with one of the
//! four [Strategy] variants. The result carries the discovered path,
//! its total cost, and a trace of every node expansion for step-by-step
//! reporting.

mod algorithm;
mod errors;
pub mod graph;
pub mod heuristic;
mod path;

pub use algorithm::search;
pub use algorithm::Outcome;
pub use algorithm::SearchResult;
pub use algorithm::Strategy;
pub use errors::Result;
pub use errors::SearchError;
pub use graph::Graph;
pub use graph::Point;
