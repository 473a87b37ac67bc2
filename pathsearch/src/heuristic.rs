//! Straight-line distance estimates between nodes.
//!
//! Used by the informed strategies (Best-First and A*) only. Whether the
//! estimate is admissible depends on the edge costs sharing the metric
//! of the coordinates; that is a property of the input data, not
//! something enforced here.

use crate::errors::Result;
use crate::graph::Graph;

/// Euclidean distance between the stored coordinates of two nodes.
pub fn estimate(graph: &Graph, from: &str, to: &str) -> Result<f64> {
    let a = graph.coordinate(from)?;
    let b = graph.coordinate(to)?;
    Ok(a.distance(b))
}
