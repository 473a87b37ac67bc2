//! Recovering the ordered path from the predecessor relation a search
//! leaves behind.

use std::collections::HashMap;

use crate::errors::{Result, SearchError};
use crate::graph::Graph;

fn corrupt(start: &str, goal: &str) -> SearchError {
    SearchError::CorruptPredecessorChain {
        start: start.to_string(),
        goal: goal.to_string(),
    }
}

/// Walk the predecessor relation backward from the goal, reverse the
/// collected nodes, and sum the traversed edge costs.
///
/// The walk is bounded by the graph's node count: a chain that breaks
/// or cycles before reaching the start indicates defective engine
/// bookkeeping and fails rather than returning a wrong path.
pub(crate) fn reconstruct(
    graph: &Graph,
    parent: &HashMap<String, String>,
    start: &str,
    goal: &str,
) -> Result<(Vec<String>, f64)> {
    let mut path = vec![goal.to_string()];
    let mut cost = 0.0;
    let mut current = goal;

    while current != start {
        if path.len() > graph.len() {
            return Err(corrupt(start, goal));
        }

        let previous = parent.get(current).ok_or_else(|| corrupt(start, goal))?;
        cost += graph
            .neighbors(previous)
            .iter()
            .find(|(neighbor, _)| neighbor == current)
            .map(|(_, weight)| *weight)
            .ok_or_else(|| corrupt(start, goal))?;

        path.push(previous.clone());
        current = previous;
    }

    path.reverse();
    Ok((path, cost))
}
