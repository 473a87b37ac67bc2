//! The search engine: one exploration loop shared by the four
//! strategies, parameterized by the frontier discipline.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, SearchError};
use crate::graph::Graph;
use crate::heuristic;
use crate::path::reconstruct;

pub(crate) mod frontier;

use frontier::{AStarFrontier, Entry, FifoFrontier, Frontier, GreedyFrontier, LifoFrontier};

/// The closed set of traversal strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// FIFO frontier, level by level.
    Breadth,
    /// LIFO frontier, most recent discovery first.
    Depth,
    /// Greedy: smallest heuristic estimate to the goal first.
    Best,
    /// Smallest accumulated cost plus heuristic estimate first.
    AStar,
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "BREADTH" => Ok(Strategy::Breadth),
            "DEPTH" => Ok(Strategy::Depth),
            "BEST" => Ok(Strategy::Best),
            "A*" => Ok(Strategy::AStar),
            _ => Err(SearchError::InvalidStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Strategy::Breadth => "BREADTH",
            Strategy::Depth => "DEPTH",
            Strategy::Best => "BEST",
            Strategy::AStar => "A*",
        };
        write!(f, "{}", name)
    }
}

/// What a finished search found.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The goal was reached: the ordered node sequence from start to
    /// goal and its total edge cost.
    Found { path: Vec<String>, cost: f64 },
    /// The frontier was exhausted without reaching the goal. A valid
    /// outcome, not an error: start and goal may simply lie in
    /// different components.
    NoPath,
}

/// Everything one search call produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub outcome: Outcome,
    /// Every expanded node, in expansion order.
    pub trace: Vec<String>,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Outcome::Found { .. })
    }

    /// The discovered path, empty when no path exists.
    pub fn path(&self) -> &[String] {
        match &self.outcome {
            Outcome::Found { path, .. } => path,
            Outcome::NoPath => &[],
        }
    }

    /// Total path cost, present only when the goal was reached.
    pub fn cost(&self) -> Option<f64> {
        match &self.outcome {
            Outcome::Found { cost, .. } => Some(*cost),
            Outcome::NoPath => None,
        }
    }
}

/// Search the graph from `start` to `goal` with the given strategy.
///
/// Fails with [SearchError::UnknownNode] when either endpoint was never
/// registered. `start == goal` short-circuits to a single-node path of
/// cost zero without expanding anything.
pub fn search(graph: &Graph, start: &str, goal: &str, strategy: Strategy) -> Result<SearchResult> {
    for node in &[start, goal] {
        if !graph.contains(node) {
            return Err(SearchError::UnknownNode(node.to_string()));
        }
    }

    if start == goal {
        return Ok(SearchResult {
            outcome: Outcome::Found {
                path: vec![start.to_string()],
                cost: 0.0,
            },
            trace: Vec::new(),
        });
    }

    match strategy {
        Strategy::Breadth => run::<FifoFrontier>(graph, start, goal),
        Strategy::Depth => run::<LifoFrontier>(graph, start, goal),
        Strategy::Best => run::<GreedyFrontier>(graph, start, goal),
        Strategy::AStar => run::<AStarFrontier>(graph, start, goal),
    }
}

/// The exploration loop.
///
/// Every node is Unvisited, then on the frontier once discovered, then
/// visited once expanded; visited nodes are never re-expanded. `best`
/// doubles as the discovered set: for non-revising frontiers the first
/// discovery wins outright, while A* admits a strictly cheaper
/// rediscovery (the stale frontier entry is skipped at pop, since the
/// cheaper duplicate always outranks it).
fn run<F: Frontier>(graph: &Graph, start: &str, goal: &str) -> Result<SearchResult> {
    let mut frontier = F::default();
    let mut parent: HashMap<String, String> = HashMap::new();
    let mut best: HashMap<String, f64> = HashMap::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut trace: Vec<String> = Vec::new();

    best.insert(start.to_string(), 0.0);
    frontier.push(Entry {
        node: start.to_string(),
        cost: 0.0,
        estimate: if F::INFORMED {
            heuristic::estimate(graph, start, goal)?
        } else {
            0.0
        },
    });

    while let Some(entry) = frontier.pop() {
        if !visited.insert(entry.node.clone()) {
            continue;
        }
        trace.push(entry.node.clone());

        if entry.node == goal {
            let (path, cost) = reconstruct(graph, &parent, start, goal)?;
            return Ok(SearchResult {
                outcome: Outcome::Found { path, cost },
                trace,
            });
        }

        // Label-sorted expansion keeps traversal order deterministic.
        let mut children: Vec<&(String, f64)> = graph
            .neighbors(&entry.node)
            .iter()
            .filter(|(child, _)| !visited.contains(child))
            .collect();
        children.sort_by(|a, b| a.0.cmp(&b.0));

        for (child, weight) in children {
            let cost = entry.cost + weight;
            let improved = match best.get(child) {
                None => true,
                Some(&seen) => F::REVISES && cost < seen,
            };
            if !improved {
                continue;
            }

            best.insert(child.clone(), cost);
            parent.insert(child.clone(), entry.node.clone());
            frontier.push(Entry {
                node: child.clone(),
                cost,
                estimate: if F::INFORMED {
                    heuristic::estimate(graph, child, goal)?
                } else {
                    0.0
                },
            });
        }
    }

    Ok(SearchResult {
        outcome: Outcome::NoPath,
        trace,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::Point;

    const STRATEGIES: [Strategy; 4] = [
        Strategy::Breadth,
        Strategy::Depth,
        Strategy::Best,
        Strategy::AStar,
    ];

    /// A, B, C, D colinear with spacing matching the edge costs.
    fn line_graph() -> Graph {
        let mut graph = Graph::new();
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(3.0, 0.0);
        let d = Point::new(6.0, 0.0);
        graph.add_edge("A", "B", 1.0, a, b);
        graph.add_edge("B", "C", 2.0, b, c);
        graph.add_edge("C", "D", 3.0, c, d);
        graph
    }

    /// Two triangles sharing no edge.
    fn disconnected_graph() -> Graph {
        let mut graph = Graph::new();
        let p = |x, y| Point::new(x, y);
        graph.add_edge("A", "B", 1.0, p(0.0, 0.0), p(1.0, 0.0));
        graph.add_edge("B", "C", 1.0, p(1.0, 0.0), p(0.5, 1.0));
        graph.add_edge("C", "A", 1.0, p(0.5, 1.0), p(0.0, 0.0));
        graph.add_edge("X", "Y", 1.0, p(10.0, 0.0), p(11.0, 0.0));
        graph.add_edge("Y", "Z", 1.0, p(11.0, 0.0), p(10.5, 1.0));
        graph.add_edge("Z", "X", 1.0, p(10.5, 1.0), p(10.0, 0.0));
        graph
    }

    fn assert_valid_path(graph: &Graph, path: &[String], start: &str, goal: &str) {
        assert_eq!(path.first().map(String::as_str), Some(start));
        assert_eq!(path.last().map(String::as_str), Some(goal));
        for pair in path.windows(2) {
            assert!(
                graph.neighbors(&pair[0]).iter().any(|(n, _)| *n == pair[1]),
                "{} and {} are not adjacent",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn start_equals_goal() {
        let graph = line_graph();
        for &strategy in &STRATEGIES {
            let result = search(&graph, "B", "B", strategy).unwrap();
            assert_eq!(
                result.outcome,
                Outcome::Found {
                    path: vec!["B".to_string()],
                    cost: 0.0,
                }
            );
            assert!(result.trace.is_empty());
        }
    }

    #[test]
    fn breadth_walks_the_line() {
        let graph = line_graph();
        let result = search(&graph, "A", "D", Strategy::Breadth).unwrap();
        assert_eq!(result.path(), &["A", "B", "C", "D"]);
        assert_eq!(result.cost(), Some(6.0));
    }

    #[test]
    fn astar_walks_the_line() {
        let graph = line_graph();
        let result = search(&graph, "A", "D", Strategy::AStar).unwrap();
        assert_eq!(result.path(), &["A", "B", "C", "D"]);
        assert_eq!(result.cost(), Some(6.0));
    }

    #[test]
    fn astar_prefers_cheap_detour_over_expensive_shortcut() {
        let mut graph = Graph::new();
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 0.0);
        let d = Point::new(4.0, 0.0);
        // Straight-line estimates never exceed true remaining cost.
        graph.add_edge("A", "D", 9.0, a, d);
        graph.add_edge("A", "B", 2.0, a, b);
        graph.add_edge("B", "D", 2.0, b, d);

        let result = search(&graph, "A", "D", Strategy::AStar).unwrap();
        assert_eq!(result.path(), &["A", "B", "D"]);
        assert_eq!(result.cost(), Some(4.0));
    }

    #[test]
    fn astar_revises_a_frontier_entry_for_a_cheaper_route() {
        let mut graph = Graph::new();
        let p = |x, y| Point::new(x, y);
        // D is discovered first through the expensive A edge, then
        // rediscovered cheaper through B before it is expanded.
        graph.add_edge("A", "D", 10.0, p(0.0, 0.0), p(3.0, 0.0));
        graph.add_edge("A", "B", 1.0, p(0.0, 0.0), p(1.0, 0.0));
        graph.add_edge("B", "D", 2.0, p(1.0, 0.0), p(3.0, 0.0));
        graph.add_edge("D", "E", 1.0, p(3.0, 0.0), p(4.0, 0.0));

        let result = search(&graph, "A", "E", Strategy::AStar).unwrap();
        assert_eq!(result.path(), &["A", "B", "D", "E"]);
        assert_eq!(result.cost(), Some(4.0));
    }

    #[test]
    fn breadth_minimizes_edge_count_on_unit_costs() {
        let mut graph = Graph::new();
        let p = |x, y| Point::new(x, y);
        // Three hops along the top, two hops along the bottom.
        graph.add_edge("A", "B", 1.0, p(0.0, 1.0), p(1.0, 1.0));
        graph.add_edge("B", "C", 1.0, p(1.0, 1.0), p(2.0, 1.0));
        graph.add_edge("C", "D", 1.0, p(2.0, 1.0), p(3.0, 1.0));
        graph.add_edge("A", "E", 1.0, p(0.0, 1.0), p(1.5, 0.0));
        graph.add_edge("E", "D", 1.0, p(1.5, 0.0), p(3.0, 1.0));

        let result = search(&graph, "A", "D", Strategy::Breadth).unwrap();
        assert_eq!(result.path().len(), 3);
        assert_eq!(result.cost(), Some(2.0));
    }

    #[test]
    fn depth_returns_a_valid_path() {
        let graph = line_graph();
        let result = search(&graph, "A", "D", Strategy::Depth).unwrap();
        assert!(result.is_found());
        assert_valid_path(&graph, result.path(), "A", "D");
    }

    #[test]
    fn best_first_returns_a_valid_path() {
        let graph = disconnected_graph();
        let result = search(&graph, "A", "C", Strategy::Best).unwrap();
        assert!(result.is_found());
        assert_valid_path(&graph, result.path(), "A", "C");
    }

    #[test]
    fn disconnected_components_have_no_path() {
        let graph = disconnected_graph();
        for &strategy in &STRATEGIES {
            let result = search(&graph, "A", "Z", strategy).unwrap();
            assert_eq!(result.outcome, Outcome::NoPath);
            assert!(result.path().is_empty());
            assert_eq!(result.cost(), None);
            // The goal's component is never touched.
            for node in &result.trace {
                assert!(["A", "B", "C"].contains(&node.as_str()), "leaked {}", node);
            }
        }
    }

    #[test]
    fn unknown_endpoint_is_an_error() {
        let graph = line_graph();
        assert_eq!(
            search(&graph, "A", "Z", Strategy::Depth),
            Err(SearchError::UnknownNode("Z".to_string()))
        );
        assert_eq!(
            search(&graph, "Q", "D", Strategy::Breadth),
            Err(SearchError::UnknownNode("Q".to_string()))
        );
    }

    #[test]
    fn trace_starts_at_start_and_ends_at_goal() {
        let graph = line_graph();
        for &strategy in &STRATEGIES {
            let result = search(&graph, "A", "D", strategy).unwrap();
            assert_eq!(result.trace.first().map(String::as_str), Some("A"));
            assert_eq!(result.trace.last().map(String::as_str), Some("D"));
        }
    }

    #[test]
    fn self_loops_are_harmless() {
        let mut graph = line_graph();
        graph.add_edge("B", "B", 5.0, Point::new(1.0, 0.0), Point::new(1.0, 0.0));

        let result = search(&graph, "A", "D", Strategy::Breadth).unwrap();
        assert_eq!(result.path(), &["A", "B", "C", "D"]);
        assert_eq!(result.cost(), Some(6.0));
    }

    #[test]
    fn strategy_parsing() {
        assert_eq!("breadth".parse::<Strategy>().unwrap(), Strategy::Breadth);
        assert_eq!("DEPTH".parse::<Strategy>().unwrap(), Strategy::Depth);
        assert_eq!("Best".parse::<Strategy>().unwrap(), Strategy::Best);
        assert_eq!("a*".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!(
            "dijkstra".parse::<Strategy>(),
            Err(SearchError::InvalidStrategy("dijkstra".to_string()))
        );
    }
}
