//! Graph datastructures: an undirected weighted graph whose nodes carry
//! positions in two dimensions.

use std::collections::HashMap;

use crate::errors::{Result, SearchError};

/// A location in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Build a new point from coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// An undirected weighted graph with a coordinate for every node.
///
/// Built once from parsed edge records and read-only thereafter: the
/// search engine borrows it immutably for the duration of a search.
#[derive(Debug, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<(String, f64)>>,
    positions: HashMap<String, Point>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Graph::default()
    }

    /// Register an edge in both directions and record the coordinate of
    /// each endpoint. When a node reappears with a different coordinate,
    /// the last registration wins.
    pub fn add_edge(&mut self, a: &str, b: &str, cost: f64, at_a: Point, at_b: Point) {
        self.adjacency
            .entry(a.to_string())
            .or_insert_with(Vec::new)
            .push((b.to_string(), cost));
        self.adjacency
            .entry(b.to_string())
            .or_insert_with(Vec::new)
            .push((a.to_string(), cost));

        self.positions.insert(a.to_string(), at_a);
        self.positions.insert(b.to_string(), at_b);
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Adjacency list of a node. Unknown nodes have no neighbors rather
    /// than being an error; an isolated node may legitimately appear
    /// only as somebody else's endpoint.
    pub fn neighbors(&self, node: &str) -> &[(String, f64)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The stored coordinate of a node.
    pub fn coordinate(&self, node: &str) -> Result<Point> {
        self.positions
            .get(node)
            .copied()
            .ok_or_else(|| SearchError::UnknownNode(node.to_string()))
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Iterate through the undirected edges, each reported once.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.adjacency.iter().flat_map(|(a, connections)| {
            connections
                .iter()
                .filter(move |(b, _)| a <= b)
                .map(move |(b, w)| (a.as_str(), b.as_str(), *w))
        })
    }
}
