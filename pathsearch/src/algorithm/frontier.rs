//! Frontier disciplines for the search engine.
//!
//! The four strategies differ only in how the frontier orders its
//! entries, so each is a small queue type behind the [Frontier] trait
//! and the exploration loop stays shared.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// A discovered-but-not-yet-expanded node, with the accumulated path
/// cost that discovered it and, for informed frontiers, the heuristic
/// estimate to the goal.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) node: String,
    pub(crate) cost: f64,
    pub(crate) estimate: f64,
}

/// Trait used to implement queues of frontier entries awaiting
/// expansion.
pub(crate) trait Frontier: Default {
    /// Informed frontiers rank entries using the heuristic estimate;
    /// uninformed frontiers never cause it to be computed.
    const INFORMED: bool;

    /// Whether a strictly cheaper rediscovery of a frontier node
    /// replaces the earlier entry. Only A* revises; everywhere else the
    /// first discovery wins.
    const REVISES: bool;

    fn push(&mut self, entry: Entry);

    fn pop(&mut self) -> Option<Entry>;
}

/// FIFO discipline: nodes expand in discovery order (Breadth-First).
#[derive(Debug, Default)]
pub(crate) struct FifoFrontier {
    queue: VecDeque<Entry>,
}

impl Frontier for FifoFrontier {
    const INFORMED: bool = false;
    const REVISES: bool = false;

    fn push(&mut self, entry: Entry) {
        self.queue.push_back(entry);
    }

    fn pop(&mut self) -> Option<Entry> {
        self.queue.pop_front()
    }
}

/// LIFO discipline: the most recently discovered node expands first
/// (Depth-First).
#[derive(Debug, Default)]
pub(crate) struct LifoFrontier {
    queue: VecDeque<Entry>,
}

impl Frontier for LifoFrontier {
    const INFORMED: bool = false;
    const REVISES: bool = false;

    fn push(&mut self, entry: Entry) {
        self.queue.push_front(entry);
    }

    fn pop(&mut self) -> Option<Entry> {
        self.queue.pop_front()
    }
}

/// Wrapper giving frontier entries a min-heap ordering on a ranking
/// key, with insertion order breaking ties so equal keys stay stable.
#[derive(Debug)]
struct Ranked {
    key: f64,
    seq: u64,
    entry: Entry,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl Eq for Ranked {}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we pop the smallest
        // key, earliest insertion first.
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Greedy discipline: the entry with the smallest heuristic estimate to
/// the goal expands next (Best-First). Accumulated cost is carried for
/// reporting but never ranks anything.
#[derive(Debug, Default)]
pub(crate) struct GreedyFrontier {
    heap: BinaryHeap<Ranked>,
    seq: u64,
}

impl Frontier for GreedyFrontier {
    const INFORMED: bool = true;
    const REVISES: bool = false;

    fn push(&mut self, entry: Entry) {
        self.seq += 1;
        self.heap.push(Ranked {
            key: entry.estimate,
            seq: self.seq,
            entry,
        });
    }

    fn pop(&mut self) -> Option<Entry> {
        self.heap.pop().map(|r| r.entry)
    }
}

/// A* discipline: the entry with the smallest f-value (accumulated cost
/// plus heuristic estimate) expands next.
#[derive(Debug, Default)]
pub(crate) struct AStarFrontier {
    heap: BinaryHeap<Ranked>,
    seq: u64,
}

impl Frontier for AStarFrontier {
    const INFORMED: bool = true;
    const REVISES: bool = true;

    fn push(&mut self, entry: Entry) {
        self.seq += 1;
        self.heap.push(Ranked {
            key: entry.cost + entry.estimate,
            seq: self.seq,
            entry,
        });
    }

    fn pop(&mut self) -> Option<Entry> {
        self.heap.pop().map(|r| r.entry)
    }
}
