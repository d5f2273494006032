use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

use smallvec::SmallVec;

use super::heuristic::Heuristic;
use crate::dims::Cell;

/// Discovered cell waiting for expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub cell: Cell,
    pub parent: Option<Cell>,
    /// Number of steps from the start along the route that discovered this entry.
    pub g: usize,
}

/// Order in which discovered cells get expanded.
pub trait Frontier {
    fn push(&mut self, entry: Entry);

    fn pop(&mut self) -> Option<Entry>;

    /// Pushes the neighbors of one expanded cell, given in visitation order.
    fn extend(&mut self, entries: SmallVec<[Entry; 4]>) {
        for entry in entries {
            self.push(entry);
        }
    }

    /// When `true`, a cell is only queued again if a strictly shorter route to it was found.
    fn relaxes(&self) -> bool {
        true
    }
}

/// Queue: breadth-first order.
#[derive(Debug, Default)]
pub struct Fifo(VecDeque<Entry>);

impl Frontier for Fifo {
    fn push(&mut self, entry: Entry) {
        self.0.push_back(entry);
    }

    fn pop(&mut self) -> Option<Entry> {
        self.0.pop_front()
    }
}

/// Stack: depth-first order.
#[derive(Debug, Default)]
pub struct Lifo(Vec<Entry>);

impl Frontier for Lifo {
    fn push(&mut self, entry: Entry) {
        self.0.push(entry);
    }

    fn pop(&mut self) -> Option<Entry> {
        self.0.pop()
    }

    // Reversed, so the first neighbor in visitation order ends up on top.
    fn extend(&mut self, entries: SmallVec<[Entry; 4]>) {
        self.0.extend(entries.into_iter().rev());
    }

    fn relaxes(&self) -> bool {
        false
    }
}

#[derive(Debug)]
struct Node {
    f: usize,
    seq: u64,
    entry: Entry,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; equal `f` pops in insertion order
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue keyed by `f = g + h`, as used by A*.
///
/// Entries with equal `f` come out in the order they were pushed.
#[derive(Debug)]
pub struct Priority<H> {
    heap: BinaryHeap<Node>,
    goal: Cell,
    heuristic: H,
    seq: u64,
}

impl<H: Heuristic> Priority<H> {
    pub fn new(goal: Cell, heuristic: H) -> Self {
        Self {
            heap: BinaryHeap::new(),
            goal,
            heuristic,
            seq: 0,
        }
    }
}

impl<H: Heuristic> Frontier for Priority<H> {
    fn push(&mut self, entry: Entry) {
        let f = entry.g + self.heuristic.estimate(entry.cell, self.goal);
        self.heap.push(Node {
            f,
            seq: self.seq,
            entry,
        });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<Entry> {
        self.heap.pop().map(|node| node.entry)
    }
}
