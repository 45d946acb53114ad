//! Open-set strategies for [SearchContext](crate::search_context::SearchContext).
//!
//! Both strategies select the entry with the smallest estimated cost and break ties in favour of
//! the entry that was encountered first.
use fxhash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// The open set of a best-first search. Entries refer to search nodes by index.
pub trait Frontier<C> {
    /// Adds a newly discovered node.
    fn push(&mut self, index: usize, estimated_cost: C, cost: C);
    /// Lowers the cost of a node that is already open.
    fn decrease_key(&mut self, index: usize, estimated_cost: C, cost: C);
    /// Removes the entry with the smallest estimated cost, returning its node index and the cost it
    /// was recorded with. Entries may be stale: callers compare the recorded cost with the node.
    fn pop(&mut self) -> Option<(usize, C)>;
    fn clear(&mut self);
    fn is_empty(&self) -> bool;
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    sequence: u64,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap: smallest estimate first, then earliest insertion
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// [BinaryHeap] backed frontier. Decrease-key pushes a fresh entry and leaves the old one in
/// place; the old entry carries a higher cost than the node and is skipped when popped. The fresh
/// entry reuses the sequence number the node was first pushed with, so ties resolve in discovery
/// order exactly as in [ScanFrontier].
pub struct HeapFrontier<C> {
    heap: BinaryHeap<SmallestCostHolder<C>>,
    first_sequence: FxHashMap<usize, u64>,
    sequence: u64,
}

impl<C: Ord> Default for HeapFrontier<C> {
    fn default() -> Self {
        HeapFrontier {
            heap: BinaryHeap::new(),
            first_sequence: FxHashMap::default(),
            sequence: 0,
        }
    }
}

impl<C: Ord + Copy> Frontier<C> for HeapFrontier<C> {
    fn push(&mut self, index: usize, estimated_cost: C, cost: C) {
        let next = self.sequence;
        let sequence = *self.first_sequence.entry(index).or_insert(next);
        if sequence == next {
            self.sequence += 1;
        }
        self.heap.push(SmallestCostHolder {
            estimated_cost,
            cost,
            sequence,
            index,
        });
    }
    fn decrease_key(&mut self, index: usize, estimated_cost: C, cost: C) {
        self.push(index, estimated_cost, cost);
    }
    fn pop(&mut self) -> Option<(usize, C)> {
        self.heap.pop().map(|holder| (holder.index, holder.cost))
    }
    fn clear(&mut self) {
        self.heap.clear();
        self.first_sequence.clear();
        self.sequence = 0;
    }
    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

struct ScanEntry<C> {
    index: usize,
    estimated_cost: C,
    cost: C,
}

/// Unordered list frontier: every pop scans all entries. Costs O(n) per pop but never holds stale
/// entries, and decrease-key updates the entry in place so it keeps its position for tie-breaks.
pub struct ScanFrontier<C> {
    entries: Vec<ScanEntry<C>>,
}

impl<C> Default for ScanFrontier<C> {
    fn default() -> Self {
        ScanFrontier {
            entries: Vec::new(),
        }
    }
}

impl<C: Ord + Copy> Frontier<C> for ScanFrontier<C> {
    fn push(&mut self, index: usize, estimated_cost: C, cost: C) {
        self.entries.push(ScanEntry {
            index,
            estimated_cost,
            cost,
        });
    }
    fn decrease_key(&mut self, index: usize, estimated_cost: C, cost: C) {
        match self.entries.iter_mut().find(|e| e.index == index) {
            Some(entry) => {
                entry.estimated_cost = estimated_cost;
                entry.cost = cost;
            }
            None => self.push(index, estimated_cost, cost),
        }
    }
    fn pop(&mut self) -> Option<(usize, C)> {
        let mut best: Option<usize> = None;
        for (i, entry) in self.entries.iter().enumerate() {
            // Strict comparison keeps the first-encountered entry on ties
            if best.map_or(true, |b| entry.estimated_cost < self.entries[b].estimated_cost) {
                best = Some(i);
            }
        }
        best.map(|i| {
            let entry = self.entries.remove(i);
            (entry.index, entry.cost)
        })
    }
    fn clear(&mut self) {
        self.entries.clear();
    }
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
