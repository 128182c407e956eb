use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use super::node::{Node, NodeId};
use crate::state::Fingerprint;

#[derive(Clone, Debug)]
struct Entry {
    f: u32,
    g: u32,
    seq: u64,
    id: NodeId,
    fingerprint: Fingerprint,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so the max-heap yields the lowest f, then the lowest g, then the
// earliest insertion.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.f, other.g, other.seq).cmp(&(self.f, self.g, self.seq))
    }
}

/// Discovered but unexpanded nodes, ordered by `f`, with an index from
/// fingerprint to the node currently holding that configuration.
///
/// Replacing a node only repoints the index; the superseded heap entry stays
/// behind and is skipped when it surfaces.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    index: FxHashMap<Fingerprint, NodeId>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fingerprint: Fingerprint, id: NodeId, node: &Node) {
        self.index.insert(fingerprint, id);
        self.heap.push(Entry {
            f: node.f(),
            g: node.g(),
            seq: self.next_seq,
            id,
            fingerprint,
        });
        self.next_seq += 1;
    }

    /// The node currently standing for `fingerprint`, if it is in the frontier.
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<NodeId> {
        self.index.get(fingerprint).copied()
    }

    /// Removes and returns the node with the least `f`.
    pub fn pop(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.heap.pop() {
            if self.index.get(&entry.fingerprint) == Some(&entry.id) {
                self.index.remove(&entry.fingerprint);
                return Some(entry.id);
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
