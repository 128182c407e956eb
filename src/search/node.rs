use std::hash::{Hash, Hasher};

use crate::state::PuzzleState;

pub type NodeId = usize;

/// A configuration reached during search, with the node it was expanded from.
///
/// Two nodes are the same node when they wrap the same tiles, whatever their
/// costs or parents.
#[derive(Debug, Clone)]
pub struct Node {
    state: PuzzleState,
    parent: Option<NodeId>,
    g: u32,
    h: u32,
}

impl Node {
    pub fn new(state: PuzzleState, parent: Option<NodeId>, g: u32, h: u32) -> Self {
        Self { state, parent, g, h }
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn g(&self) -> u32 {
        self.g
    }

    pub fn h(&self) -> u32 {
        self.h
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

/// Owns every node created by one search. Parents are indices into the arena,
/// so the search tree needs no shared pointers.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        debug_assert!(node.parent.map_or(true, |parent| parent < self.nodes.len()));
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// States from `id` back to the root, following parent links.
    pub fn backtrack(&self, id: NodeId) -> Vec<PuzzleState> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(id) = current {
            let node = self.get(id);
            path.push(node.state.clone());
            current = node.parent;
        }
        path
    }
}
