//! A* search over puzzle configurations.
//!
//! The frontier is ordered by `f = g + h`; a configuration already expanded is
//! never generated again, and a configuration already in the frontier is only
//! replaced by a cheaper path to it. With an admissible, consistent heuristic
//! the first goal node popped lies on a shortest path.

mod background;
mod frontier;
mod node;

use log::debug;
use rustc_hash::FxHashSet;

use crate::config::GridConfig;
use crate::heuristic::{Heuristic, Manhattan};
use crate::moves::Direction;
use crate::state::{Fingerprint, PuzzleState};
use crate::topology::Topology;

pub use background::{spawn_solve, PendingSolution};
pub use frontier::Frontier;
pub use node::{Node, NodeArena, NodeId};

/// A shortest sequence of configurations, stored as a stack: the goal at the
/// bottom and the start on top, so popping replays the solution from the
/// start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    stack: Vec<PuzzleState>,
}

impl Solution {
    fn new(stack: Vec<PuzzleState>) -> Self {
        debug_assert!(!stack.is_empty());
        Self { stack }
    }

    /// Number of slides, one less than the number of states.
    pub fn num_moves(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn start(&self) -> Option<&PuzzleState> {
        self.stack.last()
    }

    pub fn goal(&self) -> Option<&PuzzleState> {
        self.stack.first()
    }

    /// Takes the next state to display, starting with the start state.
    pub fn pop(&mut self) -> Option<PuzzleState> {
        self.stack.pop()
    }

    /// States from start to goal.
    pub fn states(&self) -> impl DoubleEndedIterator<Item = &PuzzleState> {
        self.stack.iter().rev()
    }

    /// The stack as stored: goal first, start last.
    pub fn into_stack(self) -> Vec<PuzzleState> {
        self.stack
    }

    /// Direction of the tile slid at each step, start to goal.
    pub fn moves(&self, num_columns: usize) -> Vec<Direction> {
        self.stack
            .windows(2)
            .rev()
            .map(|pair| {
                let (after, before) = (&pair[0], &pair[1]);
                Direction::between(after.blank_pos(), before.blank_pos(), num_columns)
            })
            .collect()
    }
}

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize,
    pub generated: usize,
    pub replaced: usize,
}

/// A* solver for one grid size. The heuristic, and any cache it keeps, lives
/// as long as the solver, so repeated solves reuse earlier estimates.
#[derive(Debug, Clone)]
pub struct AStar<H: Heuristic = Manhattan> {
    config: GridConfig,
    topology: Topology,
    heuristic: H,
    stats: SearchStats,
}

impl AStar<Manhattan> {
    pub fn new(config: GridConfig) -> Self {
        Self::with_heuristic(config, Manhattan::new(config.num_columns()))
    }
}

impl<H: Heuristic> AStar<H> {
    pub fn with_heuristic(config: GridConfig, heuristic: H) -> Self {
        Self {
            config,
            topology: Topology::new(&config),
            heuristic,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Finds a shortest sequence of slides from `start` to `goal`, or `None`
    /// when the goal is unreachable.
    ///
    /// `goal` must be the canonical arrangement (tile `k` at index `k`): the
    /// Manhattan estimate measures distance to that arrangement and is not a
    /// lower bound towards any other.
    pub fn solve(&mut self, start: &PuzzleState, goal: &PuzzleState) -> Option<Solution> {
        debug_assert_eq!(start.len(), self.config.num_tiles());
        debug_assert_eq!(goal.len(), self.config.num_tiles());
        debug_assert!(goal.is_goal(), "goal is not the canonical arrangement\n{}", goal);

        let mut stats = SearchStats::default();
        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();
        let mut explored: FxHashSet<Fingerprint> = FxHashSet::default();

        let h = self.heuristic.estimate(start);
        let root = Node::new(start.clone(), None, 0, h);
        let root_id = arena.push(root.clone());
        frontier.push(start.fingerprint(), root_id, &root);

        while let Some(id) = frontier.pop() {
            let current = arena.get(id);
            if current.state() == goal {
                self.stats = stats;
                debug!(
                    "solved in {} moves, expanded {} generated {} replaced {}",
                    current.g(),
                    stats.expanded,
                    stats.generated,
                    stats.replaced
                );
                return Some(Solution::new(arena.backtrack(id)));
            }

            let state = current.state().clone();
            let g = current.g() + 1;
            explored.insert(state.fingerprint());
            stats.expanded += 1;

            for &position in self.topology.neighbors(state.blank_pos()) {
                let child = state.slide(position);
                let fingerprint = child.fingerprint();
                if explored.contains(&fingerprint) {
                    continue;
                }

                let h = self.heuristic.estimate(&child);
                stats.generated += 1;

                match frontier.get(&fingerprint) {
                    None => {
                        let node = Node::new(child, Some(id), g, h);
                        let child_id = arena.push(node.clone());
                        frontier.push(fingerprint, child_id, &node);
                    }
                    Some(existing) if arena.get(existing).f() > g + h => {
                        let node = Node::new(child, Some(id), g, h);
                        let child_id = arena.push(node.clone());
                        frontier.push(fingerprint, child_id, &node);
                        stats.replaced += 1;
                    }
                    Some(_) => {}
                }
            }
        }

        self.stats = stats;
        debug!(
            "no solution after expanding {} configurations",
            stats.expanded
        );
        None
    }
}

/// Solves with a fresh Manhattan-guided solver.
pub fn solve(start: &PuzzleState, goal: &PuzzleState, config: GridConfig) -> Option<Solution> {
    AStar::new(config).solve(start, goal)
}
