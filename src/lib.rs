//! Sliding-tile puzzle engine: solvability, shuffling, move validation and
//! optimal solving with A* over Manhattan distance.

pub mod config;
pub mod error;
pub mod game;
pub mod heuristic;
pub mod moves;
pub mod search;
pub mod shuffle;
pub mod solvability;
pub mod state;
pub mod topology;

pub use config::GridConfig;
pub use error::PuzzleError;
pub use game::Game;
pub use heuristic::{manhattan_distance, Heuristic, Manhattan, Zero};
pub use moves::{can_move, Direction};
pub use search::{solve, spawn_solve, AStar, PendingSolution, SearchStats, Solution};
pub use shuffle::shuffled_state;
pub use solvability::{count_inversions, fix_parity, is_solvable};
pub use state::{Fingerprint, PuzzleState};
pub use topology::Topology;
