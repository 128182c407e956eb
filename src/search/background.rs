use std::thread::{self, JoinHandle};

use log::debug;

use super::{AStar, Solution};
use crate::config::GridConfig;
use crate::error::PuzzleError;
use crate::state::PuzzleState;

/// A solve running on a worker thread.
#[derive(Debug)]
pub struct PendingSolution {
    handle: JoinHandle<Option<Solution>>,
}

impl PendingSolution {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Blocks until the worker is done.
    pub fn wait(self) -> Result<Option<Solution>, PuzzleError> {
        self.handle.join().map_err(|_| PuzzleError::SolverPanicked)
    }
}

/// Starts solving `start` towards the goal of `config` without blocking the
/// caller, e.g. while a shuffle is still being shown.
pub fn spawn_solve(start: PuzzleState, config: GridConfig) -> PendingSolution {
    let handle = thread::spawn(move || {
        debug!("background solve started");
        AStar::new(config).solve(&start, &config.goal())
    });
    PendingSolution { handle }
}
