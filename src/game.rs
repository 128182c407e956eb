use log::debug;
use rand::Rng;

use crate::config::GridConfig;
use crate::moves::{can_move, Direction};
use crate::search::{AStar, Solution};
use crate::shuffle::shuffled_state;
use crate::state::PuzzleState;

/// A single game: the arrangement on screen, the slides made so far and the
/// solver used when the player gives up.
#[derive(Debug, Clone)]
pub struct Game {
    config: GridConfig,
    goal: PuzzleState,
    state: PuzzleState,
    num_moves: usize,
    solver: AStar,
}

impl Game {
    /// Starts from the solved arrangement.
    pub fn new(config: GridConfig) -> Self {
        let goal = config.goal();
        Self {
            config,
            state: goal.clone(),
            goal,
            num_moves: 0,
            solver: AStar::new(config),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_goal()
    }

    /// Deals a new solvable arrangement and resets the move count.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.state = shuffled_state(&self.state, &self.goal, self.config.num_columns(), rng);
        self.num_moves = 0;
        debug!("new game\n{}", self.state);
    }

    /// Slides the tile at `position` if flinging it in `direction` is legal.
    pub fn fling(&mut self, direction: Direction, position: usize) -> bool {
        let legal = can_move(
            direction,
            position,
            self.state.blank_pos(),
            self.config.num_columns(),
        );
        if legal {
            self.state.slide_in_place(position);
            self.num_moves += 1;
        }
        legal
    }

    /// Shortest path from the current arrangement to the goal.
    pub fn solve(&mut self) -> Option<Solution> {
        self.solver.solve(&self.state, &self.goal)
    }

    /// Moves to `state` as part of replaying a solution; does not count as a
    /// player move.
    pub fn show(&mut self, state: PuzzleState) {
        debug_assert_eq!(state.len(), self.state.len());
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn legal_flings_move_and_count() {
        let mut game = Game::new(GridConfig::default());
        assert!(game.is_solved());

        // Tile 5 slides down into the blank at 8.
        assert!(game.fling(Direction::Down, 5));
        assert_eq!(game.state().blank_pos(), 5);
        assert_eq!(game.num_moves(), 1);
        assert!(!game.is_solved());

        assert!(!game.fling(Direction::Left, 3));
        assert!(!game.fling(Direction::Invalid, 4));
        assert_eq!(game.num_moves(), 1);

        assert!(game.fling(Direction::Up, 8));
        assert!(game.is_solved());
        assert_eq!(game.num_moves(), 2);
    }

    #[test]
    fn shuffle_resets_and_solve_finishes() {
        let mut game = Game::new(GridConfig::default());
        let mut rng = StdRng::seed_from_u64(42);
        game.fling(Direction::Down, 5);
        game.shuffle(&mut rng);
        assert_eq!(game.num_moves(), 0);
        assert!(!game.is_solved());

        let mut solution = game.solve().unwrap();
        assert_eq!(solution.pop().as_ref(), Some(game.state()));
        while let Some(next) = solution.pop() {
            game.show(next);
        }
        assert!(game.is_solved());
        assert_eq!(game.num_moves(), 0);
    }
}
