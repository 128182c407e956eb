use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::solvability::{fix_parity, is_solvable};
use crate::state::PuzzleState;

/// Produces a uniformly permuted arrangement of the tiles of `current` that is
/// solvable and differs from `goal`.
///
/// An unsolvable permutation is repaired with a single parity swap. The goal
/// check runs after the repair, since swapping can land exactly on the goal.
pub fn shuffled_state<R: Rng + ?Sized>(
    current: &PuzzleState,
    goal: &PuzzleState,
    num_columns: usize,
    rng: &mut R,
) -> PuzzleState {
    let mut tiles = current.tiles().to_vec();

    loop {
        tiles.shuffle(rng);

        let mut state = PuzzleState::from_permutation(tiles.clone());
        if !is_solvable(&state, num_columns) {
            fix_parity(&mut state);
        }

        if &state != goal {
            return state;
        }
        trace!("shuffle produced the goal arrangement, reshuffling");
    }
}
