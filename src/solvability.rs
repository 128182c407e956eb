use log::trace;

use crate::state::PuzzleState;

/// Number of pairs of non-blank tiles that appear in descending order.
pub fn count_inversions(tiles: &[u8], blank_marker: u8) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != blank_marker)
        .map(|(i, &tile)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != blank_marker && next < tile)
                .count()
        })
        .sum()
}

/// Whether the goal arrangement is reachable from `state` by legal slides.
///
/// On odd-width grids a vertical slide moves a tile past an even number of
/// others, so inversion parity alone decides. On even-width grids each
/// vertical slide flips the parity, so the blank's row distance from the bottom
/// row is added in.
pub fn is_solvable(state: &PuzzleState, num_columns: usize) -> bool {
    let inversions = count_inversions(state.tiles(), state.blank_marker());

    if num_columns % 2 == 1 {
        inversions % 2 == 0
    } else {
        let blank_row = state.blank_pos() / num_columns;
        let row_distance = num_columns - 1 - blank_row;
        (inversions + row_distance) % 2 == 0
    }
}

/// Flips the solvability of `state` by swapping the first adjacent pair of
/// non-blank tiles.
pub fn fix_parity(state: &mut PuzzleState) {
    let first = (0..state.len() - 1).find(|&position| {
        !state.is_blank(position) && !state.is_blank(position + 1)
    });

    if let Some(position) = first {
        trace!("repairing parity by swapping positions {} and {}", position, position + 1);
        state.swap_tiles(position, position + 1);
    }
}
