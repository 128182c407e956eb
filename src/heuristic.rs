use log::debug;
use rustc_hash::FxHashMap;

use crate::state::{Fingerprint, PuzzleState};

/// Lower bound on the number of slides left to reach the goal.
pub trait Heuristic {
    fn estimate(&mut self, state: &PuzzleState) -> u32;
}

/// Sum over all non-blank tiles of the row and column offsets between each
/// tile's position and its goal position (index equal to the tile id).
pub fn manhattan_distance(tiles: &[u8], num_columns: usize, blank_marker: u8) -> u32 {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != blank_marker)
        .map(|(position, &tile)| {
            let goal = tile as usize;
            let rows = (position / num_columns).abs_diff(goal / num_columns);
            let columns = (position % num_columns).abs_diff(goal % num_columns);
            (rows + columns) as u32
        })
        .sum()
}

/// Memoizing Manhattan-distance estimator.
///
/// The cache is keyed by fingerprint, only grows, and belongs to this value;
/// sharing it between threads requires wrapping the estimator.
#[derive(Debug, Clone)]
pub struct Manhattan {
    num_columns: usize,
    cache: FxHashMap<Fingerprint, u32>,
}

impl Manhattan {
    pub fn new(num_columns: usize) -> Self {
        Self {
            num_columns,
            cache: FxHashMap::default(),
        }
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&mut self) {
        debug!("dropping {} cached manhattan distances", self.cache.len());
        self.cache.clear();
    }
}

impl Heuristic for Manhattan {
    fn estimate(&mut self, state: &PuzzleState) -> u32 {
        let num_columns = self.num_columns;
        *self.cache.entry(state.fingerprint()).or_insert_with(|| {
            manhattan_distance(state.tiles(), num_columns, state.blank_marker())
        })
    }
}

/// Always estimates zero, turning A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&mut self, _state: &PuzzleState) -> u32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    #[test]
    fn goal_is_zero() {
        let config = GridConfig::default();
        let mut manhattan = Manhattan::new(3);
        assert_eq!(manhattan.estimate(&config.goal()), 0);
    }

    #[test]
    fn one_slide_from_goal_is_one() {
        let config = GridConfig::default();
        let mut manhattan = Manhattan::new(3);
        assert_eq!(manhattan.estimate(&config.goal().slide(7)), 1);
        assert_eq!(manhattan.estimate(&config.goal().slide(5)), 1);
    }

    #[test]
    fn blank_does_not_count() {
        // Only tile 0 and tile 1 are displaced, by one column each.
        assert_eq!(manhattan_distance(&[1, 0, 2, 3, 4, 5, 6, 7, 8], 3, 8), 2);
        // Blank far from home, every tile home.
        assert_eq!(manhattan_distance(&[8, 1, 2, 3, 4, 5, 6, 7, 0], 3, 8), 4);
    }

    #[test]
    fn repeated_estimates_hit_the_cache() {
        let config = GridConfig::default();
        let state = PuzzleState::from_tiles(vec![7, 5, 6, 1, 4, 3, 2, 8, 0], &config).unwrap();
        let mut manhattan = Manhattan::new(3);

        let first = manhattan.estimate(&state);
        assert_eq!(manhattan.cached(), 1);
        assert_eq!(manhattan.estimate(&state), first);
        assert_eq!(manhattan.cached(), 1);

        manhattan.clear();
        assert_eq!(manhattan.cached(), 0);
    }
}
