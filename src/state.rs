use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::GridConfig;
use crate::error::PuzzleError;

/// Integer encoding of a tile arrangement, used as the key of the frontier
/// index, the explored set and the heuristic cache.
///
/// The tiles are read as the digits of a number in base `num_tiles`, which is
/// collision-free for every supported grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(u128);

impl Fingerprint {
    pub fn of(tiles: &[u8]) -> Self {
        let radix = tiles.len() as u128;
        Fingerprint(
            tiles
                .iter()
                .fold(0u128, |hash, &tile| hash * radix + tile as u128),
        )
    }

    pub fn value(&self) -> u128 {
        self.0
    }
}

/// One configuration of the puzzle: a row-major permutation of `0..N` plus the
/// index of the blank tile, which is always the largest identifier.
///
/// Equality and hashing only look at the tiles; the blank position is derived.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    tiles: Vec<u8>,
    blank_pos: usize,
}

impl PuzzleState {
    /// Validates `tiles` as a permutation for the given grid and locates the
    /// blank.
    pub fn from_tiles(tiles: Vec<u8>, config: &GridConfig) -> Result<Self, PuzzleError> {
        let expected = config.num_tiles();
        if tiles.len() != expected {
            return Err(PuzzleError::WrongLength {
                expected,
                actual: tiles.len(),
            });
        }

        let max = config.blank_marker();
        let mut seen = vec![false; expected];
        for &tile in &tiles {
            if tile > max {
                return Err(PuzzleError::TileOutOfRange { tile, max });
            }
            if seen[tile as usize] {
                return Err(PuzzleError::DuplicateTile(tile));
            }
            seen[tile as usize] = true;
        }

        let blank_pos = Self::locate_blank(&tiles);
        Ok(Self { tiles, blank_pos })
    }

    /// Builds a state whose invariants the caller already guarantees.
    pub(crate) fn from_parts(tiles: Vec<u8>, blank_pos: usize) -> Self {
        debug_assert_eq!(blank_pos, Self::locate_blank(&tiles));
        Self { tiles, blank_pos }
    }

    /// Builds a state from an already-permuted sequence, scanning for the blank.
    pub(crate) fn from_permutation(tiles: Vec<u8>) -> Self {
        let blank_pos = Self::locate_blank(&tiles);
        Self { tiles, blank_pos }
    }

    fn locate_blank(tiles: &[u8]) -> usize {
        let blank = (tiles.len() - 1) as u8;
        let position = tiles.iter().position(|&tile| tile == blank);
        debug_assert!(position.is_some(), "blank tile missing from {:?}", tiles);
        position.unwrap_or(tiles.len() - 1)
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn blank_pos(&self) -> usize {
        self.blank_pos
    }

    pub fn blank_marker(&self) -> u8 {
        (self.tiles.len() - 1) as u8
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn is_blank(&self, position: usize) -> bool {
        self.tiles.get(position) == Some(&self.blank_marker())
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(&self.tiles)
    }

    /// True when every tile sits at the index equal to its identifier.
    pub fn is_goal(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(position, &tile)| tile as usize == position)
    }

    /// Returns the state reached by sliding the tile at `position` into the
    /// blank. Adjacency is the caller's responsibility.
    pub fn slide(&self, position: usize) -> PuzzleState {
        let mut next = self.clone();
        next.slide_in_place(position);
        next
    }

    pub(crate) fn slide_in_place(&mut self, position: usize) {
        self.tiles.swap(position, self.blank_pos);
        self.blank_pos = position;
    }

    /// Swaps two tiles, neither of which may be the blank.
    pub(crate) fn swap_tiles(&mut self, a: usize, b: usize) {
        debug_assert!(!self.is_blank(a) && !self.is_blank(b));
        self.tiles.swap(a, b);
    }
}

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.tiles.len();
        let num_columns = (1..=len).find(|n| n * n >= len).unwrap_or(1);
        let blank = self.blank_marker();
        for row in self.tiles.chunks(num_columns) {
            for &tile in row {
                if tile == blank {
                    write!(f, " . ")?;
                } else {
                    write!(f, "{:2} ", tile)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GridConfig {
        GridConfig::default()
    }

    #[test]
    fn rejects_malformed_configurations() {
        assert_eq!(
            PuzzleState::from_tiles(vec![0, 1, 2], &config()),
            Err(PuzzleError::WrongLength {
                expected: 9,
                actual: 3
            })
        );
        assert_eq!(
            PuzzleState::from_tiles(vec![0, 1, 2, 3, 4, 5, 6, 7, 9], &config()),
            Err(PuzzleError::TileOutOfRange { tile: 9, max: 8 })
        );
        assert_eq!(
            PuzzleState::from_tiles(vec![0, 1, 2, 3, 4, 5, 6, 7, 7], &config()),
            Err(PuzzleError::DuplicateTile(7))
        );
    }

    #[test]
    fn locates_blank_on_construction() {
        let state = PuzzleState::from_tiles(vec![0, 1, 2, 8, 3, 5, 6, 4, 7], &config()).unwrap();
        assert_eq!(state.blank_pos(), 3);
        assert!(state.is_blank(3));
        assert!(!state.is_blank(4));
        assert!(!state.is_blank(42));
    }

    #[test]
    fn equality_ignores_nothing_but_tiles() {
        let a = PuzzleState::from_tiles(vec![0, 1, 2, 3, 4, 5, 6, 8, 7], &config()).unwrap();
        let b = config().goal().slide(7);
        assert_eq!(a, b);
        assert_eq!(b.blank_pos(), 7);
        assert_ne!(a, config().goal());
    }

    #[test]
    fn slide_tracks_blank_position() {
        let goal = config().goal();
        let up = goal.slide(5);
        assert_eq!(up.tiles(), &[0, 1, 2, 3, 4, 8, 6, 7, 5]);
        assert_eq!(up.blank_pos(), 5);
        assert!(goal.is_goal());
        assert!(!up.is_goal());
    }

    #[test]
    fn fingerprint_reads_tiles_as_base_n_digits() {
        assert_eq!(Fingerprint::of(&[0, 1, 2, 3]).value(), 27);
        let state = PuzzleState::from_tiles(vec![0, 1, 2, 4, 5, 3, 7, 8, 6], &config()).unwrap();
        let expected = [0u128, 1, 2, 4, 5, 3, 7, 8, 6]
            .iter()
            .fold(0u128, |acc, &d| acc * 9 + d);
        assert_eq!(state.fingerprint().value(), expected);
    }

    #[test]
    fn display_renders_rows() {
        let rendered = config().goal().to_string();
        assert_eq!(rendered, " 0  1  2 \n 3  4  5 \n 6  7  . \n");
    }

    #[test]
    fn display_splits_wider_grids_into_rows() {
        let rendered = GridConfig::new(4).unwrap().goal().slide(11).to_string();
        assert_eq!(
            rendered,
            " 0  1  2  3 \n 4  5  6  7 \n 8  9 10  . \n12 13 14 11 \n"
        );
        assert_eq!(GridConfig::new(2).unwrap().goal().to_string(), " 0  1 \n 2  . \n");
    }
}
