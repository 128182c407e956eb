use crate::error::PuzzleError;
use crate::state::PuzzleState;

/// Largest supported column count. A 5x5 grid has 25 tiles, and 25^25 is the
/// largest mixed-radix fingerprint that still fits in a `u128`.
pub const MAX_COLUMNS: usize = 5;

/// Dimension of a square sliding-tile grid.
///
/// Tiles are numbered `0..num_tiles()` in row-major goal order and the largest
/// identifier is reserved for the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridConfig {
    num_columns: usize,
}

impl GridConfig {
    pub fn new(num_columns: usize) -> Result<Self, PuzzleError> {
        if num_columns < 2 {
            return Err(PuzzleError::InvalidDimension(num_columns));
        }
        if num_columns > MAX_COLUMNS {
            return Err(PuzzleError::GridTooLarge {
                max: MAX_COLUMNS,
                actual: num_columns,
            });
        }
        Ok(Self { num_columns })
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn num_tiles(&self) -> usize {
        self.num_columns * self.num_columns
    }

    pub fn blank_marker(&self) -> u8 {
        (self.num_tiles() - 1) as u8
    }

    /// The solved arrangement: tile `k` sits at index `k`.
    pub fn goal(&self) -> PuzzleState {
        let tiles: Vec<u8> = (0..self.num_tiles() as u8).collect();
        PuzzleState::from_parts(tiles, self.num_tiles() - 1)
    }

    pub fn row(&self, position: usize) -> usize {
        position / self.num_columns
    }

    pub fn column(&self, position: usize) -> usize {
        position % self.num_columns
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { num_columns: 3 }
    }
}
