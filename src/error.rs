use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Invalid grid dimension, expected at least 2 columns but got {0}")]
    InvalidDimension(usize),
    #[error("Grid too large, at most {max} columns are supported but got {actual}")]
    GridTooLarge { max: usize, actual: usize },
    #[error("Wrong number of tiles, expected {expected} but got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("Tile out of range, expected a value between 0 and {max} but got {tile}")]
    TileOutOfRange { tile: u8, max: u8 },
    #[error("Tile {0} appears more than once")]
    DuplicateTile(u8),
    #[error("Background solver terminated without a result")]
    SolverPanicked,
}
