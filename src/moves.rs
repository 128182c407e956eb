use std::fmt;

use crate::topology::{is_left_edge, is_right_edge};

/// Direction in which a tile is flung. `Invalid` stands for a gesture that
/// could not be classified and never permits a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Invalid,
}

impl Direction {
    pub const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Invalid,
    ];

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Invalid => Direction::Invalid,
        }
    }

    /// Direction the tile at `from` travels when it slides into the blank at
    /// `to`.
    pub fn between(from: usize, to: usize, num_columns: usize) -> Self {
        if to + num_columns == from {
            Direction::Up
        } else if from + num_columns == to {
            Direction::Down
        } else if to + 1 == from && !is_right_edge(to, num_columns) {
            Direction::Left
        } else if from + 1 == to && !is_left_edge(to, num_columns) {
            Direction::Right
        } else {
            Direction::Invalid
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Invalid => "Invalid",
        };
        write!(f, "{}", s)
    }
}

/// Whether the tile at `position` may be flung in `direction` into the blank
/// at `blank_pos`.
///
/// A tile slides up only when the blank is directly above it, and likewise for
/// the other directions; horizontal slides never wrap across rows.
pub fn can_move(direction: Direction, position: usize, blank_pos: usize, num_columns: usize) -> bool {
    let num_tiles = match num_columns.checked_mul(num_columns) {
        Some(num_tiles) if num_tiles > 0 => num_tiles,
        _ => return false,
    };
    if position >= num_tiles || blank_pos >= num_tiles {
        return false;
    }

    match direction {
        Direction::Up => position == blank_pos + num_columns,
        Direction::Down => blank_pos >= num_columns && position == blank_pos - num_columns,
        Direction::Left => !is_right_edge(blank_pos, num_columns) && position == blank_pos + 1,
        Direction::Right => {
            !is_left_edge(blank_pos, num_columns) && blank_pos >= 1 && position == blank_pos - 1
        }
        Direction::Invalid => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUM_COLUMNS: usize = 3;

    fn allowed_moves(blank_pos: usize) -> Vec<(usize, Direction)> {
        let mut allowed = Vec::new();
        for position in 0..NUM_COLUMNS * NUM_COLUMNS {
            for direction in Direction::ALL {
                if can_move(direction, position, blank_pos, NUM_COLUMNS) {
                    allowed.push((position, direction));
                }
            }
        }
        allowed
    }

    #[test]
    fn movable_tiles_for_every_blank_position() {
        use Direction::*;
        let expected: [Vec<(usize, Direction)>; 9] = [
            vec![(1, Left), (3, Up)],
            vec![(0, Right), (2, Left), (4, Up)],
            vec![(1, Right), (5, Up)],
            vec![(0, Down), (4, Left), (6, Up)],
            vec![(1, Down), (3, Right), (5, Left), (7, Up)],
            vec![(2, Down), (4, Right), (8, Up)],
            vec![(3, Down), (7, Left)],
            vec![(4, Down), (6, Right), (8, Left)],
            vec![(5, Down), (7, Right)],
        ];

        for (blank_pos, moves) in expected.iter().enumerate() {
            assert_eq!(&allowed_moves(blank_pos), moves, "blank at {}", blank_pos);
        }
    }

    #[test]
    fn invalid_direction_never_moves() {
        for blank_pos in 0..9 {
            for position in 0..9 {
                assert!(!can_move(Direction::Invalid, position, blank_pos, NUM_COLUMNS));
            }
        }
    }

    #[test]
    fn out_of_range_positions_are_rejected() {
        assert!(!can_move(Direction::Up, 11, 8, NUM_COLUMNS));
        assert!(!can_move(Direction::Left, 9, 8, NUM_COLUMNS));
        assert!(!can_move(Direction::Down, usize::MAX, 2, NUM_COLUMNS));
    }

    #[test]
    fn off_grid_blank_is_rejected() {
        assert!(!can_move(Direction::Up, 0, usize::MAX, NUM_COLUMNS));
        assert!(!can_move(Direction::Left, 0, usize::MAX, NUM_COLUMNS));
        assert!(!can_move(Direction::Down, 6, 9, NUM_COLUMNS));
        assert!(!can_move(Direction::Right, 8, 9, NUM_COLUMNS));
        for direction in Direction::ALL {
            for position in 0..9 {
                assert!(!can_move(direction, position, 9, NUM_COLUMNS));
                assert!(!can_move(direction, position, usize::MAX, NUM_COLUMNS));
            }
        }
        assert!(!can_move(Direction::Up, 0, 0, usize::MAX));
    }

    #[test]
    fn direction_between_adjacent_positions() {
        assert_eq!(Direction::between(3, 0, NUM_COLUMNS), Direction::Up);
        assert_eq!(Direction::between(0, 3, NUM_COLUMNS), Direction::Down);
        assert_eq!(Direction::between(1, 0, NUM_COLUMNS), Direction::Left);
        assert_eq!(Direction::between(0, 1, NUM_COLUMNS), Direction::Right);
        assert_eq!(Direction::between(3, 2, NUM_COLUMNS), Direction::Invalid);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
    }
}
