use crate::config::GridConfig;

pub fn is_left_edge(position: usize, num_columns: usize) -> bool {
    position % num_columns == 0
}

pub fn is_right_edge(position: usize, num_columns: usize) -> bool {
    position % num_columns == num_columns - 1
}

/// Adjacency table of a square grid, precomputed once per dimension.
///
/// Neighbors are listed in ascending position order (above, left, right,
/// below), which fixes the order in which the search generates children.
#[derive(Debug, Clone)]
pub struct Topology {
    num_columns: usize,
    neighbors: Vec<Vec<usize>>,
}

impl Topology {
    pub fn new(config: &GridConfig) -> Self {
        let num_columns = config.num_columns();
        let num_tiles = config.num_tiles();

        let neighbors = (0..num_tiles)
            .map(|position| {
                let mut adjacent = Vec::with_capacity(4);
                if position >= num_columns {
                    adjacent.push(position - num_columns);
                }
                if !is_left_edge(position, num_columns) {
                    adjacent.push(position - 1);
                }
                if !is_right_edge(position, num_columns) {
                    adjacent.push(position + 1);
                }
                if position + num_columns < num_tiles {
                    adjacent.push(position + num_columns);
                }
                adjacent
            })
            .collect();

        Self {
            num_columns,
            neighbors,
        }
    }

    /// Positions one slide away from `position`; empty when out of range.
    pub fn neighbors(&self, position: usize) -> &[usize] {
        self.neighbors
            .get(position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_left_edge(&self, position: usize) -> bool {
        is_left_edge(position, self.num_columns)
    }

    pub fn is_right_edge(&self, position: usize) -> bool {
        is_right_edge(position, self.num_columns)
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }
}
