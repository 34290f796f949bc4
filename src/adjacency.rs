use smallvec::SmallVec;

use crate::board::Dimensions;
use crate::{CellId, MAX_NEIGHBORS};

/// Precomputed king-move neighbors for every cell of a board with the given dimensions.
#[derive(Debug, Clone)]
pub struct Adjacency {
    dimensions: Dimensions,
    neighbors: Vec<SmallVec<[CellId; MAX_NEIGHBORS]>>,
}

impl Adjacency {
    pub fn new(dimensions: Dimensions) -> Adjacency {
        let neighbors = dimensions.cells().map(|cell| {
            if dimensions.is_linear() {
                linear_neighbors(dimensions, cell)
            } else {
                king_neighbors(dimensions, cell)
            }
        }).collect();

        Adjacency { dimensions, neighbors }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn neighbors(&self, cell: CellId) -> &[CellId] {
        &self.neighbors[cell]
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

/// A single row or column only connects each cell to the cells before and after it.
fn linear_neighbors(dimensions: Dimensions, cell: CellId) -> SmallVec<[CellId; MAX_NEIGHBORS]> {
    let mut result = SmallVec::new();
    if cell > 0 {
        result.push(cell - 1);
    }
    if cell + 1 < dimensions.cell_count() {
        result.push(cell + 1);
    }
    result
}

fn king_neighbors(dimensions: Dimensions, cell: CellId) -> SmallVec<[CellId; MAX_NEIGHBORS]> {
    let (row, col) = dimensions.coord(cell);
    let mut result = SmallVec::new();

    for other_row in row.saturating_sub(1)..=(row + 1).min(dimensions.rows - 1) {
        for other_col in col.saturating_sub(1)..=(col + 1).min(dimensions.cols - 1) {
            if (other_row, other_col) != (row, col) {
                result.push(dimensions.cell_id((other_row, other_col)));
            }
        }
    }

    result
}
