//! Initial patterns for Life runs.

use serde::{Deserialize, Serialize};

use crate::compute::{Grid, GridError, random_grid_with_seed};

/// Predefined patterns for initialization.
///
/// Positions are `(row, col)` of the pattern's top-left corner and wrap
/// around the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Independent random cells at the configured alive probability.
    #[default]
    Random,
    /// Glider heading towards increasing row and column.
    Glider { row: usize, col: usize },
    /// Period-2 oscillator, horizontal phase.
    Blinker { row: usize, col: usize },
    /// 2x2 still life.
    Block { row: usize, col: usize },
    /// Explicit list of live cells.
    Custom { cells: Vec<(usize, usize)> },
}

const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
const BLINKER: &[(usize, usize)] = &[(0, 0), (0, 1), (0, 2)];
const BLOCK: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

impl Pattern {
    /// Generate the initial grid.
    ///
    /// `alive_probability` and `seed` only affect [`Pattern::Random`].
    pub fn generate(
        &self,
        size: usize,
        alive_probability: f64,
        seed: Option<u64>,
    ) -> Result<Grid, GridError> {
        match self {
            Pattern::Random => random_grid_with_seed(size, alive_probability, seed),
            Pattern::Glider { row, col } => place(size, GLIDER, *row, *col),
            Pattern::Blinker { row, col } => place(size, BLINKER, *row, *col),
            Pattern::Block { row, col } => place(size, BLOCK, *row, *col),
            Pattern::Custom { cells } => Grid::from_alive(size, cells),
        }
    }
}

fn place(
    size: usize,
    shape: &[(usize, usize)],
    row: usize,
    col: usize,
) -> Result<Grid, GridError> {
    if size == 0 {
        return Err(GridError::InvalidSize);
    }
    // Reduce the anchor first so adding the shape offset cannot overflow.
    let (row, col) = (row % size, col % size);
    let cells: Vec<(usize, usize)> = shape
        .iter()
        .map(|&(r, c)| ((row + r) % size, (col + c) % size))
        .collect();
    Grid::from_alive(size, &cells)
}
