//! Square toroidal grid and the single-generation update.
//!
//! Cells are stored as a flat row-major vector: `cells[row * size + col]`.
//! Every coordinate handed to the grid is interpreted modulo `size`, so there
//! are no edges and no out-of-bounds accesses.

use rand::prelude::*;

use super::next_state;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Grid construction errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("Grid size must be non-zero and size * size must fit in usize")]
    InvalidSize,
    #[error("Alive probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// Square grid of cells with fixed side length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid of `size x size` cells.
    pub fn new(size: usize) -> Result<Self, GridError> {
        let count = match size.checked_mul(size) {
            Some(count) if count > 0 => count,
            _ => return Err(GridError::InvalidSize),
        };
        Ok(Self {
            size,
            cells: vec![Cell::Dead; count],
        })
    }

    /// Create a grid with the given `(row, col)` cells alive.
    ///
    /// Coordinates wrap, so `(size, 0)` is the same cell as `(0, 0)`.
    pub fn from_alive(size: usize, alive: &[(usize, usize)]) -> Result<Self, GridError> {
        let mut grid = Self::new(size)?;
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive);
        }
        Ok(grid)
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.size
    }

    /// Flat index of a (wrapped) coordinate.
    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        (row % self.size) * self.size + (col % self.size)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.idx(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.idx(row, col);
        self.cells[idx] = cell;
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

/// Generate a random grid where each cell is alive with `alive_probability`.
///
/// Draws one Bernoulli sample per cell from `rng`, in row-major order.
pub fn random_grid<R: Rng>(
    size: usize,
    alive_probability: f64,
    rng: &mut R,
) -> Result<Grid, GridError> {
    if !(0.0..=1.0).contains(&alive_probability) {
        return Err(GridError::InvalidProbability(alive_probability));
    }
    let mut grid = Grid::new(size)?;
    for cell in grid.cells.iter_mut() {
        *cell = Cell::from(rng.gen_bool(alive_probability));
    }
    Ok(grid)
}

/// Generate a random grid from an optional seed.
///
/// `None` draws from OS entropy, so the run is not reproducible.
pub fn random_grid_with_seed(
    size: usize,
    alive_probability: f64,
    seed: Option<u64>,
) -> Result<Grid, GridError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    random_grid(size, alive_probability, &mut rng)
}

/// Count live cells among the 8 toroidal neighbors of `(row, col)`.
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> usize {
    let size = grid.size;
    let row = row % size;
    let col = col % size;
    let mut count = 0;

    // Offsets run 0..3 and are shifted by size - 1 so that the -1 offset
    // never underflows.
    for dr in 0..3 {
        let r = (row + dr + size - 1) % size;
        for dc in 0..3 {
            if dr == 1 && dc == 1 {
                continue;
            }
            let c = (col + dc + size - 1) % size;
            if grid.cells[r * size + c].is_alive() {
                count += 1;
            }
        }
    }

    count
}

/// Compute the next generation.
///
/// Every cell is evaluated against the unchanged input grid; the result is a
/// new grid of the same size.
pub fn update(grid: &Grid) -> Grid {
    let size = grid.size;
    let mut cells = Vec::with_capacity(size * size);

    for row in 0..size {
        for col in 0..size {
            let current = grid.cells[row * size + col];
            cells.push(next_state(current, count_neighbors(grid, row, col)));
        }
    }

    Grid { size, cells }
}
