//! Transition rule for classic Life (B3/S23).
//!
//! The rule decides the next state of a single cell from its current state and
//! the number of live cells among its eight neighbors.

use super::Cell;

/// Neighbor count at which a dead cell is born.
pub const BIRTH: usize = 3;

/// Neighbor counts at which a live cell survives.
pub const SURVIVAL: [usize; 2] = [2, 3];

/// Compute the next state of a cell: N(c, n).
///
/// - Alive with 2 or 3 neighbors stays alive
/// - Alive with fewer than 2 or more than 3 dies
/// - Dead with exactly 3 neighbors is born
/// - Everything else stays dead
#[inline]
pub fn next_state(cell: Cell, neighbors: usize) -> Cell {
    match cell {
        Cell::Alive if SURVIVAL.contains(&neighbors) => Cell::Alive,
        Cell::Dead if neighbors == BIRTH => Cell::Alive,
        _ => Cell::Dead,
    }
}
