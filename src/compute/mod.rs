//! Compute module - The Life state-transition engine.

mod grid;
mod rules;
mod simulation;

pub use grid::*;
pub use rules::*;
pub use simulation::*;
