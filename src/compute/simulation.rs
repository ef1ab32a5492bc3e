//! Owned simulation state.
//!
//! The current grid lives here and is replaced wholesale on every step.

use crate::schema::LifeConfig;

use super::{Grid, GridError, update};

/// Current grid plus the number of generations applied to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
}

impl Simulation {
    /// Start at generation 0 from an existing grid.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    /// Create the initial state described by a configuration.
    pub fn from_config(config: &LifeConfig) -> Result<Self, GridError> {
        let grid = config
            .pattern
            .generate(config.size, config.alive_probability, config.seed)?;
        Ok(Self::new(grid))
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation and return the new grid.
    pub fn step(&mut self) -> &Grid {
        self.grid = update(&self.grid);
        self.generation += 1;
        &self.grid
    }

    /// Advance `generations` steps.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Give up the current grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// Summary statistics for a simulation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationStats {
    pub generation: u64,
    pub population: usize,
    /// Fraction of live cells (0.0-1.0).
    pub density: f64,
}

impl SimulationStats {
    /// Compute statistics from state.
    pub fn from_simulation(sim: &Simulation) -> Self {
        let population = sim.grid.population();
        let cells = sim.grid.cells().len();
        Self {
            generation: sim.generation,
            population,
            density: population as f64 / cells as f64,
        }
    }
}

impl std::fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "generation {}: {} alive ({:.1}%)",
            self.generation,
            self.population,
            self.density * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Pattern;

    #[test]
    fn test_generation_counter() {
        let mut sim = Simulation::new(Grid::new(5).unwrap());
        assert_eq!(sim.generation(), 0);
        sim.step();
        sim.step();
        assert_eq!(sim.generation(), 2);
        sim.run(10);
        assert_eq!(sim.generation(), 12);
    }

    #[test]
    fn test_step_replaces_grid() {
        let blinker = Grid::from_alive(5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
        let mut sim = Simulation::new(blinker.clone());
        let next = sim.step().clone();
        assert_ne!(next, blinker);
        assert_eq!(sim.grid(), &next);
        sim.step();
        assert_eq!(sim.grid(), &blinker);
    }

    #[test]
    fn test_from_config() {
        let mut config = LifeConfig::batch();
        config.size = 12;
        config.pattern = Pattern::Block { row: 0, col: 0 };
        let sim = Simulation::from_config(&config).unwrap();
        assert_eq!(sim.grid().size(), 12);
        assert_eq!(sim.grid().population(), 4);

        config.size = 0;
        assert_eq!(Simulation::from_config(&config), Err(GridError::InvalidSize));
    }

    #[test]
    fn test_stats() {
        let sim = Simulation::new(Grid::from_alive(4, &[(0, 0), (1, 1)]).unwrap());
        let stats = SimulationStats::from_simulation(&sim);
        assert_eq!(stats.population, 2);
        assert_eq!(stats.generation, 0);
        assert!((stats.density - 0.125).abs() < 1e-12);
    }
}
