//! Batch driver: run until stopped, snapshot every `save_interval` generations.

use std::path::{Path, PathBuf};

use super::{PngSink, SnapshotError, SnapshotSink, StopFlag, allocate_run_dir};
use crate::compute::{Simulation, SimulationStats};
use crate::schema::LifeConfig;

/// Owns the simulation for a batch run and decides when to snapshot.
pub struct BatchDriver {
    config: LifeConfig,
    sim: Simulation,
    run_dir: PathBuf,
}

impl BatchDriver {
    /// Build a driver around an existing simulation and run directory.
    pub fn new(
        config: LifeConfig,
        sim: Simulation,
        run_dir: PathBuf,
    ) -> Result<Self, SnapshotError> {
        config.validate()?;
        Ok(Self {
            config,
            sim,
            run_dir,
        })
    }

    /// Validate `config`, seed the grid and allocate a fresh run directory.
    pub fn start(config: LifeConfig) -> Result<Self, SnapshotError> {
        config.validate()?;
        let sim = Simulation::from_config(&config)?;
        let run_dir = allocate_run_dir(&config.output_root)?;
        Self::new(config, sim, run_dir)
    }

    /// PNG sink writing into this run's directory.
    pub fn png_sink(&self) -> PngSink {
        PngSink::new(self.run_dir.clone(), &self.config)
    }

    pub fn run_dir(&self) -> &Path {
        &self.run_dir
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// Advance one generation and snapshot it if it is due.
    ///
    /// Returns true if a snapshot was written.
    pub fn tick<S: SnapshotSink + ?Sized>(&mut self, sink: &mut S) -> Result<bool, SnapshotError> {
        self.sim.step();
        let iteration = self.sim.generation();
        log::trace!(
            "generation {}: {} alive",
            iteration,
            self.sim.grid().population()
        );

        if iteration % self.config.save_interval != 0 {
            return Ok(false);
        }

        sink.write(self.sim.grid(), iteration)?;
        println!(
            "Pattern saved at iteration {} in {}",
            iteration,
            self.run_dir.display()
        );
        Ok(true)
    }

    /// Run until `stop` is raised.
    ///
    /// The flag is checked before every generation, so a stop never
    /// interrupts a snapshot in progress.
    pub fn run<S: SnapshotSink + ?Sized>(
        &mut self,
        stop: &StopFlag,
        sink: &mut S,
    ) -> Result<SimulationStats, SnapshotError> {
        log::info!(
            "Starting batch run: {}x{} grid, snapshot every {} generations, output {}",
            self.config.size,
            self.config.size,
            self.config.save_interval,
            self.run_dir.display()
        );

        while !stop.is_stopped() {
            self.tick(sink)?;
        }

        let stats = SimulationStats::from_simulation(&self.sim);
        println!("Simulation interrupted by user.");
        log::info!("Stopped at {}", stats);
        Ok(stats)
    }

    /// Run exactly `generations` generations.
    ///
    /// Returns the number of snapshots written.
    pub fn run_for<S: SnapshotSink + ?Sized>(
        &mut self,
        generations: u64,
        sink: &mut S,
    ) -> Result<u64, SnapshotError> {
        let mut snapshots = 0;
        for _ in 0..generations {
            if self.tick(sink)? {
                snapshots += 1;
            }
        }
        Ok(snapshots)
    }
}
