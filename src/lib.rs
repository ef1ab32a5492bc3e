//! Conway's Game of Life on a toroidal grid.
//!
//! This crate simulates classic Life (B3/S23) on a square grid whose edges
//! wrap around, and persists the evolving grid either as periodic PNG
//! snapshots or as a live animation.
//!
//! # Architecture
//!
//! - `schema`: Run configuration and initial patterns
//! - `compute`: Grid representation, neighbor counting and the update rule
//! - `snapshot`: Batch and interactive drivers, PNG output, stop handling
//!
//! # Example
//!
//! ```rust,no_run
//! use toroidal_life::{
//!     schema::LifeConfig,
//!     snapshot::{BatchDriver, StopFlag},
//! };
//!
//! let config = LifeConfig::batch();
//! let mut driver = BatchDriver::start(config).expect("run directory");
//! let mut sink = driver.png_sink();
//!
//! let stop = StopFlag::new();
//! stop.install_interrupt_handler().expect("signal handler");
//! let stats = driver.run(&stop, &mut sink).expect("snapshot failed");
//! println!("{}", stats);
//! ```

pub mod compute;
pub mod schema;
pub mod snapshot;

// Re-export commonly used types
pub use compute::{Cell, Grid, Simulation, SimulationStats, count_neighbors, random_grid, update};
pub use schema::{LifeConfig, Pattern};
pub use snapshot::{BatchDriver, InteractiveDriver, SnapshotError, StopFlag};
