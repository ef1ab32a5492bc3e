//! Configuration for Life runs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::Pattern;
use crate::snapshot::image_dimensions;

/// Side length used by batch runs.
pub const BATCH_GRID_SIZE: usize = 50;
/// Side length used by the interactive viewer.
pub const INTERACTIVE_GRID_SIZE: usize = 75;
/// Probability that a randomly seeded cell starts alive.
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.2;
/// Generations between two batch snapshots.
pub const DEFAULT_SAVE_INTERVAL: u64 = 50;
/// Root directory for batch snapshots.
pub const DEFAULT_OUTPUT_ROOT: &str = "output";
/// Interactive frame period in milliseconds.
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 200;
/// Side length of one cell in rendered images.
pub const DEFAULT_CELL_PIXELS: u32 = 8;

/// Top-level run configuration.
///
/// Every field has a default, so a JSON file only needs the fields it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Grid side length in cells.
    pub size: usize,
    /// Probability (0.0-1.0) that a random cell starts alive.
    pub alive_probability: f64,
    /// Snapshot every N generations (batch mode).
    pub save_interval: u64,
    /// Base directory for `NN_pattern` run directories.
    pub output_root: PathBuf,
    /// Random seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Pixels per cell edge in PNG output.
    pub cell_pixels: u32,
    /// Interactive tick period in milliseconds.
    pub frame_interval_ms: u64,
    /// Initial pattern.
    pub pattern: Pattern,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self::batch()
    }
}

impl LifeConfig {
    /// Defaults for batch (snapshot-to-disk) runs.
    pub fn batch() -> Self {
        Self {
            size: BATCH_GRID_SIZE,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            save_interval: DEFAULT_SAVE_INTERVAL,
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            seed: None,
            cell_pixels: DEFAULT_CELL_PIXELS,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            pattern: Pattern::Random,
        }
    }

    /// Defaults for interactive (live display) runs.
    pub fn interactive() -> Self {
        Self {
            size: INTERACTIVE_GRID_SIZE,
            ..Self::batch()
        }
    }

    /// Load a configuration from a JSON file.
    ///
    /// The result is validated before it is returned.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size.checked_mul(self.size).is_none() {
            return Err(ConfigError::InvalidSize);
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(ConfigError::InvalidProbability(self.alive_probability));
        }
        if self.save_interval == 0 {
            return Err(ConfigError::InvalidSaveInterval);
        }
        if self.cell_pixels == 0 {
            return Err(ConfigError::InvalidCellPixels);
        }
        if image_dimensions(self.size, self.cell_pixels).is_none() {
            return Err(ConfigError::ImageTooLarge {
                size: self.size,
                cell_pixels: self.cell_pixels,
            });
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::InvalidFrameInterval);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid size must be non-zero and size * size must fit in usize")]
    InvalidSize,
    #[error("Alive probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("Save interval must be non-zero")]
    InvalidSaveInterval,
    #[error("Cell pixel size must be non-zero")]
    InvalidCellPixels,
    #[error("Image of {size}x{size} cells at {cell_pixels} pixels per cell is too large")]
    ImageTooLarge { size: usize, cell_pixels: u32 },
    #[error("Frame interval must be non-zero")]
    InvalidFrameInterval,
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
