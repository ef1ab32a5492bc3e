//! Snapshot module - Generation loops and the sinks they feed.
//!
//! Two drivers share the same owned [`Simulation`](crate::compute::Simulation):
//!
//! - [`BatchDriver`]: steps until stopped and writes a PNG every
//!   `save_interval` generations under `output/NN_pattern/GG_generation/`.
//! - [`InteractiveDriver`]: steps once per scheduler tick and presents every
//!   generation on a [`FrameSurface`].

mod batch;
mod caption;
mod interactive;
mod layout;
mod render;
mod stop;

#[cfg(feature = "gui")]
pub mod viewer;

use std::path::PathBuf;

use crate::compute::GridError;
use crate::schema::ConfigError;

pub use batch::*;
pub use interactive::*;
pub use layout::*;
pub use render::*;
pub use stop::*;

/// Errors raised while driving a run or writing its output.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Image of {size}x{size} cells at {cell_pixels} pixels per cell is too large")]
    ImageTooLarge { size: usize, cell_pixels: u32 },
    #[error("Display error: {0}")]
    Display(#[source] std::io::Error),
    #[error("Viewer error: {0}")]
    Viewer(String),
    #[error("Failed to install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

impl SnapshotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapshotError::Io {
            path: path.into(),
            source,
        }
    }
}
