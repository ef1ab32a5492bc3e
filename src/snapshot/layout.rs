//! On-disk naming for batch runs.
//!
//! ```text
//! output/
//!   01_pattern/
//!     01_generation/iteration_0050.png
//!     02_generation/iteration_0100.png
//!   02_pattern/
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::SnapshotError;

/// Name of the `n`th run directory, e.g. `03_pattern`.
pub fn run_dir_name(n: u32) -> String {
    format!("{:02}_pattern", n)
}

/// Name of the bucket directory holding `iteration`, e.g. `02_generation`.
pub fn bucket_dir_name(iteration: u64, save_interval: u64) -> String {
    format!("{:02}_generation", iteration / save_interval)
}

/// Snapshot file name, e.g. `iteration_0150.png`.
pub fn snapshot_file_name(iteration: u64) -> String {
    format!("iteration_{:04}.png", iteration)
}

/// Full path of the snapshot for `iteration` inside `run_dir`.
pub fn snapshot_path(run_dir: &Path, iteration: u64, save_interval: u64) -> PathBuf {
    run_dir
        .join(bucket_dir_name(iteration, save_interval))
        .join(snapshot_file_name(iteration))
}

/// Create and return the first unused `NN_pattern` directory under `root`.
///
/// Numbering starts at 01. Anything already present under a candidate name,
/// directory or not, makes that number unavailable.
pub fn allocate_run_dir(root: &Path) -> Result<PathBuf, SnapshotError> {
    fs::create_dir_all(root).map_err(|e| SnapshotError::io(root, e))?;

    let mut n = 1u32;
    loop {
        let candidate = root.join(run_dir_name(n));
        match fs::create_dir(&candidate) {
            Ok(()) => {
                log::info!("Allocated run directory {}", candidate.display());
                return Ok(candidate);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => n += 1,
            Err(e) => return Err(SnapshotError::io(candidate, e)),
        }
    }
}
