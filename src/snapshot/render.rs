//! Monochrome PNG rendering of grids.
//!
//! Live cells are black and dead cells white. Each cell becomes a
//! `cell_pixels x cell_pixels` square. A white band above the grid carries
//! the image's label, e.g. `Iteration 150`.

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat, Luma};

use super::caption::{caption_height, draw_caption};
use super::{SnapshotError, snapshot_path};
use crate::compute::Grid;
use crate::schema::LifeConfig;

/// Pixel value for live cells.
pub const ALIVE_LUMA: u8 = 0;
/// Pixel value for dead cells.
pub const DEAD_LUMA: u8 = 255;

/// Destination for grids that are due for a snapshot.
pub trait SnapshotSink {
    /// Persist `grid` as the state after `iteration` generations.
    fn write(&mut self, grid: &Grid, iteration: u64) -> Result<(), SnapshotError>;
}

/// Label drawn above the snapshot for `iteration`.
pub fn iteration_label(iteration: u64) -> String {
    format!("Iteration {}", iteration)
}

/// `(width, height)` of the rendered image, caption band included.
///
/// `None` if either side does not fit in `u32`.
pub fn image_dimensions(size: usize, cell_pixels: u32) -> Option<(u32, u32)> {
    let side = u32::try_from(size).ok()?.checked_mul(cell_pixels)?;
    let height = side.checked_add(caption_height(cell_pixels))?;
    Some((side, height))
}

/// Render a grid to a grayscale image with `label` in the caption band.
pub fn render_image(
    grid: &Grid,
    cell_pixels: u32,
    label: &str,
) -> Result<GrayImage, SnapshotError> {
    let (width, height) =
        image_dimensions(grid.size(), cell_pixels).ok_or(SnapshotError::ImageTooLarge {
            size: grid.size(),
            cell_pixels,
        })?;
    let band = caption_height(cell_pixels);

    let mut image = GrayImage::from_fn(width, height, |x, y| {
        if y < band {
            return Luma([DEAD_LUMA]);
        }
        let row = ((y - band) / cell_pixels) as usize;
        let col = (x / cell_pixels) as usize;
        if grid.get(row, col).is_alive() {
            Luma([ALIVE_LUMA])
        } else {
            Luma([DEAD_LUMA])
        }
    });
    draw_caption(&mut image, label, cell_pixels, ALIVE_LUMA);
    Ok(image)
}

/// Render `grid` with `label` and encode it to `path` as PNG.
pub fn save_png(
    grid: &Grid,
    cell_pixels: u32,
    label: &str,
    path: &Path,
) -> Result<(), SnapshotError> {
    let image = render_image(grid, cell_pixels, label)?;
    write_png(&image, path)
}

/// Encode `image` to `path`.
///
/// The image is written to a hidden temporary file next to `path` and renamed
/// into place, so `path` never holds a partial image. The temporary file is
/// removed if encoding fails.
fn write_png(image: &GrayImage, path: &Path) -> Result<(), SnapshotError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(".{}.tmp", file_name));

    if let Err(source) = image.save_with_format(&tmp, ImageFormat::Png) {
        if let Err(e) = fs::remove_file(&tmp) {
            log::trace!("No temporary file to remove at {}: {}", tmp.display(), e);
        }
        return Err(SnapshotError::Image {
            path: path.to_path_buf(),
            source,
        });
    }
    fs::rename(&tmp, path).map_err(|e| SnapshotError::io(path, e))?;
    Ok(())
}

/// Sink that writes `GG_generation/iteration_NNNN.png` files into a run
/// directory.
#[derive(Debug, Clone)]
pub struct PngSink {
    run_dir: PathBuf,
    save_interval: u64,
    cell_pixels: u32,
    written: u64,
}

impl PngSink {
    pub fn new(run_dir: PathBuf, config: &LifeConfig) -> Self {
        Self {
            run_dir,
            save_interval: config.save_interval,
            cell_pixels: config.cell_pixels,
            written: 0,
        }
    }

    pub fn run_dir(&self) -> &Path {
        &self.run_dir
    }

    /// Number of images written so far.
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl SnapshotSink for PngSink {
    fn write(&mut self, grid: &Grid, iteration: u64) -> Result<(), SnapshotError> {
        let path = snapshot_path(&self.run_dir, iteration, self.save_interval);
        if let Some(bucket) = path.parent() {
            fs::create_dir_all(bucket).map_err(|e| SnapshotError::io(bucket, e))?;
        }

        save_png(grid, self.cell_pixels, &iteration_label(iteration), &path)?;
        self.written += 1;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_colors_and_scale() {
        let grid = Grid::from_alive(3, &[(0, 1)]).unwrap();
        let image = render_image(&grid, 4, "").unwrap();
        // Scale 1 caption band: 11 rows.
        let band = 11;
        assert_eq!(image.dimensions(), (12, 12 + band));
        // (row 0, col 1) covers x in 4..8, y in band..band + 4.
        assert_eq!(image.get_pixel(5, band + 2)[0], ALIVE_LUMA);
        assert_eq!(image.get_pixel(7, band + 3)[0], ALIVE_LUMA);
        assert_eq!(image.get_pixel(8, band + 3)[0], DEAD_LUMA);
        assert_eq!(image.get_pixel(5, band + 4)[0], DEAD_LUMA);
        assert_eq!(image.get_pixel(0, band)[0], DEAD_LUMA);
        // An empty label leaves the band white.
        assert!((0..band).all(|y| (0..12).all(|x| image.get_pixel(x, y)[0] == DEAD_LUMA)));
    }

    #[test]
    fn test_caption_band_carries_label() {
        let grid = Grid::new(50).unwrap();
        let image = render_image(&grid, 8, &iteration_label(150)).unwrap();
        let band = caption_height(8);
        assert_eq!(image.dimensions(), (400, 400 + band));

        let inked = (0..band)
            .flat_map(|y| (0..400).map(move |x| (x, y)))
            .filter(|&(x, y)| image.get_pixel(x, y)[0] == ALIVE_LUMA)
            .count();
        assert!(inked > 0);
        // Top-left pixel of the 'I' at scale 2, after 4 pixels of padding.
        assert_eq!(image.get_pixel(4, 4)[0], ALIVE_LUMA);
        // Dead grid below the band.
        assert!((band..400 + band).all(|y| image.get_pixel(0, y)[0] == DEAD_LUMA));

        let other = render_image(&grid, 8, &iteration_label(200)).unwrap();
        assert_ne!(image, other);
    }

    #[test]
    fn test_image_dimensions_overflow() {
        assert_eq!(image_dimensions(50, 8), Some((400, 422)));
        assert_eq!(image_dimensions(50, 100_000_000), None);
        assert_eq!(image_dimensions(usize::MAX, 1), None);
        // Side fits but the caption band pushes the height over.
        assert_eq!(image_dimensions(1, u32::MAX), None);

        let err = render_image(&Grid::new(50).unwrap(), 100_000_000, "").unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::ImageTooLarge {
                size: 50,
                cell_pixels: 100_000_000
            }
        ));
    }

    #[test]
    fn test_save_png_readable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.png");
        let grid = Grid::from_alive(5, &[(2, 1), (2, 2), (2, 3)]).unwrap();

        save_png(&grid, 2, "Iteration 3", &path).unwrap();

        let decoded = image::open(&path).unwrap().to_luma8();
        assert_eq!(decoded, render_image(&grid, 2, "Iteration 3").unwrap());
        // Temporary file is gone.
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_failed_encode_removes_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.png");

        // PNG cannot encode a zero-sized image.
        let err = write_png(&GrayImage::new(0, 0), &path).unwrap_err();
        assert!(matches!(err, SnapshotError::Image { .. }));

        assert!(!path.exists());
        assert!(!dir.path().join(".empty.png.tmp").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_sink_layout() {
        let dir = tempdir().unwrap();
        let run_dir = dir.path().join("01_pattern");
        fs::create_dir(&run_dir).unwrap();

        let config = LifeConfig::batch();
        let mut sink = PngSink::new(run_dir.clone(), &config);
        let grid = Grid::new(4).unwrap();
        sink.write(&grid, 50).unwrap();
        sink.write(&grid, 100).unwrap();

        for iteration in [50, 100] {
            assert!(snapshot_path(&run_dir, iteration, config.save_interval).is_file());
        }
        assert!(run_dir.join("01_generation/iteration_0050.png").is_file());
        assert!(run_dir.join("02_generation/iteration_0100.png").is_file());
        assert_eq!(sink.written(), 2);

        let decoded = image::open(run_dir.join("02_generation/iteration_0100.png"))
            .unwrap()
            .to_luma8();
        assert_eq!(decoded, render_image(&grid, 8, "Iteration 100").unwrap());
    }

    #[test]
    fn test_sink_reports_io_failure() {
        let dir = tempdir().unwrap();
        // A file where the run directory should be.
        let run_dir = dir.path().join("blocked");
        fs::write(&run_dir, b"").unwrap();

        let mut sink = PngSink::new(run_dir, &LifeConfig::batch());
        let err = sink.write(&Grid::new(2).unwrap(), 50).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }
}
