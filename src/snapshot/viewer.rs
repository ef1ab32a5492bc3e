//! Windowed viewer built on eframe/egui.
//!
//! egui owns the event loop here, so instead of a [`TickScheduler`] the app
//! checks the elapsed time on every repaint and ticks the driver when a frame
//! period has passed.
//!
//! [`TickScheduler`]: super::TickScheduler

use std::time::{Duration, Instant};

use egui::{Color32, Rect, Sense, Vec2};

use super::{FrameSurface, InteractiveDriver, SnapshotError};
use crate::compute::Grid;
use crate::schema::LifeConfig;

const CELL_SIZE: f32 = 8.0;

/// Open a window and animate the configured grid until it is closed.
pub fn run_viewer(config: &LifeConfig) -> Result<(), SnapshotError> {
    let driver = InteractiveDriver::from_config(config)?;
    let period = Duration::from_millis(config.frame_interval_ms);
    let side = config.size as f32 * CELL_SIZE;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([side + 16.0, side + 48.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeViewer::new(driver, period))),
    )
    .map_err(|e| SnapshotError::Viewer(e.to_string()))
}

/// Most recent frame handed to the window.
struct LatestFrame {
    grid: Grid,
    generation: u64,
}

impl FrameSurface for LatestFrame {
    fn present(&mut self, grid: &Grid, generation: u64) -> Result<(), SnapshotError> {
        self.grid = grid.clone();
        self.generation = generation;
        Ok(())
    }
}

struct LifeViewer {
    driver: InteractiveDriver,
    frame: LatestFrame,
    period: Duration,
    last_tick: Instant,
}

impl LifeViewer {
    fn new(driver: InteractiveDriver, period: Duration) -> Self {
        let sim = driver.simulation();
        let frame = LatestFrame {
            grid: sim.grid().clone(),
            generation: sim.generation(),
        };
        Self {
            driver,
            frame,
            period,
            last_tick: Instant::now(),
        }
    }
}

impl eframe::App for LifeViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.last_tick.elapsed() >= self.period {
            if let Err(e) = self.driver.tick(&mut self.frame) {
                log::error!("Tick failed: {}", e);
            }
            self.last_tick = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(format!(
                "Iteration {} | {} alive",
                self.frame.generation,
                self.frame.grid.population()
            ));

            let size = self.frame.grid.size();
            let total = Vec2::splat(size as f32 * CELL_SIZE);
            let (response, painter) = ui.allocate_painter(total, Sense::hover());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, Color32::WHITE);
            for (row, cells) in self.frame.grid.iter_rows().enumerate() {
                for (col, cell) in cells.iter().enumerate() {
                    if !cell.is_alive() {
                        continue;
                    }
                    let min = origin + Vec2::new(col as f32 * CELL_SIZE, row as f32 * CELL_SIZE);
                    painter.rect_filled(
                        Rect::from_min_size(min, Vec2::splat(CELL_SIZE)),
                        0.0,
                        Color32::BLACK,
                    );
                }
            }
        });

        ctx.request_repaint_after(self.period.saturating_sub(self.last_tick.elapsed()));
    }
}
