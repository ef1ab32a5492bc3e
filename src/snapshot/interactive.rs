//! Interactive driver: one generation per tick, every generation displayed.
//!
//! The driver does not own an event loop. A [`TickScheduler`] decides when to
//! call the tick callback and when to stop; a [`FrameSurface`] shows the
//! result.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use super::{SnapshotError, StopFlag};
use crate::compute::{Cell, Grid, Simulation};
use crate::schema::LifeConfig;

/// Return value of a tick callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Something that displays a grid as soon as it is produced.
pub trait FrameSurface {
    fn present(&mut self, grid: &Grid, generation: u64) -> Result<(), SnapshotError>;
}

/// Invokes a tick callback on a cadence until told to stop.
pub trait TickScheduler {
    /// Run `tick` repeatedly. Returns the number of ticks performed.
    fn run(&mut self, tick: &mut dyn FnMut() -> TickControl) -> Result<u64, SnapshotError>;
}

/// Fixed-period scheduler on the current thread.
///
/// Stops when the callback returns [`TickControl::Stop`], when the stop flag
/// is raised, or when the optional frame budget is used up.
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    period: Duration,
    stop: StopFlag,
    frame_budget: Option<u64>,
}

impl IntervalScheduler {
    pub fn new(period: Duration, stop: StopFlag) -> Self {
        Self {
            period,
            stop,
            frame_budget: None,
        }
    }

    /// Limit the number of ticks.
    pub fn with_frame_budget(mut self, frames: u64) -> Self {
        self.frame_budget = Some(frames);
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickScheduler for IntervalScheduler {
    fn run(&mut self, tick: &mut dyn FnMut() -> TickControl) -> Result<u64, SnapshotError> {
        let mut ticks = 0u64;

        loop {
            if self.stop.is_stopped() {
                break;
            }
            if self.frame_budget.is_some_and(|budget| ticks >= budget) {
                break;
            }

            let started = Instant::now();
            let control = tick();
            ticks += 1;
            if control == TickControl::Stop {
                break;
            }

            let elapsed = started.elapsed();
            if elapsed < self.period {
                thread::sleep(self.period - elapsed);
            }
        }

        Ok(ticks)
    }
}

/// Owns the simulation for an interactive run.
pub struct InteractiveDriver {
    sim: Simulation,
}

impl InteractiveDriver {
    pub fn new(sim: Simulation) -> Self {
        Self { sim }
    }

    /// Validate `config` and seed the grid.
    pub fn from_config(config: &LifeConfig) -> Result<Self, SnapshotError> {
        config.validate()?;
        Ok(Self::new(Simulation::from_config(config)?))
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// Advance exactly one generation and present it.
    pub fn tick<F: FrameSurface + ?Sized>(&mut self, surface: &mut F) -> Result<(), SnapshotError> {
        self.sim.step();
        surface.present(self.sim.grid(), self.sim.generation())
    }

    /// Show the initial grid, then tick under `scheduler` until it stops.
    ///
    /// A surface error stops the scheduler and is returned.
    pub fn run<S, F>(&mut self, scheduler: &mut S, surface: &mut F) -> Result<u64, SnapshotError>
    where
        S: TickScheduler + ?Sized,
        F: FrameSurface + ?Sized,
    {
        surface.present(self.sim.grid(), self.sim.generation())?;

        let mut failure = None;
        let ticks = scheduler.run(&mut || match self.tick(&mut *surface) {
            Ok(()) => TickControl::Continue,
            Err(e) => {
                failure = Some(e);
                TickControl::Stop
            }
        })?;

        match failure {
            Some(e) => Err(e),
            None => Ok(ticks),
        }
    }
}

/// Text surface that redraws the whole grid in place using ANSI escapes.
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSurface for TerminalSurface<W> {
    fn present(&mut self, grid: &Grid, generation: u64) -> Result<(), SnapshotError> {
        let mut frame = String::with_capacity((grid.size() * 2 + 1) * grid.size() + 64);
        // Clear screen, cursor home.
        frame.push_str("\x1b[2J\x1b[H");
        for row in grid.iter_rows() {
            for &cell in row {
                frame.push_str(match cell {
                    Cell::Alive => "██",
                    Cell::Dead => "  ",
                });
            }
            frame.push('\n');
        }
        frame.push_str(&format!(
            "Iteration {} | {} alive\n",
            generation,
            grid.population()
        ));

        self.out
            .write_all(frame.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(SnapshotError::Display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::update;

    #[derive(Default)]
    struct RecordingSurface {
        frames: Vec<(u64, Grid)>,
    }

    impl FrameSurface for RecordingSurface {
        fn present(&mut self, grid: &Grid, generation: u64) -> Result<(), SnapshotError> {
            self.frames.push((generation, grid.clone()));
            Ok(())
        }
    }

    struct BrokenSurface;

    impl FrameSurface for BrokenSurface {
        fn present(&mut self, _grid: &Grid, generation: u64) -> Result<(), SnapshotError> {
            if generation >= 2 {
                return Err(SnapshotError::Display(io::Error::other("window closed")));
            }
            Ok(())
        }
    }

    fn blinker() -> Grid {
        Grid::from_alive(5, &[(2, 1), (2, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn test_tick_steps_once_and_presents() {
        let mut driver = InteractiveDriver::new(Simulation::new(blinker()));
        let mut surface = RecordingSurface::default();

        driver.tick(&mut surface).unwrap();
        driver.tick(&mut surface).unwrap();

        assert_eq!(surface.frames.len(), 2);
        assert_eq!(surface.frames[0].0, 1);
        assert_eq!(surface.frames[0].1, update(&blinker()));
        assert_eq!(surface.frames[1], (2, blinker()));
    }

    #[test]
    fn test_run_with_frame_budget() {
        let mut driver = InteractiveDriver::new(Simulation::new(blinker()));
        let mut scheduler =
            IntervalScheduler::new(Duration::ZERO, StopFlag::new()).with_frame_budget(5);
        let mut surface = RecordingSurface::default();

        let ticks = driver.run(&mut scheduler, &mut surface).unwrap();

        assert_eq!(ticks, 5);
        // Initial frame plus one per tick.
        let generations: Vec<u64> = surface.frames.iter().map(|(g, _)| *g).collect();
        assert_eq!(generations, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(driver.simulation().generation(), 5);
    }

    #[test]
    fn test_scheduler_honors_stop_flag() {
        let stop = StopFlag::new();
        let mut scheduler = IntervalScheduler::new(Duration::ZERO, stop.clone());
        let mut count = 0;
        let ticks = scheduler
            .run(&mut || {
                count += 1;
                if count == 3 {
                    stop.stop();
                }
                TickControl::Continue
            })
            .unwrap();
        assert_eq!(ticks, 3);
    }

    #[test]
    fn test_scheduler_callback_stop() {
        let mut scheduler = IntervalScheduler::new(Duration::ZERO, StopFlag::new());
        let ticks = scheduler.run(&mut || TickControl::Stop).unwrap();
        assert_eq!(ticks, 1);
    }

    #[test]
    fn test_scheduler_keeps_period() {
        let period = Duration::from_millis(10);
        let mut scheduler = IntervalScheduler::new(period, StopFlag::new()).with_frame_budget(3);
        let started = Instant::now();
        scheduler.run(&mut || TickControl::Continue).unwrap();
        assert!(started.elapsed() >= period * 3);
    }

    #[test]
    fn test_surface_error_stops_run() {
        let mut driver = InteractiveDriver::new(Simulation::new(blinker()));
        let mut scheduler =
            IntervalScheduler::new(Duration::ZERO, StopFlag::new()).with_frame_budget(100);

        let err = driver.run(&mut scheduler, &mut BrokenSurface).unwrap_err();
        assert!(matches!(err, SnapshotError::Display(_)));
        assert_eq!(driver.simulation().generation(), 2);
    }

    #[test]
    fn test_terminal_surface_output() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.present(&blinker(), 7).unwrap();
        let text = String::from_utf8(surface.into_inner()).unwrap();

        assert!(text.starts_with("\x1b[2J\x1b[H"));
        assert!(text.contains("  ██████  \n"));
        assert!(text.ends_with("Iteration 7 | 3 alive\n"));
    }

    #[test]
    fn test_from_config_interactive_size() {
        let mut config = LifeConfig::interactive();
        config.seed = Some(1);
        let driver = InteractiveDriver::from_config(&config).unwrap();
        assert_eq!(driver.simulation().grid().size(), 75);
    }
}
