//! Life viewer - Animate a grid, one generation per frame.
//!
//! Built with `--features gui` this opens a window; otherwise the grid is
//! drawn in the terminal until Ctrl-C.

use std::path::PathBuf;

use toroidal_life::{schema::LifeConfig, snapshot::SnapshotError};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [config.json]", args[0]);
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => LifeConfig::from_json_file(PathBuf::from(path)).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }),
        None => LifeConfig::interactive(),
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "gui")]
fn run(config: &LifeConfig) -> Result<(), SnapshotError> {
    toroidal_life::snapshot::viewer::run_viewer(config)
}

#[cfg(not(feature = "gui"))]
fn run(config: &LifeConfig) -> Result<(), SnapshotError> {
    use std::time::Duration;
    use toroidal_life::snapshot::{IntervalScheduler, InteractiveDriver, StopFlag, TerminalSurface};

    let stop = StopFlag::new();
    stop.install_interrupt_handler()?;

    let mut driver = InteractiveDriver::from_config(config)?;
    let mut scheduler =
        IntervalScheduler::new(Duration::from_millis(config.frame_interval_ms), stop);
    let ticks = driver.run(&mut scheduler, &mut TerminalSurface::stdout())?;
    log::info!("Viewer stopped after {} frames", ticks);
    Ok(())
}
