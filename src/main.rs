//! Life batch runner - Simulate until Ctrl-C, saving a PNG every N generations.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::PathBuf;

use toroidal_life::{
    schema::LifeConfig,
    snapshot::{BatchDriver, SnapshotError, StopFlag},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.get(1).is_some_and(|a| a == "--example") {
        print_example_config();
        return;
    }
    if args.len() > 2 || args.get(1).is_some_and(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: {} [config.json]", args[0]);
        eprintln!();
        eprintln!("Run Game of Life and save a snapshot every save_interval generations.");
        eprintln!("Without a config file the built-in defaults are used.");
        eprintln!("Use --example to print the default configuration.");
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => LifeConfig::from_json_file(PathBuf::from(path)).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }),
        None => LifeConfig::batch(),
    };

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: LifeConfig) -> Result<(), SnapshotError> {
    let stop = StopFlag::new();
    stop.install_interrupt_handler()?;

    let mut driver = BatchDriver::start(config)?;
    let mut sink = driver.png_sink();
    driver.run(&stop, &mut sink)?;
    Ok(())
}

fn print_example_config() {
    match serde_json::to_string_pretty(&LifeConfig::batch()) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
