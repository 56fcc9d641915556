//! SAVANNA - CLI Entry Point
//!
//! Predator/prey simulator on a grid.

use clap::{Parser, Subcommand};
use savanna::{benchmark, Config, World};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "savanna")]
#[command(version)]
#[command(about = "Grid-based predator/prey simulator with day/night and weather")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a new simulation
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Number of steps to simulate (defaults to a long run)
        #[arg(short, long, default_value = "4000")]
        steps: u64,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Quiet mode (minimal output)
        #[arg(short, long)]
        quiet: bool,

        /// Pause between steps, in milliseconds
        #[arg(short, long, default_value = "0")]
        delay: u64,

        /// Print the field after every reported step
        #[arg(long)]
        render: bool,

        /// Write the stats history (JSON) here when the run ends
        #[arg(long)]
        stats_output: Option<PathBuf>,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of steps
        #[arg(short, long, default_value = "1000")]
        steps: u64,

        /// Field side length
        #[arg(long, default_value = "120")]
        size: usize,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            steps,
            seed,
            quiet,
            delay,
            render,
            stats_output,
        } => run_simulation(config, steps, seed, quiet, delay, render, stats_output),

        Commands::Benchmark { steps, size } => {
            init_logging("info");
            run_benchmark(steps, size)
        }

        Commands::Init { output } => {
            init_logging("info");
            generate_config(output)
        }
    }
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run_simulation(
    config_path: PathBuf,
    steps: u64,
    seed: Option<u64>,
    quiet: bool,
    delay: u64,
    render: bool,
    stats_output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load or create config
    let config = if config_path.exists() {
        Config::from_file(&config_path)?
    } else {
        Config::default()
    };
    init_logging(&config.logging.log_level);

    if config_path.exists() {
        println!("Loaded config from: {:?}", config_path);
    } else {
        println!("Using default configuration");
    }

    // Create world
    let mut world = if let Some(s) = seed {
        println!("Using seed: {}", s);
        World::new_with_seed(config.clone(), s)
    } else {
        World::new(config.clone())
    };

    println!("Starting simulation");
    println!("  Field: {}x{}", world.depth(), world.width());
    println!("  Initial census: {}", world.census());
    println!("  Plants: {}", world.plants.len());
    println!("  Steps: {}", steps);
    println!();

    let start = Instant::now();
    let stats_interval = config.logging.stats_interval;
    let pause = Duration::from_millis(delay);

    let taken = world.simulate_with_callback(steps, |w| {
        if !quiet && w.step() % stats_interval == 0 {
            let snapshot = w.snapshot();
            println!("{}", snapshot.status_line());
            println!("{}", w.stats.summary());
            if render {
                println!("{}", snapshot.render());
            }
        }
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    });

    let elapsed = start.elapsed();

    println!();
    println!("=== Simulation Complete ===");
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("Steps: {} of {}", taken, steps);
    println!("Speed: {:.1} steps/s", taken as f64 / elapsed.as_secs_f64());
    println!("Final census: {}", world.census());
    println!("Weather: {}", world.current_weather());
    println!("Births: {}  Deaths: {}", world.stats.total_births, world.stats.total_deaths);
    if taken < steps {
        println!("Stopped early: the field is no longer viable");
    }

    if let Some(path) = stats_output {
        let path = path.to_string_lossy();
        world.stats_history.save(&path)?;
        println!("Stats history: {}", path);
    }

    Ok(())
}

fn run_benchmark(steps: u64, size: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== SAVANNA Benchmark ===");
    println!("Steps: {}", steps);
    println!("Field: {}x{}", size, size);
    println!();

    let result = benchmark(steps, size);
    println!("{}", result);

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
