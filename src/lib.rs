//! # SAVANNA
//!
//! Grid-based predator/prey simulator with a day/night cycle and
//! weather-driven plant life.
//!
//! ## Features
//!
//! - **Five species**: lions and hyenas hunt zebras, porcupines and buffalo
//! - **Day and night**: diurnal prey only move during daylight hours
//! - **Weather**: rain regrows plants, drought withers them
//! - **Configurable**: YAML configuration files
//! - **Reproducible**: Seeded random number generation, replayable resets
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use savanna::{World, Config};
//!
//! // Create world with default config
//! let config = Config::default();
//! let mut world = World::new(config);
//!
//! // Run simulation
//! world.simulate(500);
//!
//! // Check results
//! println!("Step {}: {}", world.step(), world.census());
//! ```
//!
//! ## Observing a run
//!
//! ```rust
//! use savanna::{World, Config};
//!
//! let mut config = Config::default();
//! config.world.depth = 20;
//! config.world.width = 20;
//!
//! let mut world = World::new_with_seed(config, 42);
//! world.simulate_with_callback(10, |w| {
//!     let snapshot = w.snapshot();
//!     println!("{}", snapshot.status_line());
//! });
//! ```

pub mod config;
pub mod ecology;
pub mod ecosystem;
pub mod grid;
pub mod organism;
pub mod snapshot;
pub mod species;
pub mod stats;
pub mod viability;
pub mod world;

// Re-export main types
pub use config::Config;
pub use grid::{Field, Location};
pub use organism::Organism;
pub use snapshot::Snapshot;
pub use species::Species;
pub use viability::{Viability, ViabilityRule};
pub use world::World;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a quick benchmark on a square field of side `size`
pub fn benchmark(steps: u64, size: usize) -> BenchmarkResult {
    use std::time::Instant;

    let mut config = Config::default();
    config.world.depth = size;
    config.world.width = size;

    let mut world = World::new(config);
    world.set_viability(ViabilityRule::NonExtinct);
    let initial_population = world.population();

    let start = Instant::now();
    let taken = world.simulate(steps);
    let elapsed = start.elapsed();

    BenchmarkResult {
        steps: taken,
        size,
        initial_population,
        final_population: world.population(),
        elapsed_secs: elapsed.as_secs_f64(),
        steps_per_second: taken as f64 / elapsed.as_secs_f64(),
    }
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub steps: u64,
    pub size: usize,
    pub initial_population: usize,
    pub final_population: usize,
    pub elapsed_secs: f64,
    pub steps_per_second: f64,
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f, "Field: {}x{}", self.size, self.size)?;
        writeln!(f, "Steps: {}", self.steps)?;
        writeln!(f, "Population: {} -> {}", self.initial_population, self.final_population)?;
        writeln!(f, "Time: {:.3}s", self.elapsed_secs)?;
        writeln!(f, "Speed: {:.1} steps/s", self.steps_per_second)?;
        Ok(())
    }
}
