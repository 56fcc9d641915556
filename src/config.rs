//! Configuration system for the savanna simulation.
//!
//! Supports YAML configuration files with sensible defaults.

use crate::ecology::WeatherConfig;
use crate::species::Species;
use crate::viability::ViabilityRule;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Field depth used when the configured one is unusable
pub const DEFAULT_DEPTH: usize = 240;
/// Field width used when the configured one is unusable
pub const DEFAULT_WIDTH: usize = 240;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub world: WorldConfig,
    pub population: PopulationConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Field configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Number of rows
    pub depth: usize,
    /// Number of columns
    pub width: usize,
    /// Randomize neighbor scan order with the shared generator
    #[serde(default = "default_true")]
    pub shuffle_adjacency: bool,
    /// When a run is considered over
    #[serde(default)]
    pub viability: ViabilityRule,
}

/// How the initial population is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedingMode {
    /// Test each species in order with a fresh draw; the first hit claims the
    /// cell. Later species end up rarer than their nominal probability.
    Sequential,
    /// One draw per cell against the cumulative probability table
    Weighted,
}

/// Chance that a cell starts with a given species
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreationChance {
    pub species: Species,
    pub probability: f64,
}

/// Initial population configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationConfig {
    #[serde(default = "default_seeding")]
    pub seeding: SeedingMode,
    /// Species creation chances, in the order they are tested
    pub creation: Vec<CreationChance>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Steps between stats history snapshots
    pub stats_interval: u64,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

fn default_true() -> bool {
    true
}

fn default_seeding() -> SeedingMode {
    SeedingMode::Sequential
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            population: PopulationConfig::default(),
            weather: WeatherConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            width: DEFAULT_WIDTH,
            shuffle_adjacency: true,
            viability: ViabilityRule::default(),
        }
    }
}

impl Default for PopulationConfig {
    fn default() -> Self {
        let chance = |species, probability| CreationChance {
            species,
            probability,
        };
        Self {
            seeding: SeedingMode::Sequential,
            creation: vec![
                chance(Species::Lion, 0.01),
                chance(Species::Hyena, 0.02),
                chance(Species::Zebra, 0.10),
                chance(Species::Porcupine, 0.30),
                chance(Species::Buffalo, 0.40),
            ],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stats_interval: 50,
            log_level: "info".to_string(),
        }
    }
}

/// Errors from loading or validating a configuration
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Yaml(e) => write!(f, "YAML error: {}", e),
            Self::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Zero field dimensions are accepted here; the world replaces them with
    /// the defaults when it is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        let mut seen = Vec::new();
        for entry in &self.population.creation {
            if !(0.0..=1.0).contains(&entry.probability) {
                return invalid(format!(
                    "creation probability for {} must be within 0..=1",
                    entry.species
                ));
            }
            if seen.contains(&entry.species) {
                return invalid(format!("{} listed twice in creation table", entry.species));
            }
            seen.push(entry.species);
        }
        if self.population.seeding == SeedingMode::Weighted {
            let total: f64 = self.population.creation.iter().map(|c| c.probability).sum();
            if total > 1.0 {
                return invalid(format!("weighted creation probabilities sum to {} > 1", total));
            }
        }

        for (name, chance) in [
            ("rain_chance", self.weather.rain_chance),
            ("drought_chance", self.weather.drought_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return invalid(format!("{} must be within 0..=1", name));
            }
        }
        if self.weather.interval == 0 {
            return invalid("weather interval must be > 0".to_string());
        }
        if self.logging.stats_interval == 0 {
            return invalid("stats_interval must be > 0".to_string());
        }
        Ok(())
    }

    /// Field dimensions, falling back to the defaults when either is zero
    pub fn dimensions(&self) -> (usize, usize) {
        if self.world.depth == 0 || self.world.width == 0 {
            log::warn!(
                "Field dimensions {}x{} must be greater than zero, using {}x{}",
                self.world.depth,
                self.world.width,
                DEFAULT_DEPTH,
                DEFAULT_WIDTH
            );
            (DEFAULT_DEPTH, DEFAULT_WIDTH)
        } else {
            (self.world.depth, self.world.width)
        }
    }
}
