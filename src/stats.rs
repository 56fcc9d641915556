//! Statistics tracking for the simulation.

use crate::ecosystem::DeathTally;
use crate::ecology::Weather;
use crate::organism::{DeathCause, Organism};
use crate::species::Species;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Live organisms per species
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub counts: BTreeMap<Species, usize>,
}

impl Census {
    /// Count the live organisms in a population
    pub fn from_organisms(organisms: &[Organism]) -> Self {
        let mut counts = BTreeMap::new();
        for org in organisms.iter().filter(|o| o.is_alive()) {
            *counts.entry(org.species).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, species: Species) -> usize {
        self.counts.get(&species).copied().unwrap_or(0)
    }

    /// Total live organisms
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of species with at least one live member
    pub fn species_alive(&self) -> usize {
        self.counts.values().filter(|&&c| c > 0).count()
    }
}

impl std::fmt::Display for Census {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for species in Species::ALL {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", species.name(), self.count(species))?;
            first = false;
        }
        Ok(())
    }
}

/// Statistics snapshot for a simulation step
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Current simulation step
    pub step: u64,
    /// Total live organisms
    pub population: usize,
    /// Live organisms per species
    pub census: Census,
    /// Plants on the plant field
    pub plants: usize,
    /// Weather after this step
    pub weather: Option<Weather>,
    /// Births this step, including newborns eaten before the step ended
    /// (those also appear in `deaths`)
    pub births: usize,
    /// Deaths this step
    pub deaths: usize,
    /// Deaths this step, by cause
    pub deaths_by_cause: BTreeMap<DeathCause, usize>,
    /// Births since the run started
    pub total_births: u64,
    /// Deaths since the run started
    pub total_deaths: u64,
}

impl Stats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats from current simulation state
    pub fn update(
        &mut self,
        step: u64,
        organisms: &[Organism],
        plants: usize,
        weather: Weather,
        births: usize,
        deaths: &DeathTally,
    ) {
        self.step = step;
        self.census = Census::from_organisms(organisms);
        self.population = self.census.total();
        self.plants = plants;
        self.weather = Some(weather);
        self.births = births;
        self.deaths = deaths.values().sum();
        self.deaths_by_cause = deaths.clone();
        self.total_births += births as u64;
        self.total_deaths += self.deaths as u64;
    }

    /// Deaths of a given cause this step
    pub fn deaths_from(&self, cause: DeathCause) -> usize {
        self.deaths_by_cause.get(&cause).copied().unwrap_or(0)
    }

    /// Format stats as a one-line summary
    pub fn summary(&self) -> String {
        let weather = self.weather.map(|w| w.name()).unwrap_or("-");
        format!(
            "T:{:6} | Pop:{:6} | {} | Plants:{:6} | {:7} | +{} -{}",
            self.step,
            self.population,
            self.census,
            self.plants,
            weather,
            self.births,
            self.deaths
        )
    }
}

/// Historical statistics tracker
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatsHistory {
    /// All recorded stats snapshots
    pub snapshots: Vec<Stats>,
    /// Recording interval
    pub interval: u64,
}

impl StatsHistory {
    /// Create new history with recording interval
    pub fn new(interval: u64) -> Self {
        Self {
            snapshots: Vec::new(),
            interval,
        }
    }

    /// Whether a snapshot is due at `step`
    pub fn is_due(&self, step: u64) -> bool {
        self.interval > 0 && step % self.interval == 0
    }

    /// Record a stats snapshot
    pub fn record(&mut self, stats: Stats) {
        self.snapshots.push(stats);
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Get population over time
    pub fn population_series(&self) -> Vec<(u64, usize)> {
        self.snapshots
            .iter()
            .map(|s| (s.step, s.population))
            .collect()
    }

    /// Get one species' population over time
    pub fn species_series(&self, species: Species) -> Vec<(u64, usize)> {
        self.snapshots
            .iter()
            .map(|s| (s.step, s.census.count(species)))
            .collect()
    }

    /// Get plant count over time
    pub fn plant_series(&self) -> Vec<(u64, usize)> {
        self.snapshots.iter().map(|s| (s.step, s.plants)).collect()
    }

    /// Save history to file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)
    }

    /// Load history from file
    pub fn load(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Location;
    use crate::organism::Sex;

    fn organism(id: u64, species: Species) -> Organism {
        Organism::newborn(id, species, Sex::Female, Location::new(0, id as usize))
    }

    #[test]
    fn test_census_counts_live_only() {
        let mut organisms = vec![
            organism(0, Species::Zebra),
            organism(1, Species::Zebra),
            organism(2, Species::Lion),
        ];
        organisms[1].kill(DeathCause::Predation);

        let census = Census::from_organisms(&organisms);
        assert_eq!(census.count(Species::Zebra), 1);
        assert_eq!(census.count(Species::Lion), 1);
        assert_eq!(census.count(Species::Hyena), 0);
        assert_eq!(census.total(), 2);
        assert_eq!(census.species_alive(), 2);
    }

    #[test]
    fn test_stats_update() {
        let organisms = vec![organism(0, Species::Buffalo), organism(1, Species::Porcupine)];
        let mut deaths = DeathTally::new();
        deaths.insert(DeathCause::OldAge, 2);
        deaths.insert(DeathCause::Predation, 1);

        let mut stats = Stats::new();
        stats.update(10, &organisms, 40, Weather::Raining, 3, &deaths);

        assert_eq!(stats.population, 2);
        assert_eq!(stats.deaths, 3);
        assert_eq!(stats.deaths_from(DeathCause::OldAge), 2);
        assert_eq!(stats.deaths_from(DeathCause::Overcrowding), 0);
        assert_eq!(stats.total_births, 3);
        assert!(stats.summary().contains("Raining"));
    }

    #[test]
    fn test_stats_history() {
        let mut history = StatsHistory::new(10);

        for i in 0..5 {
            let mut stats = Stats::new();
            stats.step = i * 10;
            stats.population = (i + 1) as usize * 100;
            stats.census.counts.insert(Species::Zebra, i as usize);
            history.record(stats);
        }

        let series = history.population_series();
        assert_eq!(series.len(), 5);
        assert_eq!(series[0], (0, 100));
        assert_eq!(series[4], (40, 500));
        assert_eq!(history.species_series(Species::Zebra)[3], (30, 3));
        assert!(history.is_due(20));
        assert!(!history.is_due(25));
    }

    #[test]
    fn test_history_json_roundtrip() {
        let mut history = StatsHistory::new(5);
        let mut stats = Stats::new();
        stats.step = 5;
        stats.plants = 12;
        history.record(stats);

        let path = std::env::temp_dir().join("savanna_stats_history_test.json");
        let path = path.to_str().unwrap();
        history.save(path).unwrap();
        let loaded = StatsHistory::load(path).unwrap();
        std::fs::remove_file(path).ok();

        assert_eq!(loaded.plant_series(), vec![(5, 12)]);
    }
}
