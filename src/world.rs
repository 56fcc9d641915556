//! World simulation engine - main simulation loop.

use crate::config::{Config, SeedingMode};
use crate::ecology::{PlantPopulation, TimeOfDay, Weather, WeatherSystem};
use crate::ecosystem::{DeathTally, Ecosystem, Slot};
use crate::grid::Location;
use crate::organism::Sex;
use crate::snapshot::Snapshot;
use crate::species::Species;
use crate::stats::{Census, Stats, StatsHistory};
use crate::viability::Viability;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Steps run by [`World::run_long_simulation`]
pub const LONG_RUN_STEPS: u64 = 4000;

/// Where a world is in its life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Built without a population
    Uninitialized,
    /// Freshly populated, no step taken yet
    Populated,
    /// At least one step taken
    Stepping,
    /// Stopped because the viability check failed
    Terminated,
}

/// The simulation world
pub struct World<R = ChaCha8Rng> {
    // Animals and their field
    pub ecosystem: Ecosystem,

    // Environment
    pub plants: PlantPopulation,
    pub weather: WeatherSystem,

    // State
    step: u64,
    state: RunState,
    time_of_day: TimeOfDay,

    // Configuration
    pub config: Config,
    depth: usize,
    width: usize,
    viability: Box<dyn Viability>,

    // Statistics
    pub stats: Stats,
    pub stats_history: StatsHistory,

    // Shared random number generator, and the state it started from
    rng: R,
    initial_rng: R,
    seed: Option<u64>,
}

impl World<ChaCha8Rng> {
    /// Create a new world with the given configuration
    pub fn new(config: Config) -> Self {
        let seed = rand::thread_rng().gen();
        Self::new_with_seed(config, seed)
    }

    /// Create a new world with a specific seed for reproducibility
    pub fn new_with_seed(config: Config, seed: u64) -> Self {
        let mut world = Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed));
        world.seed = Some(seed);
        world
    }
}

impl<R: Rng + Clone> World<R> {
    /// Create and populate a world driven by `rng`
    pub fn with_rng(config: Config, rng: R) -> Self {
        let mut world = Self::unpopulated(config, rng);
        world.reset();
        world
    }

    /// Create an empty world; organisms can be added with [`World::spawn`]
    pub fn unpopulated(config: Config, rng: R) -> Self {
        let (depth, width) = config.dimensions();
        let viability = Box::new(config.world.viability);

        Self {
            ecosystem: Ecosystem::new(depth, width, config.world.shuffle_adjacency),
            plants: PlantPopulation::new(depth, width),
            weather: WeatherSystem::new(&config.weather),
            step: 0,
            state: RunState::Uninitialized,
            time_of_day: TimeOfDay::from_step(0),
            depth,
            width,
            viability,
            stats: Stats::new(),
            stats_history: StatsHistory::new(config.logging.stats_interval),
            config,
            initial_rng: rng.clone(),
            rng,
            seed: None,
        }
    }

    /// Replace the viability check
    pub fn set_viability<V: Viability + 'static>(&mut self, viability: V) {
        self.viability = Box::new(viability);
    }

    /// Start over: rewind the generator, repopulate and clear counters.
    ///
    /// The generator returns to the state it had when the world was built,
    /// so a reset replays the same run. Build a new `World` for a fresh seed.
    pub fn reset(&mut self) {
        self.rng = self.initial_rng.clone();
        self.step = 0;
        self.time_of_day = TimeOfDay::from_step(0);
        self.weather.reset();
        self.stats = Stats::new();
        self.stats_history.clear();

        self.populate();
        self.state = RunState::Populated;

        log::info!(
            "World reset: {}x{} field, population={}, plants={}",
            self.depth,
            self.width,
            self.ecosystem.population(),
            self.plants.len()
        );
    }

    /// Fill the field: at most one animal and exactly one plant per cell
    fn populate(&mut self) {
        self.ecosystem.clear();
        self.plants.clear();

        for row in 0..self.depth {
            for col in 0..self.width {
                let loc = Location::new(row, col);
                if let Some(species) = self.draw_species() {
                    self.ecosystem.spawn(species, true, loc, &mut self.rng);
                }
                self.plants.plant(loc);
            }
        }
    }

    /// Pick the species (if any) that starts in a cell
    fn draw_species(&mut self) -> Option<Species> {
        let table = &self.config.population.creation;
        match self.config.population.seeding {
            SeedingMode::Sequential => table
                .iter()
                .find(|entry| self.rng.gen::<f64>() <= entry.probability)
                .map(|entry| entry.species),
            SeedingMode::Weighted => {
                let draw = self.rng.gen::<f64>();
                let mut cumulative = 0.0;
                table
                    .iter()
                    .find(|entry| {
                        cumulative += entry.probability;
                        draw < cumulative
                    })
                    .map(|entry| entry.species)
            }
        }
    }

    /// Place an organism of known sex, for scripted scenarios
    pub fn spawn(&mut self, species: Species, sex: Sex, loc: Location) -> Slot {
        self.ecosystem.spawn_with_sex(species, sex, loc)
    }

    /// Advance the simulation by exactly one step
    pub fn simulate_one_step(&mut self) {
        self.step += 1;
        self.time_of_day = TimeOfDay::from_step(self.step);

        if let Some(weather) = self.weather.update(self.step, &mut self.rng) {
            log::debug!("Step {}: weather is now {}", self.step, weather);
            self.plants.respond_to(weather);
        }

        // Organisms born this step sit past `count` and wait for the next one
        let count = self.ecosystem.len();
        let mut newborns = Vec::new();
        for slot in 0..count {
            if !self.ecosystem.organism(slot).is_alive() {
                continue;
            }
            self.ecosystem.act(slot, self.step, &mut self.rng);
            self.ecosystem.reproduce(slot, &mut self.rng, &mut newborns);
        }

        let deaths = self.ecosystem.remove_dead();
        self.update_stats(newborns.len(), &deaths);
        self.state = RunState::Stepping;

        log::debug!("{}", self.stats.summary());
    }

    fn update_stats(&mut self, births: usize, deaths: &DeathTally) {
        self.stats.update(
            self.step,
            self.ecosystem.organisms(),
            self.plants.len(),
            self.weather.current,
            births,
            deaths,
        );

        if self.stats_history.is_due(self.step) {
            self.stats_history.record(self.stats.clone());
        }
    }

    /// Run up to `steps` steps, stopping early once the world is no longer
    /// viable. Returns the number of steps taken.
    pub fn simulate(&mut self, steps: u64) -> u64 {
        self.simulate_with_callback(steps, |_| {})
    }

    /// Run a long simulation of [`LONG_RUN_STEPS`] steps
    pub fn run_long_simulation(&mut self) -> u64 {
        self.simulate(LONG_RUN_STEPS)
    }

    /// Run like [`World::simulate`], calling `callback` after every step
    pub fn simulate_with_callback<F>(&mut self, steps: u64, mut callback: F) -> u64
    where
        F: FnMut(&World<R>),
    {
        let mut taken = 0;
        while taken < steps {
            if !self.is_viable() {
                self.state = RunState::Terminated;
                log::info!(
                    "Run no longer viable at step {} ({})",
                    self.step,
                    self.census()
                );
                break;
            }
            self.simulate_one_step();
            taken += 1;
            callback(self);
        }
        taken
    }

    /// Ask the viability check whether the run should continue
    pub fn is_viable(&self) -> bool {
        self.viability.is_viable(&self.census())
    }

    /// Observation record for the current step
    pub fn snapshot(&self) -> Snapshot {
        let field = self.ecosystem.field();
        let cells = field
            .locations()
            .map(|loc| self.ecosystem.organism_at(loc).map(|o| o.species))
            .collect();
        let plant_field = self.plants.field();
        let plant_cells = plant_field
            .locations()
            .map(|loc| !plant_field.is_free(loc))
            .collect();

        Snapshot {
            step: self.step,
            time_of_day: self.time_of_day.label(),
            weather: self.weather.label().to_string(),
            depth: self.depth,
            width: self.width,
            cells,
            plant_cells,
            plants: self.plants.len(),
            census: self.census(),
        }
    }

    // Accessors

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn current_weather(&self) -> Weather {
        self.weather.current
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get current population count
    pub fn population(&self) -> usize {
        self.ecosystem.population()
    }

    pub fn census(&self) -> Census {
        self.ecosystem.census()
    }

    /// Get seed for reproducibility, if the world was seeded
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::organism::DeathCause;
    use crate::viability::ViabilityRule;
    use rand::rngs::mock::StepRng;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.world.depth = 30;
        config.world.width = 30;
        config
    }

    fn scripted(depth: usize, width: usize) -> World<StepRng> {
        let mut config = Config::default();
        config.world.depth = depth;
        config.world.width = width;
        config.world.shuffle_adjacency = false;
        World::unpopulated(config, StepRng::new(0, 0))
    }

    #[test]
    fn test_world_creation() {
        let world = World::new_with_seed(test_config(), 1);

        assert_eq!(world.step(), 0);
        assert_eq!(world.state(), RunState::Populated);
        assert!(world.population() > 0);
        assert_eq!(world.plants.len(), 900);
        assert_eq!(world.snapshot().plant_cell_count(), 900);
        assert!(world.ecosystem.is_consistent());
        assert_eq!(world.seed(), Some(1));
    }

    #[test]
    fn test_seeded_ages_are_random() {
        let world = World::new_with_seed(test_config(), 2);
        for org in world.ecosystem.organisms() {
            assert!(org.age < org.traits().max_age);
        }
    }

    #[test]
    fn test_zero_dimensions_use_defaults() {
        let mut config = Config::default();
        config.world.depth = 0;
        let world = World::unpopulated(config, StepRng::new(0, 0));
        assert_eq!((world.depth(), world.width()), (240, 240));
        assert_eq!(world.state(), RunState::Uninitialized);
    }

    #[test]
    fn test_sequential_seeding_takes_first_species() {
        // Every draw is 0.0, so the first species in the table always wins
        let mut config = Config::default();
        config.world.depth = 4;
        config.world.width = 4;
        let world = World::with_rng(config, StepRng::new(0, 0));

        assert_eq!(world.census().count(Species::Lion), 16);
        assert_eq!(world.census().total(), 16);
    }

    #[test]
    fn test_weighted_seeding() {
        let mut config = test_config();
        config.population.seeding = SeedingMode::Weighted;
        let world = World::new_with_seed(config, 5);

        let census = world.census();
        assert!(census.count(Species::Buffalo) > census.count(Species::Lion));
        assert!(world.ecosystem.is_consistent());
    }

    #[test]
    fn test_step_advances_clock() {
        let mut world = World::new_with_seed(test_config(), 3);
        world.simulate_one_step();

        assert_eq!(world.step(), 1);
        assert_eq!(world.state(), RunState::Stepping);
        assert_eq!(world.snapshot().time_of_day, "Night: 1:00");
        assert!(world.ecosystem.is_consistent());
    }

    #[test]
    fn test_weather_untouched_between_intervals() {
        let mut world = World::new_with_seed(test_config(), 4);
        for _ in 0..4 {
            world.simulate_one_step();
            assert_eq!(world.current_weather(), Weather::Sunny);
        }
    }

    #[test]
    fn test_offspring_scenario() {
        let mut world = scripted(1, 3);
        let male = world.spawn(Species::Zebra, Sex::Male, Location::new(0, 0));
        let female = world.spawn(Species::Zebra, Sex::Female, Location::new(0, 1));
        world.ecosystem.organism_mut(male).age = 20;
        world.ecosystem.organism_mut(female).age = 20;

        world.simulate_one_step();

        assert_eq!(world.population(), 3);
        assert_eq!(world.stats.births, 1);
        let young = world
            .ecosystem
            .organism_at(Location::new(0, 2))
            .expect("young in the free cell");
        assert_eq!(young.species, Species::Zebra);
        assert_eq!(young.age, 0);
    }

    #[test]
    fn test_dead_removed_after_step() {
        let mut world = scripted(1, 2);
        let lion = world.spawn(Species::Lion, Sex::Male, Location::new(0, 0));
        world.ecosystem.organism_mut(lion).food_level = 1;
        world.spawn(Species::Buffalo, Sex::Male, Location::new(0, 1));

        world.simulate_one_step();

        assert_eq!(world.population(), 1);
        assert_eq!(world.ecosystem.len(), 1);
        assert_eq!(world.stats.deaths_from(DeathCause::Starvation), 1);
    }

    #[test]
    fn test_prey_killed_in_step_does_not_act() {
        let mut world = scripted(1, 2);
        world.spawn(Species::Lion, Sex::Male, Location::new(0, 0));
        world.spawn(Species::Zebra, Sex::Male, Location::new(0, 1));

        world.simulate_one_step();

        assert_eq!(world.census().count(Species::Zebra), 0);
        assert_eq!(world.census().count(Species::Lion), 1);
        assert_eq!(world.stats.deaths_from(DeathCause::Predation), 1);
        assert_eq!(
            world.ecosystem.organism_at(Location::new(0, 1)).map(|o| o.species),
            Some(Species::Lion)
        );
    }

    #[test]
    fn test_simulate_stops_when_not_viable() {
        let mut world = scripted(3, 3);
        world.spawn(Species::Buffalo, Sex::Male, Location::new(1, 1));

        // One species only: the default rule stops before the first step
        assert_eq!(world.simulate(10), 0);
        assert_eq!(world.state(), RunState::Terminated);

        world.set_viability(ViabilityRule::NonExtinct);
        assert_eq!(world.simulate(10), 10);
        assert_eq!(world.step(), 10);
    }

    #[test]
    fn test_callback_sees_every_step() {
        let mut world = World::new_with_seed(test_config(), 8);
        world.set_viability(|_: &Census| true);
        let mut seen = Vec::new();

        world.simulate_with_callback(6, |w| seen.push(w.snapshot().step));

        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_reset_replays_run() {
        let mut world = World::new_with_seed(test_config(), 12);
        world.simulate_one_step();
        world.simulate_one_step();
        let first = world.snapshot();

        world.reset();
        assert_eq!(world.step(), 0);
        world.simulate_one_step();
        world.simulate_one_step();

        assert_eq!(world.snapshot(), first);
    }

    #[test]
    fn test_stats_history_recorded() {
        let mut config = test_config();
        config.logging.stats_interval = 5;
        let mut world = World::new_with_seed(config, 21);
        world.set_viability(ViabilityRule::NonExtinct);

        world.simulate(20);

        assert_eq!(world.stats_history.snapshots.len(), 4);
        assert_eq!(world.stats_history.population_series()[0].0, 5);
    }
}
