//! Organism structure and per-individual lifecycle.

use crate::grid::Location;
use crate::species::{Species, SpeciesTraits};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Unique organism identifier
pub type OrganismId = u64;

/// Biological sex, needed for mating
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Draw a sex uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            Sex::Male
        } else {
            Sex::Female
        }
    }
}

/// Cause of death tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeathCause {
    OldAge,
    Starvation,
    Predation,
    Overcrowding,
}

/// An animal in the simulation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Organism {
    // Identity
    pub id: OrganismId,
    pub species: Species,
    pub sex: Sex,

    // Physical state
    pub age: u32,
    pub food_level: i32,
    location: Option<Location>,
    alive: bool,

    // Statistics
    pub kills: u32,
    pub offspring_count: u32,
    pub cause_of_death: Option<DeathCause>,
}

impl Organism {
    /// Create an organism with a random sex.
    ///
    /// With `random_age` the age is drawn from `0..max_age` and the food
    /// level from the species' seeding range; otherwise it is a newborn.
    pub fn new<R: Rng + ?Sized>(
        id: OrganismId,
        species: Species,
        random_age: bool,
        location: Location,
        rng: &mut R,
    ) -> Self {
        let sex = Sex::random(rng);
        let mut org = Self::newborn(id, species, sex, location);

        if random_age {
            let traits = species.traits();
            org.age = rng.gen_range(0..traits.max_age);
            if traits.seed_food_ceiling > 0 {
                org.food_level = rng.gen_range(0..traits.seed_food_ceiling);
            }
        }

        org
    }

    /// Create a newborn of known sex
    pub fn newborn(id: OrganismId, species: Species, sex: Sex, location: Location) -> Self {
        Self {
            id,
            species,
            sex,
            age: 0,
            food_level: species.traits().newborn_food_level,
            location: Some(location),
            alive: true,
            kills: 0,
            offspring_count: 0,
            cause_of_death: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_food_level(mut self, food_level: i32) -> Self {
        self.food_level = food_level;
        self
    }

    /// Build a young organism of the same species at `location`
    pub fn new_offspring<R: Rng + ?Sized>(
        &self,
        id: OrganismId,
        random_age: bool,
        location: Location,
        rng: &mut R,
    ) -> Organism {
        Organism::new(id, self.species, random_age, location, rng)
    }

    #[inline]
    pub fn traits(&self) -> &'static SpeciesTraits {
        self.species.traits()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = Some(location);
    }

    /// Mark dead and give up the cell. Returns the cell that was held.
    ///
    /// The first recorded cause wins; a dead organism never comes back.
    pub(crate) fn kill(&mut self, cause: DeathCause) -> Option<Location> {
        if self.alive {
            self.alive = false;
            self.cause_of_death = Some(cause);
        }
        self.location.take()
    }

    /// Age by one step and burn one unit of food if the species starves.
    ///
    /// Returns the cause of death if either limit was crossed; old age is
    /// checked first.
    pub fn advance_lifecycle(&mut self) -> Option<DeathCause> {
        let traits = self.traits();
        let mut cause = None;

        self.age += 1;
        if self.age > traits.max_age {
            cause = Some(DeathCause::OldAge);
        }

        if traits.starves {
            self.food_level -= 1;
            if self.food_level <= 0 && cause.is_none() {
                cause = Some(DeathCause::Starvation);
            }
        }

        cause
    }

    // Breeding parameters

    pub fn breeding_probability(&self) -> f64 {
        self.traits().breeding_probability
    }

    pub fn litter_size(&self) -> u32 {
        self.traits().max_litter_size
    }

    pub fn breeding_age(&self) -> u32 {
        self.traits().breeding_age
    }

    pub fn max_food(&self) -> i32 {
        self.traits().max_food_level
    }

    pub fn can_breed(&self) -> bool {
        self.age >= self.breeding_age()
    }

    /// Can this organism mate with `other`?
    pub fn is_mate(&self, other: &Organism) -> bool {
        other.alive && other.species == self.species && other.sex != self.sex
    }

    /// Number of births this breeding attempt (may be zero)
    pub fn breed<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if self.can_breed() && rng.gen::<f64>() <= self.breeding_probability() {
            rng.gen_range(1..=self.litter_size())
        } else {
            0
        }
    }

    /// Add food, capped at the species maximum. Returns whether now full.
    pub fn add_food_value(&mut self, food_value: i32) -> bool {
        self.food_level = (self.food_level + food_value).min(self.max_food());
        self.is_full()
    }

    pub fn is_full(&self) -> bool {
        self.food_level >= self.max_food()
    }
}
