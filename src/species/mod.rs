//! Species definitions and their fixed life-history parameters.
//!
//! Every species is a row of constants ([`SpeciesTraits`]) living in its own
//! module. Predators additionally carry a diet table listing which species
//! they can eat and how much food each kill is worth (see [`diet`]).

pub mod diet;

mod buffalo;
mod hyena;
mod lion;
mod porcupine;
mod zebra;

use crate::ecology::daylight::TimeOfDay;
use serde::{Deserialize, Serialize};

pub use diet::Meal;

/// The animal species living in the field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    Lion,
    Hyena,
    Zebra,
    Porcupine,
    Buffalo,
}

/// Broad feeding role of a species
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Predator,
    Prey,
}

/// When a species moves around
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    /// Moves only during daylight hours, rests in place at night
    Diurnal,
    /// Moves every step regardless of the hour
    Always,
}

impl Activity {
    /// Whether an organism with this activity pattern moves at `time`
    pub fn is_active(&self, time: TimeOfDay) -> bool {
        match self {
            Activity::Diurnal => time.is_day(),
            Activity::Always => true,
        }
    }
}

/// Constant parameters shared by every member of a species
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesTraits {
    pub name: &'static str,
    pub category: Category,
    pub activity: Activity,
    /// Minimum age at which breeding is possible
    pub breeding_age: u32,
    /// Organisms die once their age exceeds this
    pub max_age: u32,
    /// Chance of a successful breeding draw
    pub breeding_probability: f64,
    /// Upper bound of a litter
    pub max_litter_size: u32,
    /// Food level ceiling used by `add_food_value`
    pub max_food_level: i32,
    /// Food level of a newborn
    pub newborn_food_level: i32,
    /// Seeded organisms draw their food level from `0..seed_food_ceiling`
    /// (no draw when zero)
    pub seed_food_ceiling: i32,
    /// Whether the food level drops every step and can starve the organism
    pub starves: bool,
    /// What this species eats (empty for prey)
    pub diet: &'static [Meal],
}

impl SpeciesTraits {
    /// Food value of eating `prey`, if it is on the menu
    pub fn food_value_of(&self, prey: Species) -> Option<i32> {
        diet::food_value(self.diet, prey)
    }
}

impl Species {
    /// All species, in the default seeding order
    pub const ALL: [Species; 5] = [
        Species::Lion,
        Species::Hyena,
        Species::Zebra,
        Species::Porcupine,
        Species::Buffalo,
    ];

    /// Life-history parameters of this species
    pub fn traits(&self) -> &'static SpeciesTraits {
        match self {
            Species::Lion => &lion::TRAITS,
            Species::Hyena => &hyena::TRAITS,
            Species::Zebra => &zebra::TRAITS,
            Species::Porcupine => &porcupine::TRAITS,
            Species::Buffalo => &buffalo::TRAITS,
        }
    }

    pub fn category(&self) -> Category {
        self.traits().category
    }

    pub fn is_predator(&self) -> bool {
        self.category() == Category::Predator
    }

    pub fn is_prey(&self) -> bool {
        self.category() == Category::Prey
    }

    /// Whether `self` will eat `prey`
    pub fn eats(&self, prey: Species) -> bool {
        self.traits().food_value_of(prey).is_some()
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        self.traits().name
    }

    /// Single-character map glyph
    pub fn glyph(&self) -> char {
        match self {
            Species::Lion => 'L',
            Species::Hyena => 'H',
            Species::Zebra => 'Z',
            Species::Porcupine => 'P',
            Species::Buffalo => 'B',
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predators_have_diets() {
        for species in Species::ALL {
            let traits = species.traits();
            match traits.category {
                Category::Predator => {
                    assert!(!traits.diet.is_empty(), "{} has nothing to eat", species);
                    assert!(traits.starves);
                }
                Category::Prey => assert!(traits.diet.is_empty()),
            }
        }
    }

    #[test]
    fn test_diets_only_name_prey() {
        for predator in Species::ALL.iter().filter(|s| s.is_predator()) {
            for meal in predator.traits().diet {
                assert!(meal.prey.is_prey(), "{} eats {}", predator, meal.prey);
                assert!(meal.food_value > 0);
            }
        }
    }

    #[test]
    fn test_traits_are_sane() {
        for species in Species::ALL {
            let t = species.traits();
            assert!(t.breeding_age < t.max_age, "{}", species);
            assert!(t.max_litter_size >= 1);
            assert!((0.0..=1.0).contains(&t.breeding_probability));
            assert!(t.seed_food_ceiling >= 0);
        }
    }

    #[test]
    fn test_eats() {
        assert!(Species::Lion.eats(Species::Buffalo));
        assert!(Species::Hyena.eats(Species::Zebra));
        assert!(!Species::Hyena.eats(Species::Buffalo));
        assert!(!Species::Lion.eats(Species::Hyena));
        assert!(!Species::Zebra.eats(Species::Porcupine));
    }

    #[test]
    fn test_activity_window() {
        assert!(!Activity::Diurnal.is_active(TimeOfDay::from_step(6)));
        assert!(Activity::Diurnal.is_active(TimeOfDay::from_step(7)));
        assert!(Activity::Diurnal.is_active(TimeOfDay::from_step(20)));
        assert!(!Activity::Diurnal.is_active(TimeOfDay::from_step(21)));
        assert!(Activity::Always.is_active(TimeOfDay::from_step(3)));
    }
}
