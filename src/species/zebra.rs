//! Zebras graze by day and stand still at night.
//!
//! They carry a food level like the predators do, but nothing drains it yet.

use super::{Activity, Category, SpeciesTraits};

const BREEDING_AGE: u32 = 20;
const MAX_AGE: u32 = 100;
const BREEDING_PROBABILITY: f64 = 0.10;
const MAX_LITTER_SIZE: u32 = 2;
const MAX_FOOD_LEVEL: i32 = 40;
const INITIAL_FOOD_LEVEL: i32 = 30;

pub(super) const TRAITS: SpeciesTraits = SpeciesTraits {
    name: "Zebra",
    category: Category::Prey,
    activity: Activity::Diurnal,
    breeding_age: BREEDING_AGE,
    max_age: MAX_AGE,
    breeding_probability: BREEDING_PROBABILITY,
    max_litter_size: MAX_LITTER_SIZE,
    max_food_level: MAX_FOOD_LEVEL,
    newborn_food_level: INITIAL_FOOD_LEVEL,
    seed_food_ceiling: INITIAL_FOOD_LEVEL,
    starves: false,
    diet: &[],
};
