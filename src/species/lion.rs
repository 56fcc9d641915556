//! Lions: the apex predator. They hunt at any hour and reset their hunger
//! to a fixed value depending on what they caught.

use super::{Activity, Category, Meal, Species, SpeciesTraits};

const BREEDING_AGE: u32 = 8;
const MAX_AGE: u32 = 70;
const BREEDING_PROBABILITY: f64 = 0.10;
const MAX_LITTER_SIZE: u32 = 2;
const MAX_FOOD_LEVEL: i32 = 50;

// Food values double as the number of steps a lion can go before eating again.
const ZEBRA_FOOD_VALUE: i32 = 20;
const PORCUPINE_FOOD_VALUE: i32 = 15;
const BUFFALO_FOOD_VALUE: i32 = 35;

const DIET: [Meal; 3] = [
    Meal::new(Species::Zebra, ZEBRA_FOOD_VALUE),
    Meal::new(Species::Buffalo, BUFFALO_FOOD_VALUE),
    Meal::new(Species::Porcupine, PORCUPINE_FOOD_VALUE),
];

pub(super) const TRAITS: SpeciesTraits = SpeciesTraits {
    name: "Lion",
    category: Category::Predator,
    activity: Activity::Always,
    breeding_age: BREEDING_AGE,
    max_age: MAX_AGE,
    breeding_probability: BREEDING_PROBABILITY,
    max_litter_size: MAX_LITTER_SIZE,
    max_food_level: MAX_FOOD_LEVEL,
    // Cubs start as if they had just shared a zebra
    newborn_food_level: ZEBRA_FOOD_VALUE,
    seed_food_ceiling: BUFFALO_FOOD_VALUE,
    starves: true,
    diet: &DIET,
};
