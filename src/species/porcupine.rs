//! Porcupines: small, fast-breeding prey that keep moving through the night.

use super::{Activity, Category, SpeciesTraits};

const BREEDING_AGE: u32 = 8;
const MAX_AGE: u32 = 80;
const BREEDING_PROBABILITY: f64 = 0.15;
const MAX_LITTER_SIZE: u32 = 2;
const MAX_FOOD_LEVEL: i32 = 10;

pub(super) const TRAITS: SpeciesTraits = SpeciesTraits {
    name: "Porcupine",
    category: Category::Prey,
    activity: Activity::Always,
    breeding_age: BREEDING_AGE,
    max_age: MAX_AGE,
    breeding_probability: BREEDING_PROBABILITY,
    max_litter_size: MAX_LITTER_SIZE,
    max_food_level: MAX_FOOD_LEVEL,
    newborn_food_level: 0,
    seed_food_ceiling: 0,
    starves: false,
    diet: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecology::daylight::TimeOfDay;

    #[test]
    fn test_porcupine_is_nocturnal_too() {
        assert!(TRAITS.activity.is_active(TimeOfDay::from_step(2)));
        assert!(TRAITS.activity.is_active(TimeOfDay::from_step(12)));
    }
}
