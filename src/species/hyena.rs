//! Hyenas: the smaller pack predator. Shorter lived and quicker to breed than
//! lions, they cannot take down buffalo.

use super::{Activity, Category, Meal, Species, SpeciesTraits};

const BREEDING_AGE: u32 = 10;
const MAX_AGE: u32 = 60;
const BREEDING_PROBABILITY: f64 = 0.12;
const MAX_LITTER_SIZE: u32 = 3;
const MAX_FOOD_LEVEL: i32 = 40;

const ZEBRA_FOOD_VALUE: i32 = 18;
const PORCUPINE_FOOD_VALUE: i32 = 12;

const DIET: [Meal; 2] = [
    Meal::new(Species::Porcupine, PORCUPINE_FOOD_VALUE),
    Meal::new(Species::Zebra, ZEBRA_FOOD_VALUE),
];

pub(super) const TRAITS: SpeciesTraits = SpeciesTraits {
    name: "Hyena",
    category: Category::Predator,
    activity: Activity::Always,
    breeding_age: BREEDING_AGE,
    max_age: MAX_AGE,
    breeding_probability: BREEDING_PROBABILITY,
    max_litter_size: MAX_LITTER_SIZE,
    max_food_level: MAX_FOOD_LEVEL,
    newborn_food_level: ZEBRA_FOOD_VALUE,
    seed_food_ceiling: 25,
    starves: true,
    diet: &DIET,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyena_skips_buffalo() {
        assert_eq!(TRAITS.food_value_of(Species::Buffalo), None);
        assert_eq!(TRAITS.food_value_of(Species::Zebra), Some(ZEBRA_FOOD_VALUE));
    }
}
