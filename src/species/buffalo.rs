//! Buffalo: long-lived diurnal grazers.

use super::{Activity, Category, SpeciesTraits};

pub(super) const TRAITS: SpeciesTraits = SpeciesTraits {
    name: "Buffalo",
    category: Category::Prey,
    activity: Activity::Diurnal,
    breeding_age: 20,
    max_age: 200,
    breeding_probability: 0.10,
    max_litter_size: 2,
    max_food_level: 50,
    newborn_food_level: 0,
    seed_food_ceiling: 0,
    starves: false,
    diet: &[],
};
