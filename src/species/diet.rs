//! Consumable-by table: which prey a predator recognises and what each is worth.

use super::Species;

/// One entry on a predator's menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meal {
    pub prey: Species,
    /// Food level the predator is set to after eating this prey
    pub food_value: i32,
}

impl Meal {
    pub const fn new(prey: Species, food_value: i32) -> Self {
        Self { prey, food_value }
    }
}

/// Look up the food value of `prey` in a diet
pub fn food_value(diet: &[Meal], prey: Species) -> Option<i32> {
    diet.iter().find(|m| m.prey == prey).map(|m| m.food_value)
}

/// Every predator that will eat `prey`
pub fn predators_of(prey: Species) -> Vec<Species> {
    Species::ALL
        .iter()
        .copied()
        .filter(|predator| predator.eats(prey))
        .collect()
}
