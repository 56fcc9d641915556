//! Viability rules deciding whether a run should keep going.

use crate::stats::Census;
use serde::{Deserialize, Serialize};

/// Predicate checked before every step of [`World::simulate`](crate::World::simulate)
pub trait Viability {
    fn is_viable(&self, census: &Census) -> bool;
}

impl<F> Viability for F
where
    F: Fn(&Census) -> bool,
{
    fn is_viable(&self, census: &Census) -> bool {
        self(census)
    }
}

/// Stock viability rules selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViabilityRule {
    /// Keep going while more than one species is alive
    MultipleSpecies,
    /// Keep going while anything is alive
    NonExtinct,
}

impl Default for ViabilityRule {
    fn default() -> Self {
        ViabilityRule::MultipleSpecies
    }
}

impl Viability for ViabilityRule {
    fn is_viable(&self, census: &Census) -> bool {
        match self {
            ViabilityRule::MultipleSpecies => census.species_alive() > 1,
            ViabilityRule::NonExtinct => census.total() > 0,
        }
    }
}
