//! Plant layer: one plant per cell on its own field, regrown by rain and
//! wiped out by drought.

use super::weather::Weather;
use crate::grid::{Field, Location};
use serde::{Deserialize, Serialize};

/// Food value of a single plant
pub const PLANT_FOOD_VALUE: i32 = 20;

/// Index of a plant in its population
pub type PlantId = usize;

/// A single plant
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Plant {
    location: Option<Location>,
    alive: bool,
}

impl Plant {
    fn new(location: Location) -> Self {
        Self {
            location: Some(location),
            alive: true,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn food_value(&self) -> i32 {
        PLANT_FOOD_VALUE
    }
}

/// What a weather evaluation did to the plants
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlantChange {
    Regrew(usize),
    Withered(usize),
    Unchanged,
}

/// All plants plus the field they grow on
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlantPopulation {
    plants: Vec<Plant>,
    field: Field<PlantId>,
}

impl PlantPopulation {
    pub fn new(depth: usize, width: usize) -> Self {
        Self {
            plants: Vec::new(),
            field: Field::new(depth, width),
        }
    }

    /// Plant at `loc` unless the cell already has one
    pub fn plant(&mut self, loc: Location) -> bool {
        if !self.field.is_free(loc) {
            return false;
        }
        let id = self.plants.len();
        self.plants.push(Plant::new(loc));
        self.field.place(id, loc);
        true
    }

    /// Fill every empty cell of the plant field
    pub fn regrow(&mut self) -> usize {
        let empty: Vec<Location> = self
            .field
            .locations()
            .filter(|&loc| self.field.is_free(loc))
            .collect();

        let mut grown = 0;
        for loc in empty {
            if self.plant(loc) {
                grown += 1;
            }
        }
        grown
    }

    /// Kill every plant, emptying both the collection and the field
    pub fn wither(&mut self) -> usize {
        let count = self.plants.len();
        for plant in &mut self.plants {
            plant.alive = false;
            if let Some(loc) = plant.location.take() {
                self.field.clear(loc);
            }
        }
        self.plants.clear();
        count
    }

    /// Apply the effect of a freshly rolled weather state
    pub fn respond_to(&mut self, weather: Weather) -> PlantChange {
        match weather {
            Weather::Raining => {
                let grown = self.regrow();
                log::debug!("Rain regrew {} plants ({} total)", grown, self.len());
                PlantChange::Regrew(grown)
            }
            Weather::Drought => {
                let lost = self.wither();
                log::debug!("Drought withered {} plants", lost);
                PlantChange::Withered(lost)
            }
            Weather::Sunny => PlantChange::Unchanged,
        }
    }

    /// Remove all plants
    pub fn clear(&mut self) {
        self.plants.clear();
        self.field.clear_all();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn field(&self) -> &Field<PlantId> {
        &self.field
    }

    pub fn plant_at(&self, loc: Location) -> Option<&Plant> {
        self.field.object_at(loc).map(|id| &self.plants[id])
    }
}
