//! Environmental processes around the animals.
//!
//! This module contains:
//! - Day/night cycle (movement gating for diurnal species)
//! - Weather process (Sunny / Raining / Drought)
//! - Plant population driven by the weather

pub mod daylight;
pub mod plants;
pub mod weather;

pub use daylight::TimeOfDay;
pub use plants::{Plant, PlantChange, PlantPopulation, PLANT_FOOD_VALUE};
pub use weather::{Weather, WeatherConfig, WeatherSystem};
