//! Per-step observation record handed to displays and reporters.

use crate::grid::Location;
use crate::species::Species;
use crate::stats::Census;
use serde::{Deserialize, Serialize};

/// What an observer sees after a step
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub step: u64,
    /// e.g. `Day: 12:00`
    pub time_of_day: String,
    /// `Sunny`, `Raining` or `Drought`
    pub weather: String,
    pub depth: usize,
    pub width: usize,
    /// Animal occupancy in row-major order
    pub cells: Vec<Option<Species>>,
    /// Plant occupancy in row-major order
    pub plant_cells: Vec<bool>,
    pub plants: usize,
    pub census: Census,
}

impl Snapshot {
    /// Occupant of a cell
    pub fn occupant(&self, loc: Location) -> Option<Species> {
        if loc.row < self.depth && loc.col < self.width {
            self.cells[loc.row * self.width + loc.col]
        } else {
            None
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether a cell holds a plant
    pub fn has_plant(&self, loc: Location) -> bool {
        loc.row < self.depth
            && loc.col < self.width
            && self.plant_cells[loc.row * self.width + loc.col]
    }

    pub fn plant_cell_count(&self) -> usize {
        self.plant_cells.iter().filter(|&&p| p).count()
    }

    /// Status line: step, clock and weather
    pub fn status_line(&self) -> String {
        format!("Step: {} | {} | {}", self.step, self.time_of_day, self.weather)
    }

    /// Render the field as text, one row per line.
    ///
    /// Animals show as their species glyph; a plant under an empty cell
    /// shows as `,` and bare ground as `.`.
    pub fn render(&self) -> String {
        let width = self.width.max(1);
        let mut out = String::with_capacity((self.width + 1) * self.depth);
        for (row, plants) in self.cells.chunks(width).zip(self.plant_cells.chunks(width)) {
            for (cell, &plant) in row.iter().zip(plants) {
                out.push(match cell {
                    Some(species) => species.glyph(),
                    None if plant => ',',
                    None => '.',
                });
            }
            out.push('\n');
        }
        out
    }
}
