//! Spatial grid and locations for occupancy and neighbor queries.

use serde::{Deserialize, Serialize};

/// A (row, column) position in a field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular field of cells, each holding at most one occupant.
///
/// Adjacency is the 8-neighborhood, reported in row-major order. Callers
/// that want a randomized scan shuffle the returned list themselves.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Field<T> {
    depth: usize,
    width: usize,
    cells: Vec<Option<T>>,
}

impl<T: Copy + PartialEq> Field<T> {
    /// Create an empty field
    pub fn new(depth: usize, width: usize) -> Self {
        Self {
            depth,
            width,
            cells: vec![None; depth * width],
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        loc.row < self.depth && loc.col < self.width
    }

    #[inline]
    fn index(&self, loc: Location) -> usize {
        assert!(self.contains(loc), "location {} outside {}x{} field", loc, self.depth, self.width);
        loc.row * self.width + loc.col
    }

    /// Occupant of a cell, if any
    #[inline]
    pub fn object_at(&self, loc: Location) -> Option<T> {
        if self.contains(loc) {
            self.cells[self.index(loc)]
        } else {
            None
        }
    }

    #[inline]
    pub fn is_free(&self, loc: Location) -> bool {
        self.object_at(loc).is_none()
    }

    /// Put an occupant into a cell, replacing whatever was there
    #[inline]
    pub fn place(&mut self, item: T, loc: Location) {
        let idx = self.index(loc);
        self.cells[idx] = Some(item);
    }

    /// Move the occupant of `from` to `to`, emptying `from`
    pub fn relocate(&mut self, from: Location, to: Location) {
        let from_idx = self.index(from);
        let to_idx = self.index(to);
        if let Some(item) = self.cells[from_idx].take() {
            self.cells[to_idx] = Some(item);
        }
    }

    /// Empty a single cell
    #[inline]
    pub fn clear(&mut self, loc: Location) {
        let idx = self.index(loc);
        self.cells[idx] = None;
    }

    /// Empty every cell
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// All in-bounds neighbors of `loc` (excluding `loc` itself)
    pub fn adjacent_locations(&self, loc: Location) -> Vec<Location> {
        let mut results = Vec::with_capacity(8);

        let row_min = loc.row.saturating_sub(1);
        let row_max = (loc.row + 1).min(self.depth.saturating_sub(1));
        let col_min = loc.col.saturating_sub(1);
        let col_max = (loc.col + 1).min(self.width.saturating_sub(1));

        for row in row_min..=row_max {
            for col in col_min..=col_max {
                if row != loc.row || col != loc.col {
                    results.push(Location::new(row, col));
                }
            }
        }

        results
    }

    /// Neighbors of `loc` whose cell is empty
    pub fn free_adjacent_locations(&self, loc: Location) -> Vec<Location> {
        self.adjacent_locations(loc)
            .into_iter()
            .filter(|&l| self.is_free(l))
            .collect()
    }

    /// First empty neighbor of `loc`, if any
    pub fn free_adjacent_location(&self, loc: Location) -> Option<Location> {
        self.free_adjacent_locations(loc).into_iter().next()
    }

    /// Iterate over every location in row-major order
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.depth).flat_map(move |row| (0..self.width).map(move |col| Location::new(row, col)))
    }

    /// Iterate over occupied cells
    pub fn occupants(&self) -> impl Iterator<Item = (Location, T)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|item| (Location::new(i / self.width, i % self.width), item))
        })
    }

    /// Count occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_clear() {
        let mut field: Field<usize> = Field::new(4, 5);
        let loc = Location::new(2, 3);

        field.place(7, loc);
        assert_eq!(field.object_at(loc), Some(7));
        assert_eq!(field.occupied_count(), 1);

        field.clear(loc);
        assert!(field.is_free(loc));
        assert_eq!(field.occupied_count(), 0);
    }

    #[test]
    fn test_adjacent_interior() {
        let field: Field<usize> = Field::new(10, 10);
        let adjacent = field.adjacent_locations(Location::new(5, 5));

        assert_eq!(adjacent.len(), 8);
        assert!(!adjacent.contains(&Location::new(5, 5)));
        assert_eq!(adjacent[0], Location::new(4, 4));
        assert_eq!(adjacent[7], Location::new(6, 6));
    }

    #[test]
    fn test_adjacent_corner_and_strip() {
        let field: Field<usize> = Field::new(10, 10);
        assert_eq!(field.adjacent_locations(Location::new(0, 0)).len(), 3);

        let strip: Field<usize> = Field::new(1, 3);
        assert_eq!(
            strip.adjacent_locations(Location::new(0, 1)),
            vec![Location::new(0, 0), Location::new(0, 2)]
        );
        assert_eq!(strip.adjacent_locations(Location::new(0, 0)), vec![Location::new(0, 1)]);
    }

    #[test]
    fn test_free_adjacent() {
        let mut field: Field<usize> = Field::new(1, 3);
        field.place(0, Location::new(0, 0));

        let free = field.free_adjacent_locations(Location::new(0, 1));
        assert_eq!(free, vec![Location::new(0, 2)]);

        field.place(1, Location::new(0, 2));
        assert_eq!(field.free_adjacent_location(Location::new(0, 1)), None);
    }

    #[test]
    fn test_relocate() {
        let mut field: Field<usize> = Field::new(3, 3);
        field.place(4, Location::new(0, 0));
        field.relocate(Location::new(0, 0), Location::new(1, 1));

        assert!(field.is_free(Location::new(0, 0)));
        assert_eq!(field.object_at(Location::new(1, 1)), Some(4));
    }

    #[test]
    fn test_occupants_iteration() {
        let mut field: Field<usize> = Field::new(2, 3);
        field.place(1, Location::new(0, 2));
        field.place(2, Location::new(1, 0));

        let occupants: Vec<_> = field.occupants().collect();
        assert_eq!(occupants, vec![(Location::new(0, 2), 1), (Location::new(1, 0), 2)]);
        assert_eq!(field.locations().count(), 6);
    }

    #[test]
    fn test_out_of_bounds_lookup() {
        let field: Field<usize> = Field::new(2, 2);
        assert_eq!(field.object_at(Location::new(5, 5)), None);
        assert!(!field.contains(Location::new(2, 0)));
    }
}
