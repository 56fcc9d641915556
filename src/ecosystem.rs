//! Animal population and the animal field, with the per-organism step rules:
//! aging, hunting, moving and breeding.
//!
//! Organisms live in a flat arena. The field stores arena slots, so a slot is
//! only meaningful until the next [`Ecosystem::remove_dead`], which compacts
//! the arena and re-indexes the field.

use crate::ecology::daylight::TimeOfDay;
use crate::grid::{Field, Location};
use crate::organism::{DeathCause, Organism, OrganismId, Sex};
use crate::species::{Category, Species};
use crate::stats::Census;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Position of an organism in the arena
pub type Slot = usize;

/// Deaths removed during one compaction, by cause
pub type DeathTally = BTreeMap<DeathCause, usize>;

/// Animals and the field they occupy
#[derive(Clone, Debug)]
pub struct Ecosystem {
    organisms: Vec<Organism>,
    field: Field<Slot>,
    shuffle_adjacency: bool,
    next_organism_id: OrganismId,
}

impl Ecosystem {
    /// Create an empty ecosystem
    pub fn new(depth: usize, width: usize, shuffle_adjacency: bool) -> Self {
        Self {
            organisms: Vec::new(),
            field: Field::new(depth, width),
            shuffle_adjacency,
            next_organism_id: 0,
        }
    }

    /// Remove every organism
    pub fn clear(&mut self) {
        self.organisms.clear();
        self.field.clear_all();
        self.next_organism_id = 0;
    }

    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    pub fn organism(&self, slot: Slot) -> &Organism {
        &self.organisms[slot]
    }

    pub fn organism_mut(&mut self, slot: Slot) -> &mut Organism {
        &mut self.organisms[slot]
    }

    pub fn field(&self) -> &Field<Slot> {
        &self.field
    }

    /// Organism standing at `loc`, if any
    pub fn organism_at(&self, loc: Location) -> Option<&Organism> {
        self.field.object_at(loc).map(|slot| &self.organisms[slot])
    }

    /// Number of arena slots (live or dead)
    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    /// Number of live organisms
    pub fn population(&self) -> usize {
        self.organisms.iter().filter(|o| o.is_alive()).count()
    }

    /// Live organisms per species
    pub fn census(&self) -> Census {
        Census::from_organisms(&self.organisms)
    }

    fn next_id(&mut self) -> OrganismId {
        let id = self.next_organism_id;
        self.next_organism_id += 1;
        id
    }

    /// Add an organism whose location is already set and claim its cell
    fn insert(&mut self, organism: Organism) -> Slot {
        let loc = organism
            .location()
            .expect("inserted organism must have a location");
        assert!(
            self.field.is_free(loc),
            "cell {} already occupied by slot {:?}",
            loc,
            self.field.object_at(loc)
        );

        let slot = self.organisms.len();
        self.organisms.push(organism);
        self.field.place(slot, loc);
        slot
    }

    /// Create an organism of `species` at a free `loc` with a random sex
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        species: Species,
        random_age: bool,
        loc: Location,
        rng: &mut R,
    ) -> Slot {
        let id = self.next_id();
        self.insert(Organism::new(id, species, random_age, loc, rng))
    }

    /// Place a newborn of known sex at a free `loc`
    pub fn spawn_with_sex(&mut self, species: Species, sex: Sex, loc: Location) -> Slot {
        let id = self.next_id();
        self.insert(Organism::newborn(id, species, sex, loc))
    }

    // === Neighborhood queries ===

    /// Neighbors of `loc` in scan order
    pub fn adjacent_locations<R: Rng + ?Sized>(&self, loc: Location, rng: &mut R) -> Vec<Location> {
        let mut adjacent = self.field.adjacent_locations(loc);
        if self.shuffle_adjacency {
            adjacent.shuffle(rng);
        }
        adjacent
    }

    /// Empty neighbors of `loc` in scan order
    pub fn free_adjacent_locations<R: Rng + ?Sized>(&self, loc: Location, rng: &mut R) -> Vec<Location> {
        self.adjacent_locations(loc, rng)
            .into_iter()
            .filter(|&l| self.field.is_free(l))
            .collect()
    }

    /// One empty neighbor of `loc`, if any
    pub fn free_adjacent_location<R: Rng + ?Sized>(&self, loc: Location, rng: &mut R) -> Option<Location> {
        self.free_adjacent_locations(loc, rng).into_iter().next()
    }

    // === Per-organism actions ===

    /// Mark an organism dead and clear its cell
    pub fn set_dead(&mut self, slot: Slot, cause: DeathCause) {
        if let Some(loc) = self.organisms[slot].kill(cause) {
            assert_eq!(
                self.field.object_at(loc),
                Some(slot),
                "slot {} did not own its cell {}",
                slot,
                loc
            );
            self.field.clear(loc);
        }
    }

    /// Move an organism to an empty cell
    fn move_to(&mut self, slot: Slot, target: Location) {
        let from = self.organisms[slot]
            .location()
            .expect("moving organism must have a location");
        debug_assert!(self.field.is_free(target), "move into occupied cell {}", target);

        self.field.relocate(from, target);
        self.organisms[slot].set_location(target);
    }

    /// One step of an organism's life: age, hunger, hunting and movement.
    ///
    /// Diurnal species stay put at night. Predators look for prey first and
    /// only then for an empty cell; an active organism with nowhere to go
    /// dies of overcrowding.
    pub fn act<R: Rng + ?Sized>(&mut self, slot: Slot, step: u64, rng: &mut R) {
        if !self.organisms[slot].is_alive() {
            return;
        }

        if let Some(cause) = self.organisms[slot].advance_lifecycle() {
            self.set_dead(slot, cause);
            return;
        }

        let traits = self.organisms[slot].traits();
        if !traits.activity.is_active(TimeOfDay::from_step(step)) {
            return;
        }

        let loc = match self.organisms[slot].location() {
            Some(loc) => loc,
            None => return,
        };

        let target = match traits.category {
            Category::Predator => self.find_food(slot, rng),
            Category::Prey => None,
        }
        .or_else(|| self.free_adjacent_location(loc, rng));

        match target {
            Some(target) => self.move_to(slot, target),
            None => self.set_dead(slot, DeathCause::Overcrowding),
        }
    }

    /// Eat the first live neighbor that is on this predator's menu.
    ///
    /// The predator's food level is set to the prey's food value, not
    /// increased by it. Returns the cell the prey occupied.
    pub fn find_food<R: Rng + ?Sized>(&mut self, slot: Slot, rng: &mut R) -> Option<Location> {
        let hunter = &self.organisms[slot];
        let loc = hunter.location()?;
        let traits = hunter.traits();

        for target in self.adjacent_locations(loc, rng) {
            let Some(prey_slot) = self.field.object_at(target) else {
                continue;
            };
            let prey = &self.organisms[prey_slot];
            if !prey.is_alive() {
                continue;
            }
            if let Some(food_value) = traits.food_value_of(prey.species) {
                self.set_dead(prey_slot, DeathCause::Predation);
                let hunter = &mut self.organisms[slot];
                hunter.food_level = food_value;
                hunter.kills += 1;
                return Some(target);
            }
        }

        None
    }

    /// Breed with every opposite-sex neighbor of the same species.
    ///
    /// Each mate triggers its own breeding draw, and the young are placed in
    /// free cells around this organism. New slots are appended to `newborns`.
    pub fn reproduce<R: Rng + ?Sized>(&mut self, slot: Slot, rng: &mut R, newborns: &mut Vec<Slot>) {
        let parent = &self.organisms[slot];
        if !parent.is_alive() {
            return;
        }
        let Some(loc) = parent.location() else {
            return;
        };

        for neighbor in self.adjacent_locations(loc, rng) {
            let Some(mate_slot) = self.field.object_at(neighbor) else {
                continue;
            };
            if !self.organisms[slot].is_mate(&self.organisms[mate_slot]) {
                continue;
            }

            let free = self.free_adjacent_locations(loc, rng);
            let births = self.organisms[slot].breed(rng) as usize;

            for cell in free.into_iter().take(births) {
                let id = self.next_id();
                let young = self.organisms[slot].new_offspring(id, false, cell, rng);
                newborns.push(self.insert(young));
                self.organisms[slot].offspring_count += 1;
            }
        }
    }

    // === Housekeeping ===

    /// Drop dead organisms from the arena and rebuild the field index.
    pub fn remove_dead(&mut self) -> DeathTally {
        let mut tally = DeathTally::new();
        for org in self.organisms.iter().filter(|o| !o.is_alive()) {
            if let Some(cause) = org.cause_of_death {
                *tally.entry(cause).or_insert(0) += 1;
            }
        }

        self.organisms.retain(|org| org.is_alive());
        self.update_spatial_index();
        tally
    }

    /// Re-place every live organism after the arena changed shape
    fn update_spatial_index(&mut self) {
        self.field.clear_all();
        for (slot, org) in self.organisms.iter().enumerate() {
            if let Some(loc) = org.location() {
                assert!(
                    self.field.is_free(loc),
                    "two organisms share cell {}",
                    loc
                );
                self.field.place(slot, loc);
            }
        }
    }

    /// Check that every live organism owns exactly its own cell
    pub fn is_consistent(&self) -> bool {
        let placed = self.organisms.iter().enumerate().all(|(slot, org)| {
            match (org.is_alive(), org.location()) {
                (true, Some(loc)) => self.field.object_at(loc) == Some(slot),
                (false, None) => true,
                _ => false,
            }
        });
        placed && self.field.occupied_count() == self.population()
    }
}
