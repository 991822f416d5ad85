//! Schelling segregation: unhappy households relocate anywhere.

use tessel_core::Params;

use crate::error::RuleError;
use crate::neighborhood::Neighborhood;
use crate::proposal::{Migration, Proposal};
use crate::rule::{CellRng, Rule};

/// State of an empty lot.
pub const EMPTY: u8 = 0;

/// A lot, either empty or home to a household of group 1 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lot {
    /// No household.
    Empty,
    /// Household of the given group.
    Household(u8),
}

/// A household is content when at least `threshold` of its occupied
/// neighbours belong to its own group (a household with no occupied
/// neighbours is content). Otherwise it moves to a random empty lot
/// anywhere on the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segregation {
    threshold: f64,
}

impl Segregation {
    /// Build with a satisfaction threshold in `[0, 1]`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    fn content(&self, group: u8, hood: &Neighborhood<'_>) -> bool {
        let (same, occupied) = hood
            .states()
            .filter(|&s| s != EMPTY)
            .fold((0usize, 0usize), |(same, occ), s| {
                (same + usize::from(s == group), occ + 1)
            });
        occupied == 0 || same as f64 / occupied as f64 >= self.threshold
    }
}

impl Rule for Segregation {
    type Cell = Lot;
    type Occupant = u8;

    const NAME: &'static str = "segregation";
    const MAX_STATE: u8 = 2;

    fn from_params(params: &Params) -> Result<Self, RuleError> {
        Ok(Self::new(params.require_probability(Self::NAME, "threshold")?))
    }

    fn seed(&self, state: u8) -> Lot {
        match state {
            EMPTY => Lot::Empty,
            group => Lot::Household(group),
        }
    }

    fn state(&self, cell: &Lot) -> u8 {
        match cell {
            Lot::Empty => EMPTY,
            Lot::Household(group) => *group,
        }
    }

    fn propose(&self, cell: &Lot, hood: &Neighborhood<'_>, rng: &mut CellRng) -> Proposal<Lot, u8> {
        let Lot::Household(group) = *cell else {
            return Proposal::stay(Lot::Empty);
        };
        if self.content(group, hood) {
            return Proposal::stay(*cell);
        }
        match hood.pick_anywhere(rng, |s| s.state == EMPTY) {
            Some(dest) => Proposal::migrate(*cell, dest, Lot::Empty, group),
            None => Proposal::stay(*cell),
        }
    }

    fn accept_incoming(&self, dest: &Lot, _incoming: &Migration<Lot, u8>) -> bool {
        *dest == Lot::Empty
    }

    fn absorb(&self, dest: &mut Lot, group: u8) {
        *dest = Lot::Household(group);
    }
}
