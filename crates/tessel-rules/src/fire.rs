//! Forest-fire spread with optional regrowth.

use std::convert::Infallible;

use rand::Rng;
use tessel_core::Params;

use crate::error::RuleError;
use crate::neighborhood::Neighborhood;
use crate::proposal::Proposal;
use crate::rule::{CellRng, Rule};

/// One forest cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Forest {
    /// Bare ground.
    Empty = 0,
    /// Flammable tree.
    Tree = 1,
    /// Burning this tick, empty the next.
    Burning = 2,
}

/// A tree next to a burning cell ignites with probability `prob_catch`;
/// burning cells always burn out. Empty ground regrows a tree with
/// probability `prob_grow` (default 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fire {
    prob_catch: f64,
    prob_grow: f64,
}

impl Fire {
    /// Build directly from probabilities in `[0, 1]`.
    pub fn new(prob_catch: f64, prob_grow: f64) -> Self {
        Self {
            prob_catch: prob_catch.clamp(0.0, 1.0),
            prob_grow: prob_grow.clamp(0.0, 1.0),
        }
    }
}

impl Rule for Fire {
    type Cell = Forest;
    type Occupant = Infallible;

    const NAME: &'static str = "fire";
    const MAX_STATE: u8 = Forest::Burning as u8;

    fn from_params(params: &Params) -> Result<Self, RuleError> {
        Ok(Self::new(
            params.require_probability(Self::NAME, "prob_catch")?,
            params.probability_or(Self::NAME, "prob_grow", 0.0)?,
        ))
    }

    fn seed(&self, state: u8) -> Forest {
        match state {
            1 => Forest::Tree,
            2 => Forest::Burning,
            _ => Forest::Empty,
        }
    }

    fn state(&self, cell: &Forest) -> u8 {
        *cell as u8
    }

    fn propose(&self, cell: &Forest, hood: &Neighborhood<'_>, rng: &mut CellRng) -> Proposal<Forest, Infallible> {
        let next = match cell {
            Forest::Burning => Forest::Empty,
            Forest::Tree if hood.any(Forest::Burning as u8) && rng.random_bool(self.prob_catch) => {
                Forest::Burning
            }
            Forest::Tree => Forest::Tree,
            Forest::Empty if self.prob_grow > 0.0 && rng.random_bool(self.prob_grow) => Forest::Tree,
            Forest::Empty => Forest::Empty,
        };
        Proposal::stay(next)
    }
}
