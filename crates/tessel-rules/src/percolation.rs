//! Site percolation: fluid floods open cells from percolated ones.

use std::convert::Infallible;

use tessel_core::Params;

use crate::error::RuleError;
use crate::neighborhood::Neighborhood;
use crate::proposal::Proposal;
use crate::rule::{CellRng, Rule};

/// One site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Site {
    /// Impermeable.
    Blocked = 0,
    /// Permeable but dry.
    Open = 1,
    /// Reached by the fluid. Never reverts.
    Percolated = 2,
}

/// An open site becomes percolated when any neighbour is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Percolation;

impl Rule for Percolation {
    type Cell = Site;
    type Occupant = Infallible;

    const NAME: &'static str = "percolation";
    const MAX_STATE: u8 = Site::Percolated as u8;

    fn from_params(_params: &Params) -> Result<Self, RuleError> {
        Ok(Self)
    }

    fn seed(&self, state: u8) -> Site {
        match state {
            1 => Site::Open,
            2 => Site::Percolated,
            _ => Site::Blocked,
        }
    }

    fn state(&self, cell: &Site) -> u8 {
        *cell as u8
    }

    fn propose(&self, cell: &Site, hood: &Neighborhood<'_>, _rng: &mut CellRng) -> Proposal<Site, Infallible> {
        let next = match cell {
            Site::Open if hood.any(Site::Percolated as u8) => Site::Percolated,
            other => *other,
        };
        Proposal::stay(next)
    }
}
