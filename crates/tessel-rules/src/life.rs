//! Conway's Game of Life (B3/S23).

use std::convert::Infallible;

use tessel_core::Params;

use crate::error::RuleError;
use crate::neighborhood::Neighborhood;
use crate::proposal::Proposal;
use crate::rule::{CellRng, Rule};

/// State of a dead cell.
pub const DEAD: u8 = 0;
/// State of a live cell.
pub const ALIVE: u8 = 1;

/// A cell is born with exactly three live neighbours and survives with
/// two or three. The cell itself is just its liveness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Life;

impl Life {
    const BIRTH: u32 = 1 << 3;
    const SURVIVE: u32 = (1 << 2) | (1 << 3);
}

impl Rule for Life {
    type Cell = bool;
    type Occupant = Infallible;

    const NAME: &'static str = "life";
    const MAX_STATE: u8 = ALIVE;

    fn from_params(_params: &Params) -> Result<Self, RuleError> {
        Ok(Self)
    }

    fn seed(&self, state: u8) -> bool {
        state == ALIVE
    }

    fn state(&self, cell: &bool) -> u8 {
        u8::from(*cell)
    }

    fn propose(&self, cell: &bool, hood: &Neighborhood<'_>, _rng: &mut CellRng) -> Proposal<bool, Infallible> {
        let live = hood.count(ALIVE);
        let mask = if *cell { Self::SURVIVE } else { Self::BIRTH };
        Proposal::stay(live < 32 && mask & (1 << live) != 0)
    }
}
