//! The transition contract every automaton implements.

use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tessel_core::{Params, TickId};
use tessel_space::Topology;

use crate::error::RuleError;
use crate::neighborhood::Neighborhood;
use crate::proposal::{Migration, Proposal};
use crate::surface::CellSurface;

/// Random source handed to each proposal.
pub type CellRng = ChaCha8Rng;

/// The RNG for one cell in one tick.
///
/// Seeded from `seed XOR tick` with the cell index as the stream, so the
/// draws a cell sees do not depend on the order cells are visited in.
pub fn cell_rng(seed: u64, tick: TickId, index: usize) -> CellRng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ tick.0);
    rng.set_stream(index as u64);
    rng
}

/// A cell automaton.
///
/// Implementations are immutable once built: per-cell mutable data lives
/// in [`Rule::Cell`], which the engine owns in a flat arena. A tick calls
/// [`propose`](Rule::propose) once per cell against the pre-tick
/// snapshot, then [`accept_incoming`](Rule::accept_incoming) on the
/// destinations of migrations, then [`absorb`](Rule::absorb) on the
/// winners.
///
/// # Contract
///
/// - `propose` reads only its own cell, the [`Neighborhood`] and the RNG.
/// - `state` always returns a value in `0..=MAX_STATE`.
/// - `accept_incoming` sees the destination's pre-tick value.
pub trait Rule: Sized + Send + Sync {
    /// Per-cell value, including hidden fields.
    type Cell: Clone + fmt::Debug + Send + Sync;

    /// What travels with a migrating occupant. Passive rules use
    /// [`std::convert::Infallible`].
    type Occupant: Clone + fmt::Debug + Send + Sync;

    /// Identifier used in logs and errors.
    const NAME: &'static str;

    /// Largest valid public state.
    const MAX_STATE: u8;

    /// Build the rule from the loader's named parameters.
    fn from_params(params: &Params) -> Result<Self, RuleError>;

    /// Create a cell from a layout digit already known to be in range.
    fn seed(&self, state: u8) -> Self::Cell;

    /// Public state of a cell.
    fn state(&self, cell: &Self::Cell) -> u8;

    /// What neighbours may observe of a cell.
    fn surface(&self, cell: &Self::Cell) -> CellSurface {
        CellSurface::of(self.state(cell))
    }

    /// Compute the cell's next value and optionally a migration.
    fn propose(
        &self,
        cell: &Self::Cell,
        hood: &Neighborhood<'_>,
        rng: &mut CellRng,
    ) -> Proposal<Self::Cell, Self::Occupant>;

    /// Whether `dest` will take in `incoming`. Passive rules never do.
    fn accept_incoming(
        &self,
        _dest: &Self::Cell,
        _incoming: &Migration<Self::Cell, Self::Occupant>,
    ) -> bool {
        false
    }

    /// Fold an accepted occupant into the destination's next value.
    fn absorb(&self, _dest: &mut Self::Cell, _occupant: Self::Occupant) {}

    /// Whether the rule can run on `topology`.
    fn supports(&self, _topology: Topology) -> bool {
        true
    }
}

/// Turn a row-major digit layout into cells, rejecting out-of-range
/// states.
pub fn seed_layout<R: Rule>(rule: &R, layout: &[u8]) -> Result<Vec<R::Cell>, RuleError> {
    layout
        .iter()
        .enumerate()
        .map(|(index, &state)| {
            if state > R::MAX_STATE {
                return Err(RuleError::StateOutOfRange {
                    rule: R::NAME,
                    index,
                    state,
                    max: R::MAX_STATE,
                });
            }
            Ok(rule.seed(state))
        })
        .collect()
}
