//! Sugarscape: agents roam a regrowing resource landscape.

use rand::Rng;
use tessel_core::Params;

use crate::error::RuleError;
use crate::neighborhood::Neighborhood;
use crate::proposal::{Migration, Proposal};
use crate::rule::{CellRng, Rule};
use crate::surface::CellSurface;

/// State of a patch without an agent.
pub const PATCH: u8 = 0;
/// State of a patch with an agent.
pub const AGENT: u8 = 1;

/// A sugar-gathering agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Agent {
    /// Accumulated sugar.
    pub sugar: u32,
    /// Sugar burned per tick.
    pub metabolism: u32,
    /// How many cells the agent sees along each direction.
    pub vision: u32,
}

/// One patch of the landscape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Patch {
    /// Sugar lying on the patch.
    pub sugar: u32,
    /// Agent standing here, if any.
    pub agent: Option<Agent>,
}

/// Patches regrow `grow_rate` sugar every `grow_interval` ticks up to
/// `max_sugar`.
///
/// Each agent looks along every neighbour direction up to `vision` cells
/// for the free patch with the most sugar, nearest first on ties and then
/// at random. It moves only when that patch holds more sugar than its
/// own. Wherever it ends the tick it harvests the patch and burns
/// `metabolism`; an agent that cannot pay dies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sugarscape {
    max_sugar: u32,
    grow_rate: u32,
    grow_interval: u32,
    initial_sugar: u32,
    metabolism: u32,
    vision: u32,
}

impl Sugarscape {
    fn regrow(&self, patch: &mut Patch, hood: &Neighborhood<'_>) {
        if hood.tick().0 % u64::from(self.grow_interval) == 0 {
            patch.sugar = patch.sugar.saturating_add(self.grow_rate).min(self.max_sugar);
        }
    }

    /// Harvest `patch` with `agent` and settle it there, or let it die.
    fn settle(patch: &mut Patch, mut agent: Agent) {
        let total = agent.sugar.saturating_add(patch.sugar);
        patch.sugar = 0;
        patch.agent = total.checked_sub(agent.metabolism).map(|left| {
            agent.sugar = left;
            agent
        });
    }

    fn best_patch(&self, agent: &Agent, hood: &Neighborhood<'_>, rng: &mut CellRng) -> Option<usize> {
        let snapshot = hood.snapshot();
        let range = agent.vision as usize;
        let mut best: Option<(usize, usize, f32)> = None;
        let mut ties = 0usize;
        for slot in hood.slots() {
            for (distance, index) in hood.ray(slot.offset, range) {
                let patch: &CellSurface = &snapshot[index];
                if patch.state != PATCH {
                    continue;
                }
                match best {
                    Some((_, d, s)) if patch.resource < s || (patch.resource == s && distance > d) => {}
                    Some((_, d, s)) if patch.resource == s && distance == d => {
                        ties += 1;
                        if rng.random_range(0..ties) == 0 {
                            best = Some((index, distance, s));
                        }
                    }
                    _ => {
                        best = Some((index, distance, patch.resource));
                        ties = 1;
                    }
                }
            }
        }
        best.filter(|&(_, _, sugar)| sugar > hood.own().resource)
            .map(|(index, _, _)| index)
    }
}

impl Rule for Sugarscape {
    type Cell = Patch;
    type Occupant = Agent;

    const NAME: &'static str = "sugarscape";
    const MAX_STATE: u8 = AGENT;

    fn from_params(params: &Params) -> Result<Self, RuleError> {
        Ok(Self {
            max_sugar: params.require_nonzero_count(Self::NAME, "max_sugar")?,
            grow_rate: params.require_count(Self::NAME, "grow_rate")?,
            grow_interval: match params.get("grow_interval") {
                Some(_) => params.require_nonzero_count(Self::NAME, "grow_interval")?,
                None => 1,
            },
            initial_sugar: params.require_count(Self::NAME, "initial_sugar")?,
            metabolism: params.require_count(Self::NAME, "metabolism")?,
            vision: params.require_nonzero_count(Self::NAME, "vision")?,
        })
    }

    fn seed(&self, state: u8) -> Patch {
        Patch {
            sugar: self.max_sugar,
            agent: (state == AGENT).then_some(Agent {
                sugar: self.initial_sugar,
                metabolism: self.metabolism,
                vision: self.vision,
            }),
        }
    }

    fn state(&self, cell: &Patch) -> u8 {
        if cell.agent.is_some() {
            AGENT
        } else {
            PATCH
        }
    }

    fn surface(&self, cell: &Patch) -> CellSurface {
        CellSurface {
            resource: cell.sugar as f32,
            ..CellSurface::of(self.state(cell))
        }
    }

    fn propose(&self, cell: &Patch, hood: &Neighborhood<'_>, rng: &mut CellRng) -> Proposal<Patch, Agent> {
        let mut ground = Patch {
            sugar: cell.sugar,
            agent: None,
        };
        self.regrow(&mut ground, hood);
        let Some(agent) = cell.agent else {
            return Proposal::stay(ground);
        };
        let mut stay = ground;
        Self::settle(&mut stay, agent);
        match self.best_patch(&agent, hood, rng) {
            Some(dest) => Proposal::migrate(stay, dest, ground, agent),
            None => Proposal::stay(stay),
        }
    }

    fn accept_incoming(&self, dest: &Patch, _incoming: &Migration<Patch, Agent>) -> bool {
        dest.agent.is_none()
    }

    fn absorb(&self, dest: &mut Patch, agent: Agent) {
        Self::settle(dest, agent);
    }
}
