//! Wa-Tor predator–prey ecology (fish and sharks).

use tessel_core::Params;

use crate::error::RuleError;
use crate::neighborhood::Neighborhood;
use crate::proposal::{Migration, Proposal};
use crate::rule::{CellRng, Rule};

/// State of open water.
pub const WATER: u8 = 0;
/// State of a fish.
pub const FISH: u8 = 1;
/// State of a shark.
pub const SHARK: u8 = 2;

/// An animal and its hidden counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Creature {
    /// Prey.
    Fish {
        /// Ticks since last breeding.
        age: u32,
    },
    /// Predator.
    Shark {
        /// Ticks since last breeding.
        age: u32,
        /// Remaining energy; the shark starves at zero.
        energy: u32,
    },
}

/// One ocean cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ocean {
    /// Nothing here.
    Water,
    /// An animal.
    Occupied(Creature),
}

/// Wa-Tor rules.
///
/// Each tick every animal ages by one. A fish swims to a random
/// neighbouring water cell; a shark prefers a random neighbouring fish and
/// otherwise swims to water. Sharks burn one energy per tick and starve
/// at zero; eating a fish adds `fish_energy`. An animal whose age has
/// reached its breeding interval leaves a newborn behind when it moves
/// and starts counting again; an animal that cannot move keeps its age
/// and tries again next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaTor {
    fish_breed: u32,
    shark_breed: u32,
    shark_energy: u32,
    fish_energy: u32,
}

impl WaTor {
    /// Build from breeding intervals and energy values.
    pub fn new(fish_breed: u32, shark_breed: u32, shark_energy: u32, fish_energy: u32) -> Self {
        Self {
            fish_breed,
            shark_breed,
            shark_energy,
            fish_energy,
        }
    }

    fn fish(&self, age: u32, hood: &Neighborhood<'_>, rng: &mut CellRng) -> Proposal<Ocean, Creature> {
        let age = age.saturating_add(1);
        let stay = Ocean::Occupied(Creature::Fish { age });
        let Some(dest) = hood.pick(rng, |s| s.state == WATER) else {
            return Proposal::stay(stay);
        };
        if age >= self.fish_breed {
            let young = Creature::Fish { age: 0 };
            Proposal::migrate(stay, dest, Ocean::Occupied(young), young)
        } else {
            Proposal::migrate(stay, dest, Ocean::Water, Creature::Fish { age })
        }
    }

    fn shark(
        &self,
        age: u32,
        energy: u32,
        hood: &Neighborhood<'_>,
        rng: &mut CellRng,
    ) -> Proposal<Ocean, Creature> {
        let energy = energy.saturating_sub(1);
        if energy == 0 {
            return Proposal::stay(Ocean::Water);
        }
        let age = age.saturating_add(1);
        let stay = Ocean::Occupied(Creature::Shark { age, energy });
        let target = hood
            .pick(rng, |s| s.state == FISH)
            .or_else(|| hood.pick(rng, |s| s.state == WATER));
        let Some(dest) = target else {
            return Proposal::stay(stay);
        };
        if age >= self.shark_breed {
            let young = Creature::Shark {
                age: 0,
                energy: self.shark_energy,
            };
            let parent = Creature::Shark { age: 0, energy };
            Proposal::migrate(stay, dest, Ocean::Occupied(young), parent)
        } else {
            Proposal::migrate(stay, dest, Ocean::Water, Creature::Shark { age, energy })
        }
    }
}

impl Rule for WaTor {
    type Cell = Ocean;
    type Occupant = Creature;

    const NAME: &'static str = "wator";
    const MAX_STATE: u8 = SHARK;

    fn from_params(params: &Params) -> Result<Self, RuleError> {
        Ok(Self::new(
            params.require_nonzero_count(Self::NAME, "fish_breed")?,
            params.require_nonzero_count(Self::NAME, "shark_breed")?,
            params.require_nonzero_count(Self::NAME, "shark_energy")?,
            params.require_count(Self::NAME, "fish_energy")?,
        ))
    }

    fn seed(&self, state: u8) -> Ocean {
        match state {
            FISH => Ocean::Occupied(Creature::Fish { age: 0 }),
            SHARK => Ocean::Occupied(Creature::Shark {
                age: 0,
                energy: self.shark_energy,
            }),
            _ => Ocean::Water,
        }
    }

    fn state(&self, cell: &Ocean) -> u8 {
        match cell {
            Ocean::Water => WATER,
            Ocean::Occupied(Creature::Fish { .. }) => FISH,
            Ocean::Occupied(Creature::Shark { .. }) => SHARK,
        }
    }

    fn propose(&self, cell: &Ocean, hood: &Neighborhood<'_>, rng: &mut CellRng) -> Proposal<Ocean, Creature> {
        match *cell {
            Ocean::Water => Proposal::stay(Ocean::Water),
            Ocean::Occupied(Creature::Fish { age }) => self.fish(age, hood, rng),
            Ocean::Occupied(Creature::Shark { age, energy }) => self.shark(age, energy, hood, rng),
        }
    }

    /// Water takes anyone; a fish is taken only by a shark.
    fn accept_incoming(&self, dest: &Ocean, incoming: &Migration<Ocean, Creature>) -> bool {
        matches!(
            (dest, &incoming.occupant),
            (Ocean::Water, _) | (Ocean::Occupied(Creature::Fish { .. }), Creature::Shark { .. })
        )
    }

    fn absorb(&self, dest: &mut Ocean, occupant: Creature) {
        let ate = matches!(dest, Ocean::Occupied(Creature::Fish { .. }));
        *dest = Ocean::Occupied(match occupant {
            Creature::Shark { age, energy } if ate => Creature::Shark {
                age,
                energy: energy.saturating_add(self.fish_energy),
            },
            other => other,
        });
    }
}
