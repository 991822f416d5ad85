//! Cyclic dominance: rock, paper, scissors.

use std::convert::Infallible;

use rand::Rng;
use tessel_core::Params;

use crate::error::RuleError;
use crate::neighborhood::Neighborhood;
use crate::proposal::Proposal;
use crate::rule::{CellRng, Rule};

/// One of the three species.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Hand {
    /// Beaten by paper.
    Rock = 0,
    /// Beaten by scissors.
    Paper = 1,
    /// Beaten by rock.
    Scissors = 2,
}

impl Hand {
    /// The species that beats this one.
    pub fn predator(self) -> Hand {
        match self {
            Hand::Rock => Hand::Paper,
            Hand::Paper => Hand::Scissors,
            Hand::Scissors => Hand::Rock,
        }
    }
}

/// A cell is converted when at least `threshold` neighbours hold the
/// species that beats it. `jitter` adds a uniform `0..=jitter` to the
/// threshold per cell and tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RockPaperScissors {
    threshold: u32,
    jitter: u32,
}

impl RockPaperScissors {
    /// Build with an explicit threshold and jitter.
    pub fn new(threshold: u32, jitter: u32) -> Self {
        Self { threshold, jitter }
    }
}

impl Rule for RockPaperScissors {
    type Cell = Hand;
    type Occupant = Infallible;

    const NAME: &'static str = "rock_paper_scissors";
    const MAX_STATE: u8 = Hand::Scissors as u8;

    fn from_params(params: &Params) -> Result<Self, RuleError> {
        Ok(Self::new(
            params.require_nonzero_count(Self::NAME, "threshold")?,
            params.count_or(Self::NAME, "jitter", 0)?,
        ))
    }

    fn seed(&self, state: u8) -> Hand {
        match state {
            1 => Hand::Paper,
            2 => Hand::Scissors,
            _ => Hand::Rock,
        }
    }

    fn state(&self, cell: &Hand) -> u8 {
        *cell as u8
    }

    fn propose(&self, cell: &Hand, hood: &Neighborhood<'_>, rng: &mut CellRng) -> Proposal<Hand, Infallible> {
        let predator = cell.predator();
        let mut threshold = self.threshold;
        if self.jitter > 0 {
            threshold = threshold.saturating_add(rng.random_range(0..=self.jitter));
        }
        let attackers = hood.count(predator as u8);
        Proposal::stay(if attackers >= threshold as usize { predator } else { *cell })
    }
}
