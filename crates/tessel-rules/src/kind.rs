//! Automaton identifiers as supplied by configuration loaders.

use std::fmt;
use std::str::FromStr;

use crate::error::RuleError;
use crate::{
    Fire, Foraging, Life, Loops, Percolation, RockPaperScissors, Rule, Segregation, Sugarscape,
    WaTor,
};

/// Which rule variant a grid runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// [`Life`].
    Life,
    /// [`Fire`].
    Fire,
    /// [`Percolation`].
    Percolation,
    /// [`Segregation`].
    Segregation,
    /// [`WaTor`].
    WaTor,
    /// [`Sugarscape`].
    Sugarscape,
    /// [`Foraging`].
    Foraging,
    /// [`RockPaperScissors`].
    RockPaperScissors,
    /// [`Loops`].
    Loops,
}

impl RuleKind {
    /// Every kind, in declaration order.
    pub const ALL: [RuleKind; 9] = [
        Self::Life,
        Self::Fire,
        Self::Percolation,
        Self::Segregation,
        Self::WaTor,
        Self::Sugarscape,
        Self::Foraging,
        Self::RockPaperScissors,
        Self::Loops,
    ];

    /// Canonical identifier.
    pub fn name(self) -> &'static str {
        match self {
            Self::Life => Life::NAME,
            Self::Fire => Fire::NAME,
            Self::Percolation => Percolation::NAME,
            Self::Segregation => Segregation::NAME,
            Self::WaTor => WaTor::NAME,
            Self::Sugarscape => Sugarscape::NAME,
            Self::Foraging => Foraging::NAME,
            Self::RockPaperScissors => RockPaperScissors::NAME,
            Self::Loops => Loops::NAME,
        }
    }

    /// Largest valid layout digit.
    pub fn max_state(self) -> u8 {
        match self {
            Self::Life => Life::MAX_STATE,
            Self::Fire => Fire::MAX_STATE,
            Self::Percolation => Percolation::MAX_STATE,
            Self::Segregation => Segregation::MAX_STATE,
            Self::WaTor => WaTor::MAX_STATE,
            Self::Sugarscape => Sugarscape::MAX_STATE,
            Self::Foraging => Foraging::MAX_STATE,
            Self::RockPaperScissors => RockPaperScissors::MAX_STATE,
            Self::Loops => Loops::MAX_STATE,
        }
    }

    /// Whether cells of this kind can relocate their occupant.
    pub fn is_mobile(self) -> bool {
        matches!(
            self,
            Self::Segregation | Self::WaTor | Self::Sugarscape | Self::Foraging
        )
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleKind {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "life" | "game_of_life" | "gameoflife" => Ok(Self::Life),
            "fire" | "spreading_fire" => Ok(Self::Fire),
            "percolation" => Ok(Self::Percolation),
            "segregation" | "schelling" => Ok(Self::Segregation),
            "wator" | "wa_tor" | "predator_prey" => Ok(Self::WaTor),
            "sugarscape" => Ok(Self::Sugarscape),
            "foraging" | "ants" => Ok(Self::Foraging),
            "rps" | "rock_paper_scissors" => Ok(Self::RockPaperScissors),
            "loops" | "langton" | "langtons_loops" => Ok(Self::Loops),
            _ => Err(RuleError::UnknownKind(s.trim().to_string())),
        }
    }
}
