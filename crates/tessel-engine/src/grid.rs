//! The rule-erased grid handed to drivers and front ends.

use tessel_core::TickId;
use tessel_rules::{
    Fire, Foraging, Life, Loops, Percolation, RockPaperScissors, RuleKind, Segregation,
    Sugarscape, WaTor,
};
use tessel_space::Topology;

use crate::config::{ConfigError, GridConfig};
use crate::lattice::Lattice;
use crate::metrics::TickMetrics;

/// A grid running any of the built-in rules.
///
/// Each variant is a [`Lattice`] specialised to one rule, so the hot
/// loops are monomorphised and the set of automata is checked
/// exhaustively.
///
/// # Examples
///
/// ```
/// use tessel_engine::{GridConfig, SimulationGrid};
/// use tessel_rules::RuleKind;
///
/// let config = GridConfig::builder(RuleKind::Life)
///     .layout(3, vec![0, 0, 0, 0, 1, 0, 0, 0, 0])
///     .build()
///     .unwrap();
/// let mut grid = SimulationGrid::new(&config).unwrap();
/// assert_eq!(grid.view(), config.layout);
/// grid.tick();
/// assert_eq!(grid.view(), vec![0; 9]);
/// ```
#[derive(Debug)]
pub enum SimulationGrid {
    /// Game of Life.
    Life(Lattice<Life>),
    /// Forest fire.
    Fire(Lattice<Fire>),
    /// Percolation.
    Percolation(Lattice<Percolation>),
    /// Schelling segregation.
    Segregation(Lattice<Segregation>),
    /// Wa-Tor predator–prey.
    WaTor(Lattice<WaTor>),
    /// Sugarscape.
    Sugarscape(Lattice<Sugarscape>),
    /// Ant foraging.
    Foraging(Lattice<Foraging>),
    /// Rock–paper–scissors.
    RockPaperScissors(Lattice<RockPaperScissors>),
    /// Table-driven loops.
    Loops(Lattice<Loops>),
}

macro_rules! each_lattice {
    ($grid:expr, $lattice:ident => $body:expr) => {
        match $grid {
            SimulationGrid::Life($lattice) => $body,
            SimulationGrid::Fire($lattice) => $body,
            SimulationGrid::Percolation($lattice) => $body,
            SimulationGrid::Segregation($lattice) => $body,
            SimulationGrid::WaTor($lattice) => $body,
            SimulationGrid::Sugarscape($lattice) => $body,
            SimulationGrid::Foraging($lattice) => $body,
            SimulationGrid::RockPaperScissors($lattice) => $body,
            SimulationGrid::Loops($lattice) => $body,
        }
    };
}

impl SimulationGrid {
    /// Validate `config` and build the grid.
    ///
    /// Every configuration error is reported here; [`tick`](Self::tick)
    /// cannot fail.
    pub fn new(config: &GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(match config.kind {
            RuleKind::Life => Self::Life(Lattice::from_config(config)?),
            RuleKind::Fire => Self::Fire(Lattice::from_config(config)?),
            RuleKind::Percolation => Self::Percolation(Lattice::from_config(config)?),
            RuleKind::Segregation => Self::Segregation(Lattice::from_config(config)?),
            RuleKind::WaTor => Self::WaTor(Lattice::from_config(config)?),
            RuleKind::Sugarscape => Self::Sugarscape(Lattice::from_config(config)?),
            RuleKind::Foraging => Self::Foraging(Lattice::from_config(config)?),
            RuleKind::RockPaperScissors => Self::RockPaperScissors(Lattice::from_config(config)?),
            RuleKind::Loops => Self::Loops(Lattice::from_config(config)?),
        })
    }

    /// Advance one synchronous tick.
    pub fn tick(&mut self) -> TickMetrics {
        each_lattice!(self, lattice => lattice.tick())
    }

    /// Public state of every cell, row-major.
    pub fn view(&self) -> Vec<u8> {
        each_lattice!(self, lattice => lattice.view())
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        each_lattice!(self, lattice => lattice.dimensions())
    }

    /// Which automaton this grid runs.
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::Life(_) => RuleKind::Life,
            Self::Fire(_) => RuleKind::Fire,
            Self::Percolation(_) => RuleKind::Percolation,
            Self::Segregation(_) => RuleKind::Segregation,
            Self::WaTor(_) => RuleKind::WaTor,
            Self::Sugarscape(_) => RuleKind::Sugarscape,
            Self::Foraging(_) => RuleKind::Foraging,
            Self::RockPaperScissors(_) => RuleKind::RockPaperScissors,
            Self::Loops(_) => RuleKind::Loops,
        }
    }

    /// Shape, neighbourhood and edge behaviour.
    pub fn topology(&self) -> Topology {
        each_lattice!(self, lattice => lattice.topology())
    }

    /// Ticks completed so far.
    pub fn tick_id(&self) -> TickId {
        each_lattice!(self, lattice => lattice.tick_id())
    }

    /// Number of cells in each public state, indexed by state.
    pub fn census(&self) -> Vec<usize> {
        each_lattice!(self, lattice => lattice.census())
    }

    /// Metrics of the most recent tick.
    pub fn last_metrics(&self) -> TickMetrics {
        each_lattice!(self, lattice => lattice.last_metrics())
    }
}
