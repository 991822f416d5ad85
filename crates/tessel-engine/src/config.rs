//! Grid configuration, validation, and error types.
//!
//! [`GridConfig`] is what an external loader hands the engine: the rule,
//! topology, dimensions, initial layout, named parameters and seed.
//! [`validate()`](GridConfig::validate) checks everything that does not
//! need the rule itself; rule parameters are checked when the rule is
//! built inside [`SimulationGrid::new`](crate::SimulationGrid::new).

use tessel_core::Params;
use tessel_rules::{RuleError, RuleKind};
use tessel_space::{EdgeBehavior, Shape, SpaceError, Topology};
use thiserror::Error;

// ── ConfigError ────────────────────────────────────────────────────

/// Why a grid could not be built.
///
/// Every variant is fatal and surfaces before the first tick.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid topology or dimensions.
    #[error(transparent)]
    Space(#[from] SpaceError),

    /// Invalid rule, parameter, or cell state.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// The layout does not cover the grid exactly.
    #[error("layout has {actual} cells but a {width}x{height} grid needs {expected}")]
    LayoutSize {
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
        /// `width * height`.
        expected: usize,
        /// Cells in the layout.
        actual: usize,
    },

    /// The rule cannot run on this shape/neighbourhood pair.
    #[error("{rule} cannot run on {shape} grids with a neighbourhood of {size}")]
    IncompatibleTopology {
        /// Rule variant.
        rule: &'static str,
        /// Requested shape.
        shape: Shape,
        /// Requested neighbourhood size.
        size: usize,
    },
}

// ── GridConfig ─────────────────────────────────────────────────────

/// Everything needed to build a [`SimulationGrid`](crate::SimulationGrid).
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Automaton to run.
    pub kind: RuleKind,
    /// Tile shape.
    pub shape: Shape,
    /// Declared neighbourhood size.
    pub neighborhood: usize,
    /// Boundary behaviour.
    pub edge: EdgeBehavior,
    /// Cells per row.
    pub width: usize,
    /// Rows.
    pub height: usize,
    /// Initial states, row-major, one digit per cell.
    pub layout: Vec<u8>,
    /// Named rule parameters.
    pub params: Params,
    /// Seed for every stochastic decision.
    pub seed: u64,
}

impl GridConfig {
    /// Start building a configuration for `kind`.
    ///
    /// Defaults: square tiles with neighbourhood 8 (4 for
    /// [`RuleKind::Loops`]), absorbing edges, seed 0.
    pub fn builder(kind: RuleKind) -> GridConfigBuilder {
        GridConfigBuilder::new(kind)
    }

    /// The validated topology.
    pub fn topology(&self) -> Result<Topology, ConfigError> {
        Ok(Topology::new(self.shape, self.neighborhood, self.edge)?)
    }

    /// Check topology, dimensions, layout size and layout states.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let topology = self.topology()?;
        topology.check_dimensions(self.width, self.height)?;
        let expected = self.width * self.height;
        if self.layout.len() != expected {
            return Err(ConfigError::LayoutSize {
                width: self.width,
                height: self.height,
                expected,
                actual: self.layout.len(),
            });
        }
        let max = self.kind.max_state();
        if let Some((index, &state)) = self.layout.iter().enumerate().find(|&(_, &s)| s > max) {
            return Err(RuleError::StateOutOfRange {
                rule: self.kind.name(),
                index,
                state,
                max,
            }
            .into());
        }
        Ok(())
    }
}

/// Builder for [`GridConfig`].
#[derive(Clone, Debug)]
pub struct GridConfigBuilder {
    config: GridConfig,
}

impl GridConfigBuilder {
    fn new(kind: RuleKind) -> Self {
        Self {
            config: GridConfig {
                kind,
                shape: Shape::Square,
                neighborhood: if kind == RuleKind::Loops { 4 } else { 8 },
                edge: EdgeBehavior::Absorb,
                width: 0,
                height: 0,
                layout: Vec::new(),
                params: Params::new(),
                seed: 0,
            },
        }
    }

    /// Tile shape and neighbourhood size.
    pub fn topology(mut self, shape: Shape, neighborhood: usize) -> Self {
        self.config.shape = shape;
        self.config.neighborhood = neighborhood;
        self
    }

    /// Boundary behaviour.
    pub fn edge(mut self, edge: EdgeBehavior) -> Self {
        self.config.edge = edge;
        self
    }

    /// Row-major layout `width` cells wide; the height follows from its
    /// length.
    pub fn layout(mut self, width: usize, layout: impl Into<Vec<u8>>) -> Self {
        let layout = layout.into();
        self.config.width = width;
        self.config.height = if width == 0 { 0 } else { layout.len() / width };
        self.config.layout = layout;
        self
    }

    /// Explicit dimensions, for layouts whose length may not match.
    pub fn dimensions(mut self, width: usize, height: usize) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Set one named parameter.
    pub fn param(mut self, name: impl Into<String>, value: f64) -> Self {
        self.config.params.insert(name, value);
        self
    }

    /// Replace all parameters.
    pub fn params(mut self, params: Params) -> Self {
        self.config.params = params;
        self
    }

    /// RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<GridConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
