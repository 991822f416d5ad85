//! Tessel: cellular automata and grid-bound agents on square, triangle and
//! hexagon tessellations.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessel sub-crates. For most users, adding `tessel` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! // A blinker on a 5×5 torus.
//! let config = GridConfig::builder(RuleKind::Life)
//!     .topology(Shape::Square, 8)
//!     .edge(EdgeBehavior::Wrap)
//!     .layout(
//!         5,
//!         vec![
//!             0, 0, 0, 0, 0,
//!             0, 0, 1, 0, 0,
//!             0, 0, 1, 0, 0,
//!             0, 0, 1, 0, 0,
//!             0, 0, 0, 0, 0,
//!         ],
//!     )
//!     .build()
//!     .unwrap();
//! let mut grid = SimulationGrid::new(&config).unwrap();
//! grid.tick();
//! assert_eq!(&grid.view()[10..15], &[0, 1, 1, 1, 0]);
//! assert_eq!(grid.tick_id(), TickId(1));
//! assert_eq!(grid.dimensions(), (5, 5));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | Tick IDs, rule parameters, parameter errors |
//! | [`space`] | `tessel-space` | Shapes, offset tables, neighbour tables |
//! | [`rules`] | `tessel-rules` | The `Rule` trait and the nine built-in automata |
//! | [`engine`] | `tessel-engine` | Grid configuration, two-phase ticking, arbitration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Tick IDs and rule parameters (`tessel-core`).
pub use tessel_core as types;

/// Grid shapes and neighbourhoods (`tessel-space`).
///
/// [`space::Topology`] validates a shape/neighbourhood pair;
/// [`space::NeighborTable`] caches every cell's neighbours for one grid.
pub use tessel_space as space;

/// Cell rules (`tessel-rules`).
///
/// The [`rules::Rule`] trait is the extension point for new automata.
/// [`rules::RuleKind`] names the built-in ones.
pub use tessel_rules as rules;

/// Grids and ticking (`tessel-engine`).
///
/// [`engine::SimulationGrid`] runs any built-in rule;
/// [`engine::Lattice`] runs a single statically known one, including
/// user-defined rules.
pub use tessel_engine as engine;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessel_core::{ParamError, Params, TickId};

    // Space
    pub use tessel_space::{EdgeBehavior, NeighborTable, Shape, SpaceError, Topology};

    // Rules
    pub use tessel_rules::{CellRng, Neighborhood, Proposal, Rule, RuleError, RuleKind};

    // Engine
    pub use tessel_engine::{
        ConfigError, GridConfig, Lattice, MigrationArbiter, SimulationGrid, TickMetrics,
    };
}
