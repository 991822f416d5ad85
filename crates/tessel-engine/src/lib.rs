//! Synchronous tick engine for Tessel grids.
//!
//! A [`SimulationGrid`] is built from a [`GridConfig`] and advanced one
//! [`tick`](SimulationGrid::tick) at a time. Each tick runs three phases:
//!
//! 1. **Propose**: every cell computes its next value against the same
//!    pre-tick snapshot (optionally in parallel with the `parallel`
//!    feature).
//! 2. **Arbitrate**: the [`MigrationArbiter`] awards each destination to
//!    at most one claimant, lowest source index first.
//! 3. **Commit**: every cell adopts its resolved next value.
//!
//! The engine performs no I/O and never installs a `tracing`
//! subscriber; it only emits events.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arbiter;
pub mod config;
pub mod grid;
pub mod lattice;
pub mod metrics;

pub use arbiter::{ArbitrationStats, Claim, MigrationArbiter};
pub use config::{ConfigError, GridConfig, GridConfigBuilder};
pub use grid::SimulationGrid;
pub use lattice::Lattice;
pub use metrics::TickMetrics;
