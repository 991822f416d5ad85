//! Neighbour topologies for Tessel grids.
//!
//! A grid is `width × height` cells stored row-major. This crate maps a
//! flat cell index to the indices of its neighbours for three
//! tessellation families:
//!
//! - [`Shape::Square`]: neighbourhood 4 (cardinal) or 8 (Moore)
//! - [`Shape::Triangle`]: neighbourhood 3 (edge) or 12 (vertex), with the
//!   offset set chosen by the cell's point-up / point-down orientation
//! - [`Shape::Hexagon`]: neighbourhood 6, offset rows (corners up)
//!
//! [`Topology`] computes neighbours on demand; [`NeighborTable`] caches
//! them per cell once at grid construction and is what the engine reads
//! during ticks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod offsets;
pub mod shape;
pub mod table;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use offsets::Offset;
pub use shape::Shape;
pub use table::NeighborTable;
pub use topology::{indices_for, is_triangle_top_pointy, Slot, Topology};
