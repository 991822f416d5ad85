//! Error types for topology construction.

use thiserror::Error;

use crate::shape::Shape;

/// Errors arising while building a topology or neighbour table.
///
/// All of these are configuration errors: they are reported before the
/// first tick and never retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpaceError {
    /// A grid needs at least one row and one column.
    #[error("grid must have at least one cell, got {width}x{height}")]
    EmptyGrid {
        /// Configured width.
        width: usize,
        /// Configured height.
        height: usize,
    },
    /// `width * height` does not fit in `usize`.
    #[error("grid {width}x{height} is too large")]
    GridTooLarge {
        /// Configured width.
        width: usize,
        /// Configured height.
        height: usize,
    },
    /// The shape has no offset set for this neighbourhood size.
    #[error("{shape} grids do not support a neighbourhood of {size}")]
    UnsupportedNeighborhood {
        /// Grid shape.
        shape: Shape,
        /// Requested neighbourhood size.
        size: usize,
    },
    /// The declared neighbourhood size disagrees with what the topology
    /// actually produces for some cell.
    #[error(
        "{shape} neighbourhood declared as {declared} but cell {index} has {actual} neighbours"
    )]
    NeighborhoodMismatch {
        /// Grid shape.
        shape: Shape,
        /// Declared neighbourhood size.
        declared: usize,
        /// Count produced by the topology.
        actual: usize,
        /// First offending cell.
        index: usize,
    },
    /// A wrapped axis is too short: neighbours would repeat or alias the centre.
    #[error("wrapped {axis} of length {len} is too short, need at least {min}")]
    WrapTooSmall {
        /// `"width"` or `"height"`.
        axis: &'static str,
        /// Configured length.
        len: usize,
        /// Minimum length for this topology.
        min: usize,
    },
    /// A wrapped axis would break the alternating cell orientation.
    #[error("{shape} grids need an even {axis} to wrap, got {len}")]
    WrapParity {
        /// Grid shape.
        shape: Shape,
        /// `"width"` or `"height"`.
        axis: &'static str,
        /// Configured length.
        len: usize,
    },
    /// Unrecognised shape identifier.
    #[error("unknown grid shape '{0}'")]
    UnknownShape(String),
    /// Unrecognised edge behaviour identifier.
    #[error("unknown edge behaviour '{0}'")]
    UnknownEdge(String),
}
