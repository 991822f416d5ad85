//! Grid edge (boundary) behaviour.

use std::fmt;
use std::str::FromStr;

use crate::error::SpaceError;

/// How the topology treats offsets that leave the grid.
///
/// # Examples
///
/// ```
/// use tessel_space::{EdgeBehavior, Shape, Topology};
///
/// // Absorb: the corner of a square-4 grid has 2 neighbours.
/// let absorb = Topology::new(Shape::Square, 4, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.indices_for(0, 4, 4).len(), 2);
///
/// // Wrap: every cell has all 4 (torus).
/// let wrap = Topology::new(Shape::Square, 4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.indices_for(0, 4, 4).as_slice(), &[12, 1, 4, 3]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbours are dropped (fewer neighbours at edges).
    #[default]
    Absorb,
    /// Out-of-bounds neighbours wrap to the opposite side (periodic).
    Wrap,
}

impl EdgeBehavior {
    /// Resolve one axis coordinate, `None` when the offset leaves the grid.
    pub fn resolve(self, v: i64, len: usize) -> Option<usize> {
        let len = len as i64;
        match self {
            Self::Absorb => (0..len).contains(&v).then_some(v as usize),
            Self::Wrap => Some(v.rem_euclid(len) as usize),
        }
    }
}

impl fmt::Display for EdgeBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Absorb => "absorb",
            Self::Wrap => "wrap",
        })
    }
}

impl FromStr for EdgeBehavior {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absorb" | "finite" | "bounded" => Ok(Self::Absorb),
            "wrap" | "toroidal" | "torus" => Ok(Self::Wrap),
            other => Err(SpaceError::UnknownEdge(other.to_string())),
        }
    }
}
