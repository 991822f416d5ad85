//! Tessellation families.

use std::fmt;
use std::str::FromStr;

use crate::error::SpaceError;

/// The tile shape a grid is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Square tiles; neighbourhood 4 or 8.
    Square,
    /// Alternating point-up / point-down triangles; neighbourhood 3 or 12.
    Triangle,
    /// Hexagons in offset rows, corners up; neighbourhood 6.
    Hexagon,
}

impl Shape {
    /// Neighbourhood sizes this shape supports.
    pub fn supported_neighborhoods(self) -> &'static [usize] {
        match self {
            Self::Square => &[4, 8],
            Self::Triangle => &[3, 12],
            Self::Hexagon => &[6],
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Hexagon => "hexagon",
        })
    }
}

impl FromStr for Shape {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(Self::Square),
            "triangle" => Ok(Self::Triangle),
            "hexagon" | "hex" => Ok(Self::Hexagon),
            other => Err(SpaceError::UnknownShape(other.to_string())),
        }
    }
}
