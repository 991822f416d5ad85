//! Index arithmetic from a flat cell index to its neighbour indices.

use smallvec::SmallVec;

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::offsets::{self, Offset};
use crate::shape::Shape;

/// One resolved neighbour of a cell: its flat index and the offset that
/// reached it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Row-major index of the neighbour.
    pub index: usize,
    /// `(d_row, d_col)` from the centre cell.
    pub offset: Offset,
}

/// A validated `(shape, neighbourhood, edge)` triple.
///
/// Construction fails for pairs the shape has no offset set for, so every
/// `Topology` value yields a non-empty neighbourhood for interior cells.
///
/// # Examples
///
/// ```
/// use tessel_space::{EdgeBehavior, Shape, Topology};
///
/// let moore = Topology::new(Shape::Square, 8, EdgeBehavior::Absorb).unwrap();
/// // Centre of a 3x3 grid sees all 8 others.
/// assert_eq!(moore.indices_for(4, 3, 3).len(), 8);
/// // A left-column cell never wraps onto the previous row.
/// assert!(!moore.indices_for(3, 3, 3).contains(&2));
///
/// assert!(Topology::new(Shape::Hexagon, 8, EdgeBehavior::Absorb).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Topology {
    shape: Shape,
    neighborhood: usize,
    edge: EdgeBehavior,
}

impl Topology {
    /// Validate a shape/neighbourhood pair.
    pub fn new(shape: Shape, neighborhood: usize, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if !shape.supported_neighborhoods().contains(&neighborhood) {
            return Err(SpaceError::UnsupportedNeighborhood {
                shape,
                size: neighborhood,
            });
        }
        Ok(Self {
            shape,
            neighborhood,
            edge,
        })
    }

    /// Tile shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Declared neighbourhood size.
    pub fn neighborhood(&self) -> usize {
        self.neighborhood
    }

    /// Edge behaviour.
    pub fn edge(&self) -> EdgeBehavior {
        self.edge
    }

    /// Check that a `width × height` grid can carry this topology.
    ///
    /// Rejects empty or overflowing grids and, for wrapped edges, axes too
    /// short for the offset reach or of the wrong parity for alternating
    /// orientations.
    pub fn check_dimensions(&self, width: usize, height: usize) -> Result<(), SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptyGrid { width, height });
        }
        if width.checked_mul(height).is_none() || i64::try_from(width.max(height)).is_err() {
            return Err(SpaceError::GridTooLarge { width, height });
        }
        if self.edge == EdgeBehavior::Wrap {
            let (row_reach, col_reach) = offsets::reach(self.shape, self.neighborhood);
            for (axis, len, reach) in [("width", width, col_reach), ("height", height, row_reach)] {
                let min = 2 * reach + 1;
                if len < min {
                    return Err(SpaceError::WrapTooSmall { axis, len, min });
                }
            }
            let (even_width, even_height) = match self.shape {
                Shape::Square => (false, false),
                Shape::Triangle => (true, true),
                Shape::Hexagon => (false, true),
            };
            for (axis, len, needs_even) in [("width", width, even_width), ("height", height, even_height)] {
                if needs_even && len % 2 != 0 {
                    return Err(SpaceError::WrapParity {
                        shape: self.shape,
                        axis,
                        len,
                    });
                }
            }
        }
        Ok(())
    }

    /// Unclipped offset set for `index`, i.e. what the cell would see on an
    /// unbounded grid.
    pub fn offsets_at(&self, index: usize, width: usize) -> &'static [Offset] {
        offsets::for_cell(self.shape, self.neighborhood, index / width, index % width)
    }

    /// Resolved neighbours of `index`, in offset order.
    ///
    /// Under [`EdgeBehavior::Absorb`] any offset whose row or column leaves
    /// the grid is dropped, so a cell in column 0 never sees the last
    /// cell of the previous row as its western neighbour.
    pub fn slots(&self, index: usize, width: usize, height: usize) -> SmallVec<[Slot; 12]> {
        let row = (index / width) as i64;
        let col = (index % width) as i64;
        self.offsets_at(index, width)
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = self.edge.resolve(row + i64::from(dr), height)?;
                let c = self.edge.resolve(col + i64::from(dc), width)?;
                Some(Slot {
                    index: r * width + c,
                    offset: (dr, dc),
                })
            })
            .collect()
    }

    /// Resolved neighbour indices of `index`, in offset order.
    pub fn indices_for(&self, index: usize, width: usize, height: usize) -> SmallVec<[usize; 12]> {
        self.slots(index, width, height)
            .into_iter()
            .map(|s| s.index)
            .collect()
    }
}

/// Neighbour indices of `index` on a bounded (absorbing) grid.
///
/// Returns an empty sequence for an unsupported `(shape, neighborhood)`
/// pair or an index outside `[0, width·height)`; callers building a grid
/// must treat the former as a configuration error (see [`Topology::new`]).
pub fn indices_for(
    shape: Shape,
    neighborhood: usize,
    index: usize,
    width: usize,
    height: usize,
) -> SmallVec<[usize; 12]> {
    let in_grid = width > 0 && index < width.saturating_mul(height);
    match Topology::new(shape, neighborhood, EdgeBehavior::Absorb) {
        Ok(topology) if in_grid => topology.indices_for(index, width, height),
        _ => SmallVec::new(),
    }
}

/// Whether the triangle at `index` points up (`(row + col)` even).
pub fn is_triangle_top_pointy(index: usize, width: usize) -> bool {
    (index / width + index % width) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square(size: usize) -> Topology {
        Topology::new(Shape::Square, size, EdgeBehavior::Absorb).unwrap()
    }

    #[test]
    fn unsupported_pairs_are_rejected() {
        for (shape, size) in [
            (Shape::Square, 6),
            (Shape::Triangle, 4),
            (Shape::Hexagon, 4),
            (Shape::Square, 0),
        ] {
            assert_eq!(
                Topology::new(shape, size, EdgeBehavior::Absorb),
                Err(SpaceError::UnsupportedNeighborhood { shape, size })
            );
            assert!(indices_for(shape, size, 0, 4, 4).is_empty());
        }
    }

    #[test]
    fn square4_corner_and_interior() {
        let t = square(4);
        assert_eq!(t.indices_for(0, 3, 3).as_slice(), &[1, 3]);
        assert_eq!(t.indices_for(4, 3, 3).as_slice(), &[1, 5, 7, 3]);
    }

    #[test]
    fn left_neighbour_never_wraps_to_previous_row() {
        let t = square(4);
        // Index 3 is row 1, column 0 of a 3-wide grid; index 2 ends row 0.
        assert!(!t.indices_for(3, 3, 3).contains(&2));
        // Index 2 ends row 0; index 3 starts row 1.
        assert!(!t.indices_for(2, 3, 3).contains(&3));
    }

    #[test]
    fn square8_edge_counts() {
        let t = square(8);
        assert_eq!(t.indices_for(0, 5, 5).len(), 3);
        assert_eq!(t.indices_for(2, 5, 5).len(), 5);
        assert_eq!(t.indices_for(12, 5, 5).len(), 8);
    }

    #[test]
    fn triangle_orientation_alternates_along_a_row() {
        let pointy: Vec<bool> = (0..4).map(|i| is_triangle_top_pointy(i, 4)).collect();
        assert_eq!(pointy, [true, false, true, false]);
        // Second row starts point-down on an even width.
        assert!(!is_triangle_top_pointy(4, 4));
    }

    #[test]
    fn triangle3_up_looks_down_and_down_looks_up() {
        let t = Topology::new(Shape::Triangle, 3, EdgeBehavior::Absorb).unwrap();
        // 4x3 grid; index 5 is (1, 1): point-up.
        assert_eq!(t.indices_for(5, 4, 3).as_slice(), &[6, 9, 4]);
        // index 6 is (1, 2): point-down.
        assert_eq!(t.indices_for(6, 4, 3).as_slice(), &[2, 7, 5]);
    }

    #[test]
    fn single_row_triangle_has_only_side_neighbours() {
        let t = Topology::new(Shape::Triangle, 3, EdgeBehavior::Absorb).unwrap();
        assert_eq!(t.indices_for(0, 4, 1).as_slice(), &[1]);
        assert_eq!(t.indices_for(1, 4, 1).as_slice(), &[2, 0]);
    }

    #[test]
    fn hexagon_rows_alternate_offsets() {
        let t = Topology::new(Shape::Hexagon, 6, EdgeBehavior::Absorb).unwrap();
        // 5x5: (2, 2) is on an even row.
        assert_eq!(t.indices_for(12, 5, 5).as_slice(), &[6, 7, 13, 17, 16, 11]);
        // (1, 2) is on an odd row.
        assert_eq!(t.indices_for(7, 5, 5).as_slice(), &[2, 3, 8, 13, 12, 6]);
    }

    #[test]
    fn wrap_square8_corner_sees_opposite_corner() {
        let t = Topology::new(Shape::Square, 8, EdgeBehavior::Wrap).unwrap();
        let n = t.indices_for(0, 4, 4);
        assert_eq!(n.len(), 8);
        assert!(n.contains(&15));
    }

    #[test]
    fn wrap_dimension_checks() {
        let tri = Topology::new(Shape::Triangle, 12, EdgeBehavior::Wrap).unwrap();
        assert_eq!(
            tri.check_dimensions(4, 4),
            Err(SpaceError::WrapTooSmall {
                axis: "width",
                len: 4,
                min: 5
            })
        );
        assert!(matches!(
            tri.check_dimensions(7, 4),
            Err(SpaceError::WrapParity { axis: "width", .. })
        ));
        assert!(tri.check_dimensions(6, 4).is_ok());

        let hex = Topology::new(Shape::Hexagon, 6, EdgeBehavior::Wrap).unwrap();
        assert!(matches!(
            hex.check_dimensions(4, 5),
            Err(SpaceError::WrapParity { axis: "height", .. })
        ));
        // Absorb has no such constraints.
        let hex = Topology::new(Shape::Hexagon, 6, EdgeBehavior::Absorb).unwrap();
        assert!(hex.check_dimensions(1, 1).is_ok());
    }

    #[test]
    fn empty_grid_rejected() {
        assert_eq!(
            square(4).check_dimensions(0, 3),
            Err(SpaceError::EmptyGrid {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn out_of_grid_index_yields_nothing() {
        assert!(indices_for(Shape::Square, 4, 9, 3, 3).is_empty());
        assert!(indices_for(Shape::Square, 4, 0, 0, 3).is_empty());
    }

    proptest! {
        #[test]
        fn square8_interior_has_eight_distinct_in_bounds(
            width in 3usize..12,
            height in 3usize..12,
            r in 1usize..11,
            c in 1usize..11,
        ) {
            let r = 1 + r % (height - 2);
            let c = 1 + c % (width - 2);
            let index = r * width + c;
            let n = indices_for(Shape::Square, 8, index, width, height);
            prop_assert_eq!(n.len(), 8);
            let mut sorted = n.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), 8);
            prop_assert!(n.iter().all(|&i| i < width * height && i != index));
        }
    }
}
