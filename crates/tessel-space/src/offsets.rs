//! Fixed `(row, col)` offset tables for every supported shape/size pair.
//!
//! Orders are clockwise starting from north (or the first cell of the
//! row above), so rules that care about direction can rely on them.

use crate::shape::Shape;

/// A `(d_row, d_col)` displacement from the centre cell.
pub type Offset = (i8, i8);

/// N, E, S, W.
pub const SQUARE_4: [Offset; 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// N, NE, E, SE, S, SW, W, NW.
pub const SQUARE_8: [Offset; 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Point-up triangle: shares its horizontal edge with the cell below.
pub const TRIANGLE_UP_3: [Offset; 3] = [(0, 1), (1, 0), (0, -1)];

/// Point-down triangle: shares its horizontal edge with the cell above.
pub const TRIANGLE_DOWN_3: [Offset; 3] = [(-1, 0), (0, 1), (0, -1)];

/// Every triangle touching a point-up triangle at an edge or vertex.
pub const TRIANGLE_UP_12: [Offset; 12] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (0, 2),
    (1, 2),
    (1, 1),
    (1, 0),
    (1, -1),
    (1, -2),
    (0, -2),
    (0, -1),
];

/// Every triangle touching a point-down triangle at an edge or vertex.
pub const TRIANGLE_DOWN_12: [Offset; 12] = [
    (-1, -2),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (-1, 2),
    (0, 1),
    (0, 2),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -2),
    (0, -1),
];

/// Hexagon on an even row: NW, NE, E, SE, SW, W.
pub const HEX_EVEN_6: [Offset; 6] = [(-1, -1), (-1, 0), (0, 1), (1, 0), (1, -1), (0, -1)];

/// Hexagon on an odd row (shifted half a cell right): NW, NE, E, SE, SW, W.
pub const HEX_ODD_6: [Offset; 6] = [(-1, 0), (-1, 1), (0, 1), (1, 1), (1, 0), (0, -1)];

/// Offsets for one cell, or an empty slice for an unsupported pair.
///
/// Triangles choose by `(row + col) % 2` (even is point-up); hexagons by
/// row parity.
pub fn for_cell(shape: Shape, size: usize, row: usize, col: usize) -> &'static [Offset] {
    match (shape, size) {
        (Shape::Square, 4) => &SQUARE_4,
        (Shape::Square, 8) => &SQUARE_8,
        (Shape::Triangle, 3) if (row + col) % 2 == 0 => &TRIANGLE_UP_3,
        (Shape::Triangle, 3) => &TRIANGLE_DOWN_3,
        (Shape::Triangle, 12) if (row + col) % 2 == 0 => &TRIANGLE_UP_12,
        (Shape::Triangle, 12) => &TRIANGLE_DOWN_12,
        (Shape::Hexagon, 6) if row % 2 == 0 => &HEX_EVEN_6,
        (Shape::Hexagon, 6) => &HEX_ODD_6,
        _ => &[],
    }
}

/// Largest `|d_row|` and `|d_col|` over every orientation of a pair.
pub fn reach(shape: Shape, size: usize) -> (usize, usize) {
    [(0, 0), (0, 1), (1, 0), (1, 1)]
        .into_iter()
        .flat_map(|(row, col)| for_cell(shape, size, row, col))
        .fold((0, 0), |(r, c), &(dr, dc)| {
            (
                r.max(usize::from(dr.unsigned_abs())),
                c.max(usize::from(dc.unsigned_abs())),
            )
        })
}
