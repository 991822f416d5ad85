//! Small grid harness for rule unit tests.

use tessel_core::TickId;
use tessel_space::{EdgeBehavior, NeighborTable, Shape, Topology};

use crate::neighborhood::Neighborhood;
use crate::rule::{cell_rng, CellRng, Rule};
use crate::surface::CellSurface;

/// A snapshot plus its neighbour table.
pub struct Scene {
    pub table: NeighborTable,
    pub snapshot: Vec<CellSurface>,
}

impl Scene {
    pub fn new(shape: Shape, size: usize, edge: EdgeBehavior, w: usize, h: usize) -> Self {
        let table = NeighborTable::build(Topology::new(shape, size, edge).unwrap(), w, h).unwrap();
        Self {
            table,
            snapshot: vec![CellSurface::default(); w * h],
        }
    }

    pub fn square(size: usize, w: usize, h: usize) -> Self {
        Self::new(Shape::Square, size, EdgeBehavior::Absorb, w, h)
    }

    /// Snapshot the given cells through `rule`.
    pub fn with_cells<R: Rule>(mut self, rule: &R, cells: &[R::Cell]) -> Self {
        self.snapshot = cells.iter().map(|c| rule.surface(c)).collect();
        self
    }

    pub fn hood(&self, index: usize) -> Neighborhood<'_> {
        let t = &self.table;
        Neighborhood::new(
            index,
            t.neighbors(index),
            &self.snapshot,
            t.width(),
            t.height(),
            t.topology().edge(),
            TickId(1),
        )
    }
}

pub fn rng(index: usize) -> CellRng {
    cell_rng(0x5eed, TickId(1), index)
}

/// Seed `layout` through `rule` and snapshot it.
pub fn seeded<R: Rule>(rule: &R, size: usize, w: usize, layout: &[u8]) -> (Scene, Vec<R::Cell>) {
    let cells: Vec<R::Cell> = layout.iter().map(|&s| rule.seed(s)).collect();
    let scene = Scene::square(size, w, layout.len() / w).with_cells(rule, &cells);
    (scene, cells)
}
