//! Read-only view of the pre-tick snapshot around one cell.

use rand::Rng;
use smallvec::SmallVec;
use tessel_core::TickId;
use tessel_space::{EdgeBehavior, Offset, Slot};

use crate::surface::CellSurface;

/// What a cell may observe while proposing.
///
/// Everything here borrows the immutable snapshot taken before the
/// proposal phase, so no proposal can see another cell's update from the
/// same tick. Random choices go through the caller's RNG and therefore
/// stay reproducible for a given seed.
#[derive(Clone, Copy, Debug)]
pub struct Neighborhood<'a> {
    center: usize,
    slots: &'a [Slot],
    snapshot: &'a [CellSurface],
    width: usize,
    height: usize,
    edge: EdgeBehavior,
    tick: TickId,
}

impl<'a> Neighborhood<'a> {
    /// Build the view for `center`.
    ///
    /// `snapshot` must be the whole grid in row-major order and `slots`
    /// the centre's neighbours as produced by a
    /// [`NeighborTable`](tessel_space::NeighborTable) for the same grid.
    pub fn new(
        center: usize,
        slots: &'a [Slot],
        snapshot: &'a [CellSurface],
        width: usize,
        height: usize,
        edge: EdgeBehavior,
        tick: TickId,
    ) -> Self {
        debug_assert_eq!(snapshot.len(), width * height);
        Self {
            center,
            slots,
            snapshot,
            width,
            height,
            edge,
            tick,
        }
    }

    /// Index of the proposing cell.
    pub fn center(&self) -> usize {
        self.center
    }

    /// The tick being computed.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Grid `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of neighbours.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the cell has no neighbours (a 1x1 grid).
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The centre cell's own surface.
    pub fn own(&self) -> &'a CellSurface {
        &self.snapshot[self.center]
    }

    /// Neighbour slots in topology order.
    pub fn slots(&self) -> &'a [Slot] {
        self.slots
    }

    /// Neighbour surfaces in topology order, with their indices.
    pub fn surfaces(&self) -> impl Iterator<Item = (usize, &'a CellSurface)> + 'a {
        let (slots, snapshot) = (self.slots, self.snapshot);
        slots.iter().map(move |s| (s.index, &snapshot[s.index]))
    }

    /// Neighbour states in topology order.
    pub fn states(&self) -> impl Iterator<Item = u8> + 'a {
        self.surfaces().map(|(_, s)| s.state)
    }

    /// How many neighbours are in `state`.
    pub fn count(&self, state: u8) -> usize {
        self.states().filter(|&s| s == state).count()
    }

    /// Whether any neighbour is in `state`.
    pub fn any(&self, state: u8) -> bool {
        self.states().any(|s| s == state)
    }

    /// The neighbour reached by `offset`, if the topology has one there.
    pub fn toward(&self, offset: Offset) -> Option<&'a CellSurface> {
        self.slots
            .iter()
            .find(|s| s.offset == offset)
            .map(|s| &self.snapshot[s.index])
    }

    /// The whole pre-tick snapshot, for rules that search beyond their
    /// neighbourhood.
    pub fn snapshot(&self) -> &'a [CellSurface] {
        self.snapshot
    }

    /// A uniformly random neighbour satisfying `eligible`.
    pub fn pick<R, F>(&self, rng: &mut R, eligible: F) -> Option<usize>
    where
        R: Rng + ?Sized,
        F: Fn(&CellSurface) -> bool,
    {
        let candidates: SmallVec<[usize; 12]> = self
            .surfaces()
            .filter(|(_, s)| eligible(*s))
            .map(|(i, _)| i)
            .collect();
        match candidates.len() {
            0 => None,
            n => Some(candidates[rng.random_range(0..n)]),
        }
    }

    /// A uniformly random cell anywhere on the grid, other than the centre,
    /// satisfying `eligible`.
    pub fn pick_anywhere<R, F>(&self, rng: &mut R, eligible: F) -> Option<usize>
    where
        R: Rng + ?Sized,
        F: Fn(&CellSurface) -> bool,
    {
        // Single-pass reservoir sample: no allocation per proposing cell.
        let mut chosen = None;
        let mut seen = 0usize;
        for (i, s) in self.snapshot.iter().enumerate() {
            if i == self.center || !eligible(s) {
                continue;
            }
            seen += 1;
            if rng.random_range(0..seen) == 0 {
                chosen = Some(i);
            }
        }
        chosen
    }

    /// The eligible neighbour with the highest `score`, ties broken
    /// uniformly at random.
    ///
    /// This is the grid's steering service for rules whose agents follow
    /// accumulated trails rather than choosing a direction themselves.
    pub fn strongest<R, E, S>(&self, rng: &mut R, eligible: E, score: S) -> Option<usize>
    where
        R: Rng + ?Sized,
        E: Fn(&CellSurface) -> bool,
        S: Fn(&CellSurface) -> f32,
    {
        let mut best: Option<(usize, f32)> = None;
        let mut ties = 0usize;
        for (i, s) in self.surfaces().filter(|(_, s)| eligible(*s)) {
            let value = score(s);
            match best {
                Some((_, top)) if value < top => {}
                Some((_, top)) if value == top => {
                    ties += 1;
                    if rng.random_range(0..ties) == 0 {
                        best = Some((i, value));
                    }
                }
                _ => {
                    best = Some((i, value));
                    ties = 1;
                }
            }
        }
        best.map(|(i, _)| i)
    }

    /// Cells along a straight line from the centre in direction `step`,
    /// as `(distance, index)` for distances `1..=len`.
    ///
    /// Stops at the grid boundary under [`EdgeBehavior::Absorb`], and
    /// before returning to the centre on a torus.
    pub fn ray(&self, step: Offset, len: usize) -> impl Iterator<Item = (usize, usize)> + 'a {
        let (center, width, height, edge) = (self.center, self.width, self.height, self.edge);
        let (row, col) = ((center / width) as i64, (center % width) as i64);
        let (dr, dc) = (i64::from(step.0), i64::from(step.1));
        (1..=len).map_while(move |d| {
            let r = edge.resolve(row + dr * d as i64, height)?;
            let c = edge.resolve(col + dc * d as i64, width)?;
            let index = r * width + c;
            (index != center).then_some((d, index))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::cell_rng;
    use tessel_space::{NeighborTable, Shape, Topology};

    fn table(edge: EdgeBehavior, w: usize, h: usize) -> NeighborTable {
        NeighborTable::build(Topology::new(Shape::Square, 4, edge).unwrap(), w, h).unwrap()
    }

    fn surfaces(states: &[u8]) -> Vec<CellSurface> {
        states.iter().map(|&s| CellSurface::of(s)).collect()
    }

    #[test]
    fn counts_and_direction_lookup() {
        let t = table(EdgeBehavior::Absorb, 3, 3);
        let snap = surfaces(&[0, 1, 0, 2, 0, 1, 0, 1, 0]);
        let hood = Neighborhood::new(4, t.neighbors(4), &snap, 3, 3, EdgeBehavior::Absorb, TickId(1));
        assert_eq!(hood.states().collect::<Vec<_>>(), [1, 1, 1, 2]);
        assert_eq!(hood.count(1), 3);
        assert!(hood.any(2));
        assert_eq!(hood.toward((0, -1)).map(|s| s.state), Some(2));
        // Corner cell has no northern neighbour.
        let corner = Neighborhood::new(0, t.neighbors(0), &snap, 3, 3, EdgeBehavior::Absorb, TickId(1));
        assert!(corner.toward((-1, 0)).is_none());
    }

    #[test]
    fn pick_only_returns_eligible_neighbours() {
        let t = table(EdgeBehavior::Absorb, 3, 3);
        let snap = surfaces(&[0, 1, 0, 0, 5, 1, 0, 0, 0]);
        let hood = Neighborhood::new(4, t.neighbors(4), &snap, 3, 3, EdgeBehavior::Absorb, TickId(1));
        for stream in 0..20 {
            let mut rng = cell_rng(9, TickId(1), stream);
            let pick = hood.pick(&mut rng, |s| s.state == 1).unwrap();
            assert!(pick == 1 || pick == 5);
        }
        let mut rng = cell_rng(9, TickId(1), 0);
        assert_eq!(hood.pick(&mut rng, |s| s.state == 7), None);
    }

    #[test]
    fn pick_anywhere_skips_centre() {
        let t = table(EdgeBehavior::Absorb, 4, 1);
        let snap = surfaces(&[0, 1, 1, 1]);
        let hood = Neighborhood::new(0, t.neighbors(0), &snap, 4, 1, EdgeBehavior::Absorb, TickId(1));
        let mut rng = cell_rng(1, TickId(1), 0);
        assert_eq!(hood.pick_anywhere(&mut rng, |s| s.state == 0), None);
        let snap = surfaces(&[0, 1, 1, 0]);
        let hood = Neighborhood::new(0, t.neighbors(0), &snap, 4, 1, EdgeBehavior::Absorb, TickId(1));
        assert_eq!(hood.pick_anywhere(&mut rng, |s| s.state == 0), Some(3));
    }

    #[test]
    fn strongest_prefers_highest_score() {
        let t = table(EdgeBehavior::Absorb, 3, 3);
        let mut snap = surfaces(&[0; 9]);
        snap[1].food_trail = 2.0;
        snap[5].food_trail = 7.0;
        snap[7].food_trail = 9.0;
        snap[7].state = 4;
        let hood = Neighborhood::new(4, t.neighbors(4), &snap, 3, 3, EdgeBehavior::Absorb, TickId(1));
        let mut rng = cell_rng(3, TickId(1), 4);
        // Index 7 scores higher but is not eligible.
        assert_eq!(
            hood.strongest(&mut rng, |s| s.state == 0, |s| s.food_trail),
            Some(5)
        );
    }

    #[test]
    fn rays_stop_at_edges_and_before_wrapping_home() {
        let t = table(EdgeBehavior::Absorb, 5, 5);
        let snap = surfaces(&[0; 25]);
        let hood = Neighborhood::new(6, t.neighbors(6), &snap, 5, 5, EdgeBehavior::Absorb, TickId(1));
        assert_eq!(hood.ray((0, 1), 9).collect::<Vec<_>>(), [(1, 7), (2, 8), (3, 9)]);
        assert_eq!(hood.ray((-1, 0), 9).collect::<Vec<_>>(), [(1, 1)]);

        let t = table(EdgeBehavior::Wrap, 4, 4);
        let snap = surfaces(&[0; 16]);
        let hood = Neighborhood::new(0, t.neighbors(0), &snap, 4, 4, EdgeBehavior::Wrap, TickId(1));
        assert_eq!(
            hood.ray((0, -1), 9).collect::<Vec<_>>(),
            [(1, 3), (2, 2), (3, 1)]
        );
    }
}
