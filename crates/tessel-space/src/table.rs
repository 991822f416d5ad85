//! Per-cell neighbour cache built once at grid construction.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::topology::{Slot, Topology};

/// Neighbour slots for every cell of a `width × height` grid.
///
/// Stored flat: `starts[i]..starts[i + 1]` is the range of `slots`
/// belonging to cell `i`. The table never changes after construction;
/// a grid that changes shape builds a new one.
#[derive(Clone, Debug)]
pub struct NeighborTable {
    topology: Topology,
    width: usize,
    height: usize,
    starts: Vec<usize>,
    slots: Vec<Slot>,
}

impl NeighborTable {
    /// Materialise the neighbours of every cell.
    ///
    /// Fails if the dimensions cannot carry the topology, or if any cell's
    /// offset set disagrees with the declared neighbourhood size. With
    /// [`EdgeBehavior::Wrap`] the resolved count must match as well, since
    /// no offset is ever dropped on a torus.
    pub fn build(topology: Topology, width: usize, height: usize) -> Result<Self, SpaceError> {
        topology.check_dimensions(width, height)?;
        let cell_count = width * height;
        let declared = topology.neighborhood();
        let mut starts = Vec::with_capacity(cell_count + 1);
        let mut slots = Vec::with_capacity(cell_count * declared);
        starts.push(0);
        for index in 0..cell_count {
            let raw = topology.offsets_at(index, width).len();
            let resolved = topology.slots(index, width, height);
            let actual = match topology.edge() {
                EdgeBehavior::Absorb => raw,
                EdgeBehavior::Wrap => resolved.len(),
            };
            if actual != declared {
                return Err(SpaceError::NeighborhoodMismatch {
                    shape: topology.shape(),
                    declared,
                    actual,
                    index,
                });
            }
            slots.extend(resolved);
            starts.push(slots.len());
        }
        Ok(Self {
            topology,
            width,
            height,
            starts,
            slots,
        })
    }

    /// Neighbour slots of `index`, in offset order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= cell_count()`.
    pub fn neighbors(&self, index: usize) -> &[Slot] {
        &self.slots[self.starts[index]..self.starts[index + 1]]
    }

    /// Neighbour indices of `index`, in offset order.
    pub fn indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors(index).iter().map(|s| s.index)
    }

    /// The topology this table was built from.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Grid width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Largest neighbour count of any cell.
    pub fn max_degree(&self) -> usize {
        self.starts
            .windows(2)
            .map(|w| w[1] - w[0])
            .max()
            .unwrap_or(0)
    }
}
