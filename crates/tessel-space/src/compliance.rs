//! Neighbour table compliance test helpers.
//!
//! These functions verify that a [`NeighborTable`] satisfies the
//! invariants the engine relies on. Reused across the shape tests.

use crate::edge::EdgeBehavior;
use crate::table::NeighborTable;
use indexmap::IndexSet;

/// Every neighbour index is inside the grid and is not the centre.
pub fn assert_in_bounds_and_not_self(table: &NeighborTable) {
    let n = table.cell_count();
    for i in 0..n {
        for j in table.indices(i) {
            assert!(j < n, "cell {i}: neighbour {j} out of bounds ({n} cells)");
            assert_ne!(i, j, "cell {i} lists itself as a neighbour");
        }
    }
}

/// No cell lists the same neighbour twice.
pub fn assert_distinct(table: &NeighborTable) {
    for i in 0..table.cell_count() {
        let unique: IndexSet<usize> = table.indices(i).collect();
        assert_eq!(
            unique.len(),
            table.neighbors(i).len(),
            "cell {i} has duplicate neighbours: {:?}",
            table.neighbors(i)
        );
    }
}

/// `b in N(a)` implies `a in N(b)`.
pub fn assert_symmetric(table: &NeighborTable) {
    for a in 0..table.cell_count() {
        for b in table.indices(a) {
            assert!(
                table.indices(b).any(|x| x == a),
                "neighbour symmetry violated: {b} in N({a}) but {a} not in N({b})"
            );
        }
    }
}

/// Each slot's index is the centre displaced by its offset.
pub fn assert_offsets_consistent(table: &NeighborTable) {
    let (w, h) = (table.width() as i64, table.height() as i64);
    let wrap = table.topology().edge() == EdgeBehavior::Wrap;
    for i in 0..table.cell_count() {
        let (r, c) = ((i as i64) / w, (i as i64) % w);
        for slot in table.neighbors(i) {
            let (mut nr, mut nc) = (r + i64::from(slot.offset.0), c + i64::from(slot.offset.1));
            if wrap {
                nr = nr.rem_euclid(h);
                nc = nc.rem_euclid(w);
            }
            assert_eq!(
                slot.index as i64,
                nr * w + nc,
                "cell {i}: slot {slot:?} does not match its offset"
            );
        }
    }
}

/// Cells whose whole offset set fits in the grid see exactly the declared
/// number of neighbours; on a torus that is every cell.
pub fn assert_full_neighbourhoods(table: &NeighborTable) {
    let topology = table.topology();
    let (w, h) = (table.width() as i64, table.height() as i64);
    for i in 0..table.cell_count() {
        let (r, c) = ((i as i64) / w, (i as i64) % w);
        let fits = topology
            .offsets_at(i, table.width())
            .iter()
            .all(|&(dr, dc)| {
                let (nr, nc) = (r + i64::from(dr), c + i64::from(dc));
                (0..h).contains(&nr) && (0..w).contains(&nc)
            });
        if fits || topology.edge() == EdgeBehavior::Wrap {
            assert_eq!(
                table.neighbors(i).len(),
                topology.neighborhood(),
                "cell {i} should have a full neighbourhood"
            );
        }
    }
}

/// Two builds with the same inputs produce the same table.
pub fn assert_deterministic(table: &NeighborTable) {
    let again = NeighborTable::build(table.topology(), table.width(), table.height())
        .expect("rebuild of a valid table should succeed");
    for i in 0..table.cell_count() {
        assert_eq!(table.neighbors(i), again.neighbors(i));
    }
}

/// Run all compliance checks on a table.
pub fn run_full_compliance(table: &NeighborTable) {
    assert_in_bounds_and_not_self(table);
    assert_distinct(table);
    assert_symmetric(table);
    assert_offsets_consistent(table);
    assert_full_neighbourhoods(table);
    assert_deterministic(table);
}
