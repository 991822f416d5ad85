//! Rotation-symmetric table automata such as Langton's loops.

use std::convert::Infallible;

use indexmap::IndexMap;
use tessel_core::Params;
use tessel_space::offsets::SQUARE_4;
use tessel_space::{Shape, Topology};

use crate::error::RuleError;
use crate::neighborhood::Neighborhood;
use crate::proposal::Proposal;
use crate::rule::{CellRng, Rule};

const LANGTON: &str = include_str!("langton.table");

/// Smallest of the four cyclic rotations of `(n, e, s, w)`, read as a
/// base-8 number.
pub fn min_rotation(around: [u8; 4]) -> u16 {
    (0..4)
        .map(|r| {
            (0..4).fold(0u16, |acc, i| {
                acc * 8 + u16::from(around[(r + i) % 4] & 7)
            })
        })
        .min()
        .unwrap_or(0)
}

fn key(center: u8, around: [u8; 4]) -> u16 {
    (u16::from(center & 7) << 12) | min_rotation(around)
}

/// An 8-state automaton on the von Neumann neighbourhood driven by a
/// transition table.
///
/// Entries are keyed by the centre state and the minimum rotation of the
/// four orthogonal neighbours read clockwise from north, so one entry
/// covers all four orientations. A neighbourhood with no entry leaves the
/// cell unchanged. Missing neighbours at a bounded edge read as 0.
#[derive(Clone, Debug)]
pub struct Loops {
    table: IndexMap<u16, u8>,
}

impl Loops {
    /// Langton's self-reproducing loop.
    pub fn langton() -> Result<Self, RuleError> {
        Self::from_table(LANGTON)
    }

    /// Parse a table of six-digit `CNESWR` entries separated by
    /// whitespace. `#` starts a comment.
    pub fn from_table(text: &str) -> Result<Self, RuleError> {
        let mut table = IndexMap::new();
        for (n, line) in text.lines().enumerate() {
            let line = line.split('#').next().unwrap_or_default();
            for entry in line.split_whitespace() {
                let digits: Vec<u8> = entry
                    .bytes()
                    .map(|b| b.wrapping_sub(b'0'))
                    .take_while(|&d| d < 8)
                    .collect();
                let [c, north, east, south, west, result] = digits[..] else {
                    return Err(RuleError::TableEntry {
                        line: n + 1,
                        entry: entry.to_string(),
                    });
                };
                if entry.len() != 6 {
                    return Err(RuleError::TableEntry {
                        line: n + 1,
                        entry: entry.to_string(),
                    });
                }
                let k = key(c, [north, east, south, west]);
                match table.insert(k, result) {
                    Some(existing) if existing != result => {
                        return Err(RuleError::ConflictingTransition {
                            line: n + 1,
                            entry: entry.to_string(),
                            existing,
                        });
                    }
                    _ => {}
                }
            }
        }
        Ok(Self { table })
    }

    /// Number of distinct rotated entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True for an empty table.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Next state for `center` surrounded by `(n, e, s, w)`, if the table
    /// has an entry for it.
    pub fn lookup(&self, center: u8, around: [u8; 4]) -> Option<u8> {
        self.table.get(&key(center, around)).copied()
    }
}

impl Rule for Loops {
    type Cell = u8;
    type Occupant = Infallible;

    const NAME: &'static str = "loops";
    const MAX_STATE: u8 = 7;

    fn from_params(_params: &Params) -> Result<Self, RuleError> {
        Self::langton()
    }

    fn seed(&self, state: u8) -> u8 {
        state
    }

    fn state(&self, cell: &u8) -> u8 {
        *cell
    }

    fn propose(&self, cell: &u8, hood: &Neighborhood<'_>, _rng: &mut CellRng) -> Proposal<u8, Infallible> {
        let around = SQUARE_4.map(|offset| hood.toward(offset).map_or(0, |s| s.state));
        Proposal::stay(self.lookup(*cell, around).unwrap_or(*cell))
    }

    fn supports(&self, topology: Topology) -> bool {
        topology.shape() == Shape::Square && topology.neighborhood() == 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{rng, Scene};
    use proptest::prelude::*;
    use tessel_space::EdgeBehavior;

    fn centre_next(rule: &Loops, center: u8, around: [u8; 4]) -> u8 {
        // Plus shape in a 3x3 grid: N=1, E=5, S=7, W=3.
        let mut cells = [0u8; 9];
        cells[4] = center;
        for (i, &s) in [1, 5, 7, 3].iter().zip(&around) {
            cells[*i] = s;
        }
        let scene = Scene::square(4, 3, 3).with_cells(rule, &cells);
        rule.propose(&cells[4], &scene.hood(4), &mut rng(4)).next
    }

    #[test]
    fn langton_table_parses() {
        let rule = Loops::langton().unwrap();
        assert!(rule.len() > 200);
        assert_eq!(rule.lookup(0, [0, 0, 0, 0]), Some(0));
    }

    #[test]
    fn simple_entries() {
        let rule = Loops::langton().unwrap();
        // "000012": quiescent cell with a 1 to the west becomes 2.
        assert_eq!(centre_next(&rule, 0, [0, 0, 0, 1]), 2);
        assert_eq!(centre_next(&rule, 0, [1, 0, 0, 0]), 2);
    }

    #[test]
    fn missing_entry_keeps_state() {
        let rule = Loops::from_table("000012").unwrap();
        assert_eq!(centre_next(&rule, 5, [6, 6, 6, 6]), 5);
    }

    #[test]
    fn min_rotation_examples() {
        assert_eq!(min_rotation([0, 0, 0, 1]), 1);
        assert_eq!(min_rotation([1, 0, 0, 0]), 1);
        assert_eq!(min_rotation([2, 1, 0, 0]), min_rotation([0, 0, 2, 1]));
    }

    #[test]
    fn malformed_and_conflicting_tables() {
        assert!(matches!(
            Loops::from_table("00001"),
            Err(RuleError::TableEntry { line: 1, .. })
        ));
        assert!(matches!(
            Loops::from_table("# header\n000089"),
            Err(RuleError::TableEntry { line: 2, .. })
        ));
        assert!(matches!(
            Loops::from_table("0000123"),
            Err(RuleError::TableEntry { .. })
        ));
        assert_eq!(
            Loops::from_table("000012 010003").unwrap_err(),
            RuleError::ConflictingTransition {
                line: 1,
                entry: "010003".into(),
                existing: 2
            }
        );
    }

    #[test]
    fn square_four_only() {
        let rule = Loops::langton().unwrap();
        let ok = Topology::new(Shape::Square, 4, EdgeBehavior::Absorb).unwrap();
        let moore = Topology::new(Shape::Square, 8, EdgeBehavior::Absorb).unwrap();
        assert!(rule.supports(ok));
        assert!(!rule.supports(moore));
    }

    proptest! {
        #[test]
        fn next_state_is_rotation_invariant(
            center in 0u8..8,
            around in prop::array::uniform4(0u8..8),
            turns in 1usize..4,
        ) {
            let rule = Loops::langton().unwrap();
            let mut rotated = around;
            rotated.rotate_left(turns);
            prop_assert_eq!(
                centre_next(&rule, center, around),
                centre_next(&rule, center, rotated)
            );
        }
    }
}
