//! Cell transition rules for Tessel grids.
//!
//! Every automaton is a [`Rule`]: a stateless description of how one cell
//! turns into its next value given a read-only [`Neighborhood`] of the
//! pre-tick snapshot. Passive rules only return a next value; mobile
//! rules may also attach a [`Migration`] that the engine arbitrates.
//!
//! # Rule variants
//!
//! | Variant | States | Moves |
//! |---------|--------|-------|
//! | [`Life`] | dead, alive | no |
//! | [`Fire`] | empty, tree, burning | no |
//! | [`Percolation`] | blocked, open, percolated | no |
//! | [`RockPaperScissors`] | rock, paper, scissors | no |
//! | [`Loops`] | 0–7 | no |
//! | [`Segregation`] | empty, group A, group B | anywhere |
//! | [`WaTor`] | water, fish, shark | neighbours |
//! | [`Sugarscape`] | patch, agent | along rays |
//! | [`Foraging`] | soil, nest, food, searching, carrying | neighbours |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod fire;
pub mod foraging;
pub mod kind;
pub mod life;
pub mod loops;
pub mod neighborhood;
pub mod percolation;
pub mod proposal;
pub mod rps;
pub mod rule;
pub mod segregation;
pub mod sugarscape;
pub mod surface;
pub mod wator;

#[cfg(test)]
pub(crate) mod testing;

pub use error::RuleError;
pub use fire::Fire;
pub use foraging::Foraging;
pub use kind::RuleKind;
pub use life::Life;
pub use loops::Loops;
pub use neighborhood::Neighborhood;
pub use percolation::Percolation;
pub use proposal::{Migration, Proposal};
pub use rps::RockPaperScissors;
pub use rule::{cell_rng, seed_layout, CellRng, Rule};
pub use segregation::Segregation;
pub use sugarscape::Sugarscape;
pub use surface::CellSurface;
pub use wator::WaTor;
