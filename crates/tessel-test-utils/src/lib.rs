//! Test fixtures for Tessel development.
//!
//! Layouts are written as rows of digits, the same plain text the
//! configuration loader reads, so test grids stay legible.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{config, layout_from_rows, render_rows};
