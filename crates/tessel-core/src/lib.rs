//! Core types for the Tessel simulation framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the small shared vocabulary used throughout the workspace: tick
//! identifiers, the named-parameter map handed over by configuration
//! loaders, and the parameter error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod params;

pub use error::ParamError;
pub use id::TickId;
pub use params::Params;
