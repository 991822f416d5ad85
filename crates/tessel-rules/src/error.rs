//! Errors raised while building a rule or seeding its cells.

use tessel_core::ParamError;
use thiserror::Error;

/// A rule could not be constructed, or a layout does not fit it.
///
/// All variants are configuration errors: they surface before the first
/// tick and carry enough context to point at the offending input.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RuleError {
    /// The loader named an automaton this crate does not know.
    #[error("unknown automaton type '{0}'")]
    UnknownKind(String),

    /// A layout cell holds a state outside the rule's range.
    #[error("{rule}: cell {index} has state {state}, valid states are 0..={max}")]
    StateOutOfRange {
        /// Rule variant.
        rule: &'static str,
        /// Row-major cell index.
        index: usize,
        /// The offending state.
        state: u8,
        /// Largest valid state.
        max: u8,
    },

    /// A named parameter was missing or out of range.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// A transition table entry is not six octal digits.
    #[error("transition table line {line}: malformed entry '{entry}'")]
    TableEntry {
        /// 1-based line number.
        line: usize,
        /// The entry as written.
        entry: String,
    },

    /// Two entries map the same rotated neighbourhood to different states.
    #[error("transition table line {line}: '{entry}' conflicts with an earlier entry giving {existing}")]
    ConflictingTransition {
        /// 1-based line number.
        line: usize,
        /// The later entry.
        entry: String,
        /// Next state recorded by the earlier entry.
        existing: u8,
    },
}
