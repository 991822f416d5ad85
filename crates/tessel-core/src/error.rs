//! Error types shared by every rule constructor.

use thiserror::Error;

/// A named numeric parameter was missing or unusable.
///
/// Raised while a rule variant is being built from the loader's
/// parameter map, always before the first tick runs.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParamError {
    /// A parameter the rule requires was not supplied.
    #[error("{rule}: missing required parameter '{name}'")]
    Missing {
        /// Rule variant that asked for the parameter.
        rule: &'static str,
        /// Parameter name.
        name: String,
    },
    /// A parameter was supplied but its value is out of range.
    #[error("{rule}: parameter '{name}' = {value} is invalid: {reason}")]
    Invalid {
        /// Rule variant that asked for the parameter.
        rule: &'static str,
        /// Parameter name.
        name: String,
        /// The offending value.
        value: f64,
        /// Which constraint was violated.
        reason: &'static str,
    },
}
