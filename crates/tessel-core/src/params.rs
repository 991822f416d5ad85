//! Named numeric parameters supplied by the configuration loader.
//!
//! The loader hands every rule a flat `name -> f64` map. Rules pull the
//! values they need through the typed accessors below, which turn a
//! missing or out-of-range entry into a [`ParamError`] naming the rule
//! and the parameter. Insertion order is preserved so error reports and
//! `Debug` output follow the loader's file order.

use indexmap::IndexMap;

use crate::error::ParamError;

/// Insertion-ordered map of named numeric parameters.
///
/// # Examples
///
/// ```
/// use tessel_core::Params;
///
/// let params = Params::new().with("prob_catch", 0.4).with("fish_breed", 3.0);
/// assert_eq!(params.require_probability("fire", "prob_catch").unwrap(), 0.4);
/// assert_eq!(params.require_count("wator", "fish_breed").unwrap(), 3);
/// assert!(params.require("fire", "prob_grow").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    values: IndexMap<String, f64>,
}

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or overwrite a parameter, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// Raw lookup without validation.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// A finite real number that must be present.
    pub fn require(&self, rule: &'static str, name: &str) -> Result<f64, ParamError> {
        let value = self.get(name).ok_or_else(|| ParamError::Missing {
            rule,
            name: name.to_string(),
        })?;
        check(rule, name, value, value.is_finite(), "must be finite")
    }

    /// A finite real number, or `default` when absent.
    pub fn real_or(&self, rule: &'static str, name: &str, default: f64) -> Result<f64, ParamError> {
        match self.get(name) {
            Some(_) => self.require(rule, name),
            None => Ok(default),
        }
    }

    /// A strictly positive finite number that must be present.
    pub fn require_positive(&self, rule: &'static str, name: &str) -> Result<f64, ParamError> {
        let value = self.require(rule, name)?;
        check(rule, name, value, value > 0.0, "must be greater than zero")
    }

    /// A probability in `[0, 1]` that must be present.
    pub fn require_probability(&self, rule: &'static str, name: &str) -> Result<f64, ParamError> {
        let value = self.require(rule, name)?;
        check(
            rule,
            name,
            value,
            (0.0..=1.0).contains(&value),
            "must lie in [0, 1]",
        )
    }

    /// A probability in `[0, 1]`, or `default` when absent.
    pub fn probability_or(
        &self,
        rule: &'static str,
        name: &str,
        default: f64,
    ) -> Result<f64, ParamError> {
        match self.get(name) {
            Some(_) => self.require_probability(rule, name),
            None => Ok(default),
        }
    }

    /// A non-negative whole number that must be present.
    pub fn require_count(&self, rule: &'static str, name: &str) -> Result<u32, ParamError> {
        let value = self.require(rule, name)?;
        let whole = value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX);
        check(rule, name, value, whole, "must be a non-negative whole number")?;
        Ok(value as u32)
    }

    /// A non-negative whole number, or `default` when absent.
    pub fn count_or(&self, rule: &'static str, name: &str, default: u32) -> Result<u32, ParamError> {
        match self.get(name) {
            Some(_) => self.require_count(rule, name),
            None => Ok(default),
        }
    }

    /// A whole number of at least one that must be present.
    pub fn require_nonzero_count(&self, rule: &'static str, name: &str) -> Result<u32, ParamError> {
        let count = self.require_count(rule, name)?;
        check(rule, name, f64::from(count), count > 0, "must be at least 1")?;
        Ok(count)
    }
}

fn check(
    rule: &'static str,
    name: &str,
    value: f64,
    ok: bool,
    reason: &'static str,
) -> Result<f64, ParamError> {
    if ok {
        Ok(value)
    } else {
        Err(ParamError::Invalid {
            rule,
            name: name.to_string(),
            value,
            reason,
        })
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
