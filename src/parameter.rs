use itertools::Itertools;

use crate::error::{LikelihoodError, Result};

/// Named free parameters with a fixed schema
///
/// The names are fixed when the set is created. Every slot starts unset and
/// is filled in by whoever drives the likelihood (a sampler, an optimizer,
/// or a test) before evaluation.
///
/// # Example
/// ```
/// use rlikelihood::ParameterSet;
///
/// let mut params = ParameterSet::new(&["a", "b"]).unwrap();
/// assert_eq!(params.get("a"), None);
///
/// params.set("a", 1.5).unwrap();
/// assert_eq!(params.get("a"), Some(1.5));
/// assert_eq!(params.missing(), vec!["b"]);
///
/// assert!(params.set("c", 0.0).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_support", serde(try_from = "RawParameterSet"))]
pub struct ParameterSet {
    names: Vec<String>,
    values: Vec<Option<f64>>,
}

/// Unchecked form of `ParameterSet` as it appears on the wire
#[cfg(feature = "serde_support")]
#[derive(Deserialize)]
struct RawParameterSet {
    names: Vec<String>,
    values: Vec<Option<f64>>,
}

#[cfg(feature = "serde_support")]
impl std::convert::TryFrom<RawParameterSet> for ParameterSet {
    type Error = LikelihoodError;

    fn try_from(raw: RawParameterSet) -> Result<Self> {
        if raw.names.len() != raw.values.len() {
            return Err(LikelihoodError::LengthMismatch {
                expected: raw.names.len(),
                found: raw.values.len(),
            });
        }
        check_unique(&raw.names)?;
        Ok(Self {
            names: raw.names,
            values: raw.values,
        })
    }
}

fn check_unique(names: &[String]) -> Result<()> {
    match names.iter().tuple_combinations().find(|(a, b)| a == b) {
        Some((dup, _)) => Err(LikelihoodError::DuplicateParameter(dup.clone())),
        None => Ok(()),
    }
}

impl ParameterSet {
    /// Create a parameter set with the given names, all unset.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let names: Vec<String> =
            names.iter().map(|n| n.as_ref().to_owned()).collect();

        check_unique(&names)?;

        let values = vec![None; names.len()];
        Ok(Self { names, values })
    }

    /// Names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of parameters in the schema
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if the schema has no parameters
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check whether `name` is part of the schema
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Current value of `name`, `None` if unset or unknown.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.index_of(name).and_then(|i| self.values[i])
    }

    /// Assign a value to `name`.
    pub fn set(&mut self, name: &str, value: f64) -> Result<()> {
        let i = self.try_index_of(name)?;
        self.values[i] = Some(value);
        Ok(())
    }

    /// Clear the value of `name`.
    pub fn unset(&mut self, name: &str) -> Result<()> {
        let i = self.try_index_of(name)?;
        self.values[i] = None;
        Ok(())
    }

    /// Names which currently have no value
    pub fn missing(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, v)| v.is_none())
            .map(|(n, _)| n)
            .collect()
    }

    /// True if every parameter has a value
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Iterate over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().cloned())
    }

    /// Collect the values of `names`, in that order.
    ///
    /// Fails on the first name which is unset or not in the schema.
    pub fn values_for<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<f64>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                let i = self.try_index_of(name)?;
                self.values[i]
                    .ok_or_else(|| LikelihoodError::UnsetParameter(name.to_owned()))
            })
            .collect()
    }

    /// Append an unset parameter to the schema.
    pub(crate) fn push(&mut self, name: &str) -> Result<()> {
        if self.contains(name) {
            return Err(LikelihoodError::DuplicateParameter(name.to_owned()));
        }
        self.names.push(name.to_owned());
        self.values.push(None);
        Ok(())
    }

    /// Drop a parameter from the schema, if present.
    pub(crate) fn remove(&mut self, name: &str) {
        if let Some(i) = self.index_of(name) {
            self.names.remove(i);
            self.values.remove(i);
        }
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    fn try_index_of(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| LikelihoodError::UnknownParameter(name.to_owned()))
    }
}
