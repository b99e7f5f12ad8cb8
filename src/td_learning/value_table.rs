//! Value table mapping state identities to win estimates

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::{Error, tictactoe::StateId};

/// Value read for any state that has never been stored
pub const DEFAULT_VALUE: f64 = 0.5;

/// Learned policy surface: `StateId -> value in [0, 1]`.
///
/// Reads go through [`ValueTable::value`], which falls back to
/// [`DEFAULT_VALUE`]. Writes are crate-private and only issued by the
/// temporal-difference learner. Entries are never removed.
///
/// Serializes as a flat map from decimal identity strings to numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct ValueTable {
    values: HashMap<StateId, f64>,
}

impl ValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from explicit entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if a value is not a finite
    /// number in `[0, 1]`.
    pub fn from_entries<I>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (StateId, f64)>,
    {
        let mut values = HashMap::new();
        for (id, value) in entries {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfiguration {
                    message: format!("value {value} for state {id} is outside [0, 1]"),
                });
            }
            values.insert(id, value);
        }
        Ok(Self { values })
    }

    /// Stored value, or [`DEFAULT_VALUE`] for unseen states
    pub fn value(&self, id: StateId) -> f64 {
        self.values.get(&id).copied().unwrap_or(DEFAULT_VALUE)
    }

    /// Stored value, if any
    pub fn get(&self, id: StateId) -> Option<f64> {
        self.values.get(&id).copied()
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.values.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in ascending identity order
    pub fn entries(&self) -> Vec<(StateId, f64)> {
        let mut entries: Vec<_> = self.values.iter().map(|(&id, &v)| (id, v)).collect();
        entries.sort_unstable_by_key(|&(id, _)| id);
        entries
    }

    /// Largest absolute difference between the two tables, reading missing
    /// entries as [`DEFAULT_VALUE`]
    pub fn max_abs_difference(&self, other: &ValueTable) -> f64 {
        self.values
            .keys()
            .chain(other.values.keys())
            .map(|&id| (self.value(id) - other.value(id)).abs())
            .fold(0.0, f64::max)
    }

    /// Store `value`, clamped to `[0, 1]`
    pub(crate) fn set(&mut self, id: StateId, value: f64) {
        self.values.insert(id, value.clamp(0.0, 1.0));
    }

    /// Insert `prior` for an unseen state; returns the stored value
    pub(crate) fn seed(&mut self, id: StateId, prior: f64) -> f64 {
        *self.values.entry(id).or_insert(prior.clamp(0.0, 1.0))
    }
}

impl From<ValueTable> for BTreeMap<String, f64> {
    fn from(table: ValueTable) -> Self {
        table
            .values
            .into_iter()
            .map(|(id, value)| (id.to_string(), value))
            .collect()
    }
}

impl TryFrom<BTreeMap<String, f64>> for ValueTable {
    type Error = Error;

    fn try_from(raw: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut entries = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            let id = key
                .parse::<StateId>()
                .map_err(|_| Error::InvalidConfiguration {
                    message: format!("invalid state key '{key}'"),
                })?;
            entries.push((id, value));
        }
        ValueTable::from_entries(entries)
    }
}
