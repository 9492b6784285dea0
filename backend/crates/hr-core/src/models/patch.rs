//! Tri-state field update.
//!
//! JSON `null` and a missing key mean different things for a partial update:
//! a missing key leaves the stored value alone, `null` clears it. Deserialize
//! struct fields of this type with `#[serde(default)]` so that a missing key
//! becomes [`Patch::Unset`].

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Field was not supplied
    Unset,
    /// Field was explicitly cleared (JSON `null`)
    Clear,
    /// Field was supplied with a value
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unset
    }
}

impl<T> Patch<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Patch<U> {
        match self {
            Patch::Unset => Patch::Unset,
            Patch::Clear => Patch::Clear,
            Patch::Set(value) => Patch::Set(f(value)),
        }
    }
}

impl Patch<String> {
    /// Treat a blank string the same as an explicit clear.
    pub fn blank_as_clear(self) -> Self {
        match self {
            Patch::Set(value) if value.trim().is_empty() => Patch::Clear,
            other => other,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
