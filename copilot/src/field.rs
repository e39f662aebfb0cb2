//! Tri-state document field: absent, explicit `null`, or a value.
//!
//! Copilot documents are edited by hand, and `"cooling": null` is not the
//! same document as one without `cooling`. [`Field`] keeps that distinction
//! through an import/export cycle where `Option` would collapse it.
//!
//! Struct fields use it as
//! `#[serde(default, skip_serializing_if = "Field::is_absent")]`: a missing
//! key deserializes to [`Field::Absent`] and is skipped again on output.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Field<T> {
    /// The key is not in the document.
    #[default]
    Absent,
    /// The key is present with a `null` value.
    Null,
    Present(T),
}

impl<T> Field<T> {
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[must_use]
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// The value, if any. `Null` and `Absent` both map to `None`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// The value, inserting `f()` first when there is none.
    pub fn get_or_insert_with(&mut self, f: impl FnOnce() -> T) -> &mut T {
        if !self.is_present() {
            *self = Self::Present(f());
        }
        match self {
            Self::Present(value) => value,
            Self::Absent | Self::Null => unreachable!("value was just inserted"),
        }
    }

    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_iter()
    }

    pub fn iter_mut(&mut self) -> std::option::IntoIter<&mut T> {
        self.as_mut().into_iter()
    }
}

impl<T: Deref> Field<T> {
    #[must_use]
    pub fn as_deref(&self) -> Option<&T::Target> {
        self.as_ref().map(|value| &**value)
    }
}

/// `None` means "leave the key out", not `null`.
impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Present(value),
            None => Self::Null,
        })
    }
}
