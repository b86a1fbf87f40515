use serde::{Deserialize, Deserializer};

/// Represents optional field semantics in PATCH/UPDATE requests.
///
/// - `Unchanged` → field not touched
/// - `SetToNull` → explicitly null
/// - `SetToValue` → set to provided value
#[derive(Debug, Clone, PartialEq)]
pub enum OptionField<T> {
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<T> Default for OptionField<T> {
    fn default() -> Self {
        OptionField::Unchanged
    }
}

/// An absent field never reaches this impl; `#[serde(default)]` on the
/// carrying struct turns absence into `Unchanged`.
impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            None => OptionField::SetToNull,
            Some(value) => OptionField::SetToValue(value),
        })
    }
}

impl<T> OptionField<T> {
    /// Borrowed nested option:
    /// - `None` → unchanged
    /// - `Some(None)` → set null
    /// - `Some(Some(&T))` → set to value
    pub fn as_ref_option(&self) -> Option<Option<&T>> {
        match self {
            Self::Unchanged => None,
            Self::SetToNull => Some(None),
            Self::SetToValue(value) => Some(Some(value)),
        }
    }

    /// True when `Unchanged`.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// True when `SetToNull`.
    pub fn is_set_to_null(&self) -> bool {
        matches!(self, Self::SetToNull)
    }

    /// If `SetToValue`, returns a reference to inner value.
    pub fn value_ref(&self) -> Option<&T> {
        if let Self::SetToValue(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// If `SetToValue`, consumes and returns inner value.
    pub fn take_value(self) -> Option<T> {
        if let Self::SetToValue(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

pub type PatchString = OptionField<String>;
pub type PatchVec<T> = OptionField<Vec<T>>;
