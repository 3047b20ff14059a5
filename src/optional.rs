//! Explicit present-or-absent wrapper for settings fields.
//!
//! Unlike `Option`, reading an absent value surfaces as a checked
//! [`Error::AbsentValue`] rather than requiring a match at every call
//! site, which keeps the defaulting pass in `settings` a straight-line
//! coalescing sequence.

use crate::error::{Error, Result};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OptionalValue<T> {
    value: Option<T>,
}

impl<T> OptionalValue<T> {
    /// An absent value.
    pub const fn unset() -> Self {
        Self { value: None }
    }

    /// Always safe to call, never fails.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl<T: Copy> OptionalValue<T> {
    /// Checked access; fails with [`Error::AbsentValue`] when unset.
    pub fn value(&self) -> Result<T> {
        self.value.ok_or(Error::AbsentValue)
    }

    /// Coalescing access: the held value if present, else `fallback`.
    pub fn value_or(&self, fallback: T) -> T {
        self.value.unwrap_or(fallback)
    }
}

impl<T> Default for OptionalValue<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T> From<T> for OptionalValue<T> {
    fn from(value: T) -> Self {
        Self { value: Some(value) }
    }
}
