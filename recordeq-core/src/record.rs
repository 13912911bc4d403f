// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The [`Record`] value type and its comparison operations.

use crate::error::{RecordError, Result};
use std::any::Any;
use std::fmt::{self, Display};
use std::ptr;

// Conditional logging based on tracing feature
#[cfg(feature = "tracing")]
macro_rules! warn {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*);
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn {
    ($($arg:tt)*) => {
        // No-op when tracing is disabled
    };
}

/// A value holding an age and an optional name.
///
/// Fields are public and mutable; the type enforces no invariant of its own.
/// A record's name may be unset (`None`), which is the state produced by
/// [`Record::default`] and [`Record::unnamed`].
///
/// # Equality
///
/// Two records are equal when their ages match and their names match by
/// content. An unset name is a valid state that is equal only to another
/// unset name:
///
/// ```
/// use recordeq_core::Record;
///
/// let a = Record::new("Alice".to_string(), 30);
/// let b = Record::new("Alice".to_string(), 30);
/// assert_eq!(a, b);
///
/// assert_eq!(Record::unnamed(30), Record::unnamed(30));
/// assert_ne!(Record::unnamed(30), a);
/// ```
///
/// For comparison against type-erased references, see
/// [`ErasedEq`](crate::ErasedEq) (lenient) and [`Record::try_eq`] (strict).
#[derive(Debug, Clone, Default)]
pub struct Record {
    /// Age in years
    pub age: u32,
    /// Name, or `None` when unset
    pub name: Option<String>,
}

impl Record {
    /// Creates a record with the given name and age.
    #[must_use]
    pub const fn new(name: String, age: u32) -> Self {
        Self {
            age,
            name: Some(name),
        }
    }

    /// Creates a record with the given age and no name.
    #[must_use]
    pub const fn unnamed(age: u32) -> Self {
        Self { age, name: None }
    }

    /// Returns the name as a string slice, or `None` when unset.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Strict comparison against a type-erased, possibly absent reference.
    ///
    /// Unlike [`ErasedEq::erased_eq`](crate::ErasedEq::erased_eq), which
    /// treats an unset name as a regular value, this variant refuses to
    /// compare when its own name is unset and fails fast with
    /// [`RecordError::UnsetName`].
    ///
    /// # Behavior
    ///
    /// - An absent reference compares `false`.
    /// - A reference to `self` compares `true` without touching any field,
    ///   so self-comparison succeeds even on a partially initialized record.
    /// - A reference of any other runtime type compares `false`.
    /// - Mismatched ages compare `false` without inspecting names.
    /// - An unset name on `self` is an error; an unset name on the other
    ///   record (with `self`'s name set) compares `false`. The operation is
    ///   therefore not symmetric across the error path.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::UnsetName`] when `self.name` is `None` and the
    /// comparison reaches the name field.
    ///
    /// # Examples
    ///
    /// ```
    /// use recordeq_core::Record;
    ///
    /// let a = Record::new("Alice".to_string(), 30);
    /// let b = Record::new("Bob".to_string(), 30);
    ///
    /// assert!(!a.try_eq(Some(&b))?);
    /// assert!(!a.try_eq(None)?);
    ///
    /// let anonymous = Record::unnamed(30);
    /// assert!(anonymous.try_eq(Some(&a)).is_err());
    /// # Ok::<(), recordeq_core::RecordError>(())
    /// ```
    pub fn try_eq(&self, other: Option<&dyn Any>) -> Result<bool> {
        let Some(other) = other else {
            return Ok(false);
        };
        if ptr::addr_eq(self, other) {
            return Ok(true);
        }
        let Some(other) = other.downcast_ref::<Self>() else {
            return Ok(false);
        };
        if self.age != other.age {
            return Ok(false);
        }
        let Some(name) = self.name.as_deref() else {
            warn!("strict comparison on a record with an unset name");
            return Err(RecordError::unset_name("left operand has no name"));
        };
        Ok(match other.name.as_deref() {
            Some(other_name) => name == other_name,
            None => false,
        })
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.age == other.age && self.name == other.name
    }
}

impl Eq for Record {}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record[name={}, age={}]",
            self.name.as_deref().unwrap_or("<unset>"),
            self.age
        )
    }
}
