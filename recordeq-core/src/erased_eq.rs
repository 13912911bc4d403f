// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Equality against type-erased references.
//!
//! This module defines [`ErasedEq`], the comparison entry point for callers
//! that hold a value behind `&dyn Any` or may have no value at all.

use std::any::Any;
use std::ptr;

/// Equality against a type-erased, possibly absent reference.
///
/// Where [`PartialEq`] compares two values of a known common type,
/// `ErasedEq` answers the same question when the right-hand side arrives as
/// an `Option<&dyn Any>`: possibly absent, possibly of a different runtime
/// type entirely.
///
/// # Behavior
///
/// - An absent reference is never equal to anything.
/// - A reference to the same object as `self` is always equal, decided by
///   address alone before any field is read.
/// - A reference whose runtime type is not exactly `Self` is never equal.
///   The check is a type-tag comparison, so no other type matches even if
///   its fields happen to line up.
/// - Otherwise the two values are compared with their [`PartialEq`].
///
/// # Examples
///
/// ```
/// use recordeq_core::{ErasedEq, Record};
/// use std::any::Any;
///
/// let a = Record::new("Alice".to_string(), 30);
/// let b = Record::new("Alice".to_string(), 30);
///
/// assert!(a.erased_eq(Some(&b)));
/// assert!(!a.erased_eq(None));
///
/// // Same field values, different runtime type: never equal.
/// assert!(!a.erased_eq(Some(&30u32 as &dyn Any)));
/// ```
pub trait ErasedEq: Any {
    /// Compares `self` with a type-erased reference, or with nothing.
    fn erased_eq(&self, other: Option<&dyn Any>) -> bool;
}

/// Blanket implementation for all types with structural equality.
impl<T> ErasedEq for T
where
    T: Any + PartialEq,
{
    fn erased_eq(&self, other: Option<&dyn Any>) -> bool {
        let Some(other) = other else {
            return false;
        };
        if ptr::addr_eq(self, other) {
            return true;
        }
        match other.downcast_ref::<T>() {
            Some(typed) => self == typed,
            None => false,
        }
    }
}
