// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for record comparison operations.
//!
//! This module defines the root [`RecordError`] type and the crate's
//! [`Result`] alias. Only strict comparisons can fail; the lenient
//! comparison paths are infallible predicates.
//!
//! # Examples
//!
//! ```
//! use recordeq_core::{Record, RecordError};
//!
//! let anonymous = Record::unnamed(30);
//! let named = Record::new("Alice".to_string(), 30);
//!
//! let err = anonymous.try_eq(Some(&named)).unwrap_err();
//! assert!(matches!(err, RecordError::UnsetName { .. }));
//! ```

/// Root error type for all record comparison operations
///
/// This enum encompasses the error conditions that can occur while
/// comparing records, allowing library users to handle them by kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A strict comparison needed the contents of an unset name
    ///
    /// Lenient comparisons treat an unset name as a regular value; the
    /// strict path refuses and reports which operand was affected.
    #[error("record name is unset: {context}")]
    UnsetName {
        /// Description of which operand had no name
        context: String,
    },
}

impl RecordError {
    /// Create an unset-name error with the given context
    pub fn unset_name(context: impl Into<String>) -> Self {
        Self::UnsetName {
            context: context.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Comparison errors are never transient; retrying the same comparison
    /// with the same operands cannot succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        false
    }

    /// Check if this error indicates a permanent failure
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(self, Self::UnsetName { .. })
    }
}

/// Specialized Result type for record comparison operations
///
/// This is a type alias for `std::result::Result<T, RecordError>`.
///
/// # Examples
///
/// ```
/// use recordeq_core::Result;
///
/// fn compare() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, RecordError>;
