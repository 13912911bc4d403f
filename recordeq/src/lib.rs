// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Recordeq
//!
//! Structural equality for simple record values, with comparison surfaces
//! for callers that hold a typed reference, a type-erased reference, or no
//! reference at all.
//!
//! ## Overview
//!
//! Recordeq provides a [`Record`] value type (an age and an optional name)
//! and three ways to compare records:
//!
//! - **Typed**: `a == b` via [`PartialEq`], plain structural equality.
//! - **Lenient erased**: [`ErasedEq::erased_eq`] accepts an
//!   `Option<&dyn Any>` and answers `false` for absent references and for
//!   references of any other runtime type. An unset name is an ordinary
//!   value, equal only to another unset name.
//! - **Strict erased**: [`Record::try_eq`] has the same shape but fails
//!   fast with [`RecordError::UnsetName`] when its own name is unset,
//!   instead of producing an answer from missing data.
//!
//! ## Quick Start
//!
//! ```rust
//! use recordeq::prelude::*;
//!
//! let a = Record::new("Alice".to_string(), 30);
//! let b = Record::new("Alice".to_string(), 30);
//! let c = Record::new("Bob".to_string(), 30);
//!
//! assert_eq!(a, b);
//! assert!(a.erased_eq(Some(&b)));
//! assert!(!a.erased_eq(Some(&c)));
//! assert!(!a.erased_eq(None));
//! ```

// Re-export core types
pub use recordeq_core::{ErasedEq, Record, RecordError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use recordeq_core::{ErasedEq, Record, RecordError, Result};
}
