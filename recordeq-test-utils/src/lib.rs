// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

//! Test fixtures for the recordeq workspace.
//!
//! This crate provides named sample records and a deliberately unrelated
//! [`Animal`] type for type-discrimination tests. It is designed for use in
//! development and testing only, not for production code.
//!
//! # Fixtures
//!
//! The samples are arranged around [`samples::alice`] so that each one
//! differs from her in exactly one dimension:
//!
//! - [`samples::older_alice`] - same name, different age
//! - [`samples::bob`] - same age, different name
//! - [`samples::anonymous`] - same age, unset name
//! - [`samples::animal_alice`] - same field values, different type
//!
//! # Examples
//!
//! ```
//! use recordeq_test_utils::samples::{alice, bob};
//!
//! assert_eq!(alice().name(), Some("Alice"));
//! assert_ne!(alice(), bob());
//! ```

pub mod animal;
pub mod samples;

pub use animal::Animal;
