// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

//! Core types for the recordeq workspace.
//!
//! This crate defines the [`Record`] value type together with its three
//! comparison surfaces:
//!
//! - typed structural equality ([`PartialEq`] on [`Record`]),
//! - lenient equality against type-erased references ([`ErasedEq`]),
//! - strict, fail-fast comparison ([`Record::try_eq`]) that surfaces an
//!   unset name as a [`RecordError`] instead of a silent answer.

pub mod erased_eq;
pub mod error;
pub mod record;

pub use self::erased_eq::ErasedEq;
pub use self::error::{RecordError, Result};
pub use self::record::Record;
