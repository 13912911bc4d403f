// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Named fixtures shared by the workspace test suites.

use crate::animal::Animal;
use recordeq_core::Record;

pub fn alice() -> Record {
    Record::new("Alice".to_string(), 30)
}

/// Same name as [`alice`], different age.
pub fn older_alice() -> Record {
    Record::new("Alice".to_string(), 31)
}

/// Same age as [`alice`], different name.
pub fn bob() -> Record {
    Record::new("Bob".to_string(), 30)
}

/// Same age as [`alice`], no name.
pub fn anonymous() -> Record {
    Record::unnamed(30)
}

/// An `Animal` carrying exactly [`alice`]'s field values.
pub fn animal_alice() -> Animal {
    Animal::new("Alice".to_string(), 30)
}

pub fn record(name: &str, age: u32) -> Record {
    Record::new(name.to_string(), age)
}
