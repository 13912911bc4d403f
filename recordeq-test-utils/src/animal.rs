// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// A non-record type with the same field shape as `Record`.
///
/// Used to verify exact-type discrimination: an `Animal` carrying the same
/// age and name as a `Record` must still never compare equal to it through
/// a type-erased reference. The name is optional because strays have none.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Animal {
    pub age: u32,
    pub name: Option<String>,
}

impl Animal {
    #[must_use]
    pub const fn new(name: String, age: u32) -> Self {
        Self {
            age,
            name: Some(name),
        }
    }

    #[must_use]
    pub const fn stray(age: u32) -> Self {
        Self { age, name: None }
    }
}

impl Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Animal[name={}, age={}]",
            self.name.as_deref().unwrap_or("<unset>"),
            self.age
        )
    }
}
