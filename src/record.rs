//! The employee record stored in a [`Tree`][crate::tree::Tree].

use std::fmt;

/// A single employee record. The `id` is the key the tree orders and searches by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Employee {
    /// Unique key of the record.
    pub id: i32,
    /// Age in years.
    pub age: i32,
    /// Display name.
    pub name: String,
    /// Depth the record was placed at when it was inserted (root = 1). A record that hasn't been
    /// inserted anywhere yet has a level of 0.
    pub level: usize,
}

impl Employee {
    /// Builds a record that hasn't been placed in a tree yet.
    pub fn new(id: i32, age: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            age,
            name: name.into(),
            level: 0,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}, Age: {}", self.id, self.name, self.age)
    }
}
