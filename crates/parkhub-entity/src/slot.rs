//! Parking slot entity.

use serde::{Deserialize, Serialize};

use parkhub_core::types::Category;

/// A named parking space of a fixed category.
///
/// Two slots are equal iff both the name and the category match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Lot-specific location label (e.g. `"B2"`).
    pub name: String,
    /// The slot's own category, independent of who is parked in it.
    pub category: Category,
}

impl Slot {
    /// Create a new slot.
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.category, self.name)
    }
}
