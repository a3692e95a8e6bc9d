//! Item definitions.

use serde::{Deserialize, Serialize};

/// Something that can lie in a room or be carried by the player.
///
/// Items never change after construction; they only move between a room and
/// the player's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    description: String,
    weight: u32,
}

impl Item {
    /// Create a new item.
    pub fn new(name: impl Into<String>, description: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            weight,
        }
    }

    /// The name used to pick the item up or drop it.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Weight in kilograms.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Detailed one-line description, e.g. `book (10Kg, an old spellbook)`.
    pub fn long_description(&self) -> String {
        format!("{} ({}Kg, {})", self.name, self.weight, self.description)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
