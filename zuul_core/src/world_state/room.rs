//! Rooms and their exits.

use super::{Direction, RoomId};
use crate::entities::{position_of, Item};

/// A named location with exits to other rooms and the items lying in it.
#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    label: String,
    /// Kept in insertion order; at most one entry per direction.
    exits: Vec<(Direction, RoomId)>,
    items: Vec<Item>,
}

impl Room {
    /// Create a room with no exits and no items.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: RoomId::new(),
            label: label.into(),
            exits: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The room reached by leaving in `direction`, if there is an exit that way.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, target)| *target)
    }

    /// All exits in the order they were added.
    pub fn exits(&self) -> &[(Direction, RoomId)] {
        &self.exits
    }

    /// Register or replace the exit in `direction`.
    ///
    /// Replacing keeps the exit's original position in the summary.
    /// Exits are only wired while the world is being built.
    pub(crate) fn set_exit(&mut self, direction: Direction, target: RoomId) {
        if let Some(existing) = self.exits.iter_mut().find(|(d, _)| *d == direction) {
            existing.1 = target;
        } else {
            self.exits.push((direction, target));
        }
    }

    /// List of exit directions, e.g. `Exits: north east down`.
    pub fn exit_summary(&self) -> String {
        let mut summary = String::from("Exits:");
        for (direction, _) in &self.exits {
            summary.push(' ');
            summary.push_str(direction.as_ref());
        }
        summary
    }

    /// Room label followed by the exit summary on the next line.
    pub fn description(&self) -> String {
        format!("{}\n{}", self.label, self.exit_summary())
    }

    /// List of items lying here, or `None` for an empty room.
    pub fn item_summary(&self) -> Option<String> {
        if self.items.is_empty() {
            return None;
        }
        let names: Vec<_> = self.items.iter().map(Item::name).collect();
        Some(format!("Items: {}", names.join(" ")))
    }

    /// Items lying in this room, in the order they were put down.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Put an item down at the end of the room's collection.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove and return the first item called `name`.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        self.remove_item_at(name).map(|(_, item)| item)
    }

    /// Like [`Room::remove_item`], also returning where the item was.
    pub(crate) fn remove_item_at(&mut self, name: &str) -> Option<(usize, Item)> {
        let index = position_of(&self.items, name)?;
        Some((index, self.items.remove(index)))
    }

    /// Put an item back where [`Room::remove_item_at`] found it.
    pub(crate) fn restore_item(&mut self, index: usize, item: Item) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }
}
