//! World state management - the rooms of the game and how they connect.

mod builder;
mod direction;
mod room;

pub use builder::*;
pub use direction::*;
pub use room::*;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::ops::{Index, IndexMut};
use uuid::Uuid;

/// Unique identifier for rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub Uuid);

impl RoomId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every room of a game session.
///
/// Rooms are added while the world is built and never removed, so a
/// [`RoomId`] handed out by a world stays valid for that world's lifetime.
/// Indexing with an id minted by a different world panics.
///
/// Exits are only wired by [`WorldDefinition::build`], which checks every
/// target, so a world cannot be read in from elsewhere:
///
/// ```compile_fail
/// let world: zuul_core::World = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct World {
    rooms: HashMap<RoomId, Room>,

    /// Room ids in construction order.
    order: Vec<RoomId>,
}

impl World {
    /// Create a new empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room to the world.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = room.id();
        if self.rooms.insert(id, room).is_none() {
            self.order.push(id);
        }
        id
    }

    /// Get room by ID.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Find a room by its label.
    pub fn room_by_label(&self, label: &str) -> Option<&Room> {
        self.rooms().find(|room| room.label() == label)
    }

    /// All rooms in the order they were added.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.order.iter().filter_map(|id| self.rooms.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids of every room reachable from `start` by following exits,
    /// `start` included.
    pub fn reachable_from(&self, start: RoomId) -> HashSet<RoomId> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();

        if self.rooms.contains_key(&start) {
            seen.insert(start);
            queue.push_back(start);
        }

        while let Some(id) = queue.pop_front() {
            for (_, target) in self.rooms[&id].exits() {
                if self.rooms.contains_key(target) && seen.insert(*target) {
                    queue.push_back(*target);
                }
            }
        }

        seen
    }
}

impl Index<RoomId> for World {
    type Output = Room;

    fn index(&self, id: RoomId) -> &Self::Output {
        self.rooms.get(&id).unwrap_or_else(|| foreign_room(id))
    }
}

impl IndexMut<RoomId> for World {
    fn index_mut(&mut self, id: RoomId) -> &mut Self::Output {
        self.rooms.get_mut(&id).unwrap_or_else(|| foreign_room(id))
    }
}

fn foreign_room(id: RoomId) -> ! {
    panic!("room {id} does not belong to this world")
}
