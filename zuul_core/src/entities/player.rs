//! The player: where they are, where they just were, and what they carry.

use log::{debug, warn};

use super::{position_of, total_weight, Item};
use crate::mechanics::{is_pickable, ActionError};
use crate::world_state::{Direction, RoomId, World};

/// The player character.
///
/// The player only remembers one step of history: moving twice forgets the
/// older room, and `back` can be used once per move.
///
/// A player only comes from [`Player::new`], so the carried weight always
/// went through the capacity check:
///
/// ```compile_fail
/// let player: zuul_core::Player = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Player {
    current_room: RoomId,
    previous_room: Option<RoomId>,
    inventory: Vec<Item>,
    max_weight: u32,
}

impl Player {
    /// Create a player standing in `start` who can carry up to `max_weight`.
    pub fn new(start: RoomId, max_weight: u32) -> Self {
        Self {
            current_room: start,
            previous_room: None,
            inventory: Vec::new(),
            max_weight,
        }
    }

    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    /// The room `back` would return to, if any.
    pub fn previous_room(&self) -> Option<RoomId> {
        self.previous_room
    }

    pub fn max_weight(&self) -> u32 {
        self.max_weight
    }

    /// Carried items in the order they were picked up.
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Combined weight of everything carried.
    pub fn total_weight(&self) -> u32 {
        total_weight(&self.inventory)
    }

    /// Leave the current room in `direction`.
    ///
    /// Without an exit that way nothing changes, history included.
    pub fn move_to(&mut self, world: &World, direction: Direction) -> Result<RoomId, ActionError> {
        let target = world[self.current_room]
            .exit(direction)
            .ok_or(ActionError::NoSuchExit { direction })?;

        debug!(
            "Player moves {} from {} to {}",
            direction,
            world[self.current_room].label(),
            world[target].label()
        );
        self.previous_room = Some(self.current_room);
        self.current_room = target;
        Ok(target)
    }

    /// Return to the room left by the last move.
    ///
    /// Returns `false` and stays put when there is nothing to go back to,
    /// which includes a second `back` in a row.
    pub fn back(&mut self, world: &World) -> bool {
        match self.previous_room.take() {
            Some(previous) => {
                debug!(
                    "Player steps back from {} to {}",
                    world[self.current_room].label(),
                    world[previous].label()
                );
                self.current_room = previous;
                true
            }
            None => false,
        }
    }

    /// Pick up the first item called `name` in the current room.
    ///
    /// If the item is too heavy it stays exactly where it was in the room.
    pub fn take_item(&mut self, world: &mut World, name: &str) -> Result<&Item, ActionError> {
        let room = &mut world[self.current_room];
        let (index, item) = room
            .remove_item_at(name)
            .ok_or_else(|| ActionError::ItemNotFound {
                name: name.to_string(),
            })?;

        let carried = self.total_weight();
        if !is_pickable(item.weight(), carried, self.max_weight) {
            warn!(
                "Refusing to pick up {} ({}Kg): carrying {} of {}",
                item.name(),
                item.weight(),
                carried,
                self.max_weight
            );
            let err = ActionError::OverCapacity {
                name: item.name().to_string(),
                weight: item.weight(),
                carried,
                max_weight: self.max_weight,
            };
            room.restore_item(index, item);
            return Err(err);
        }

        debug!("Player takes {} from {}", item.name(), room.label());
        let slot = self.inventory.len();
        self.inventory.push(item);
        Ok(&self.inventory[slot])
    }

    /// Put down the first carried item called `name` in the current room.
    ///
    /// Dropping never depends on weight.
    pub fn drop_item<'w>(
        &mut self,
        world: &'w mut World,
        name: &str,
    ) -> Result<&'w Item, ActionError> {
        let index = position_of(&self.inventory, name).ok_or_else(|| {
            ActionError::ItemNotFound {
                name: name.to_string(),
            }
        })?;
        let item = self.inventory.remove(index);

        let room = &mut world[self.current_room];
        debug!("Player drops {} in {}", item.name(), room.label());
        let slot = room.items().len();
        room.add_item(item);
        Ok(&room.items()[slot])
    }
}
