//! Game mechanics: the carry-weight rule and the outcomes of player actions.

use thiserror::Error;

use crate::world_state::Direction;

/// Why a player action had no effect.
///
/// None of these are faults: a bad direction or an unknown item name is a
/// normal game event and the caller picks the message to show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The current room has no exit in that direction.
    #[error("there is no exit {direction}")]
    NoSuchExit { direction: Direction },

    /// The source container (room for take, inventory for drop) has no such item.
    #[error("there is no {name} here")]
    ItemNotFound { name: String },

    /// The item exists but carrying it would exceed the maximum weight.
    /// The room is left exactly as it was.
    #[error("{name} weighs {weight}, already carrying {carried} of {max_weight}")]
    OverCapacity {
        name: String,
        weight: u32,
        carried: u32,
        max_weight: u32,
    },
}

/// Errors raised while loading or validating a world definition.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("world has no rooms")]
    EmptyWorld,

    #[error("room '{0}' is defined more than once")]
    DuplicateRoom(String),

    #[error("unknown room '{0}'")]
    UnknownRoom(String),

    #[error("room '{room}' has an exit with unknown direction '{direction}'")]
    UnknownDirection { room: String, direction: String },

    #[error("start room '{0}' has no exits")]
    StartRoomIsolated(String),

    #[error("room '{0}' cannot be reached from the start room")]
    UnreachableRoom(String),

    #[error("unsupported world file format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to read world file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML world definition: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON world definition: {0}")]
    Json(#[from] serde_json::Error),
}

/// Check whether an item of `weight` can be added to a load of `carried`
/// without going over `max_weight`.
pub fn is_pickable(weight: u32, carried: u32, max_weight: u32) -> bool {
    // A total that does not fit in a u32 is over any limit.
    carried
        .checked_add(weight)
        .is_some_and(|total| total <= max_weight)
}
