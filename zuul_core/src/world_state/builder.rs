//! World construction from a plain data description.
//!
//! A [`WorldDefinition`] is what a world file deserializes into. Building it
//! wires every exit, places the initial items and checks that the result is
//! a playable graph before any player sets foot in it.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::{Direction, Room, RoomId, World};
use crate::entities::Item;
use crate::mechanics::WorldError;

/// A directed exit as written in a world file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitDefinition {
    /// Parsed into a [`Direction`] when the world is built.
    pub direction: String,
    /// Label of the target room.
    pub to: String,
}

impl ExitDefinition {
    pub fn new(direction: Direction, to: impl Into<String>) -> Self {
        Self {
            direction: direction.to_string(),
            to: to.into(),
        }
    }
}

/// A room as written in a world file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDefinition {
    pub label: String,
    #[serde(default)]
    pub exits: Vec<ExitDefinition>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl RoomDefinition {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            exits: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Add an exit leading to the room labelled `to`.
    pub fn with_exit(mut self, direction: Direction, to: impl Into<String>) -> Self {
        self.exits.push(ExitDefinition::new(direction, to));
        self
    }

    /// Place an item in this room.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }
}

/// The full description of a world: its rooms and where the player starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldDefinition {
    /// Label of the room the player starts in.
    pub start: String,
    #[serde(default)]
    pub rooms: Vec<RoomDefinition>,
}

impl WorldDefinition {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            rooms: Vec::new(),
        }
    }

    pub fn with_room(mut self, room: RoomDefinition) -> Self {
        self.rooms.push(room);
        self
    }

    /// Start somewhere else than the definition says.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = start.into();
        self
    }

    /// The built-in campus world.
    ///
    /// The hall is the hub; the cellar hangs off the computer room and the
    /// computer room is the only way back up.
    pub fn campus() -> Self {
        use Direction::*;

        Self::new("Hall")
            .with_room(
                RoomDefinition::new("Hall")
                    .with_exit(East, "Lecture room")
                    .with_exit(South, "Computer room")
                    .with_exit(West, "Dongari room"),
            )
            .with_room(RoomDefinition::new("Lecture room").with_exit(West, "Hall"))
            .with_room(
                RoomDefinition::new("Dongari room")
                    .with_exit(East, "Hall")
                    .with_item(Item::new("portion", "a potion that restores 5 health", 5))
                    .with_item(Item::new("book", "AI tech book", 7)),
            )
            .with_room(
                RoomDefinition::new("Computer room")
                    .with_exit(North, "Hall")
                    .with_exit(East, "Office")
                    .with_exit(Down, "Cellar")
                    .with_item(Item::new("book", "an old spellbook", 10)),
            )
            .with_room(RoomDefinition::new("Office").with_exit(West, "Computer room"))
            .with_room(RoomDefinition::new("Cellar").with_exit(Up, "Computer room"))
    }

    pub fn from_toml_str(text: &str) -> Result<Self, WorldError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, WorldError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a definition from a `.toml` or `.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str());
        if !matches!(extension, Some("toml" | "json")) {
            return Err(WorldError::UnsupportedFormat(path.display().to_string()));
        }

        debug!("Loading world definition from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        match extension {
            Some("json") => Self::from_json_str(&text),
            _ => Self::from_toml_str(&text),
        }
    }

    /// Pretty-printed JSON form of this definition.
    pub fn to_json_string(&self) -> Result<String, WorldError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the world and return it with the id of the start room.
    ///
    /// Fails if labels are duplicated, an exit names an unknown direction or
    /// room, the start room has no way out, or some room cannot be reached
    /// from the start room.
    pub fn build(&self) -> Result<(World, RoomId), WorldError> {
        if self.rooms.is_empty() {
            return Err(WorldError::EmptyWorld);
        }

        let mut world = World::new();
        let mut ids: HashMap<&str, RoomId> = HashMap::new();

        // Pass 1: create every room so exits can point forward.
        for definition in &self.rooms {
            if ids.contains_key(definition.label.as_str()) {
                return Err(WorldError::DuplicateRoom(definition.label.clone()));
            }
            let mut room = Room::new(definition.label.clone());
            for item in &definition.items {
                room.add_item(item.clone());
            }
            ids.insert(definition.label.as_str(), world.add_room(room));
        }

        // Pass 2: wire exits.
        for definition in &self.rooms {
            let from = ids[definition.label.as_str()];
            for exit in &definition.exits {
                let direction = exit.direction.parse::<Direction>().map_err(|_| {
                    WorldError::UnknownDirection {
                        room: definition.label.clone(),
                        direction: exit.direction.clone(),
                    }
                })?;
                let to = *ids
                    .get(exit.to.as_str())
                    .ok_or_else(|| WorldError::UnknownRoom(exit.to.clone()))?;
                world[from].set_exit(direction, to);
            }
        }

        let start = *ids
            .get(self.start.as_str())
            .ok_or_else(|| WorldError::UnknownRoom(self.start.clone()))?;
        if world[start].exits().is_empty() {
            return Err(WorldError::StartRoomIsolated(self.start.clone()));
        }

        let reachable = world.reachable_from(start);
        if let Some(room) = world.rooms().find(|room| !reachable.contains(&room.id())) {
            return Err(WorldError::UnreachableRoom(room.label().to_string()));
        }

        info!(
            "Built world with {} rooms, starting in {}",
            world.len(),
            self.start
        );
        Ok((world, start))
    }
}

impl Default for WorldDefinition {
    fn default() -> Self {
        Self::campus()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY_TOML: &str = r#"
start = "Porch"

[[rooms]]
label = "Porch"
exits = [{ direction = "north", to = "Kitchen" }]

[[rooms]]
label = "Kitchen"
exits = [{ direction = "south", to = "Porch" }]
items = [{ name = "knife", description = "a bread knife", weight = 1 }]
"#;

    fn item_names(room: &Room) -> Vec<&str> {
        room.items().iter().map(Item::name).collect()
    }

    #[test]
    fn test_campus_world_layout() {
        let (world, start) = WorldDefinition::campus().build().unwrap();
        assert_eq!(world.len(), 6);

        let hall = &world[start];
        assert_eq!(hall.label(), "Hall");
        assert_eq!(hall.exit_summary(), "Exits: east south west");

        let dongari = &world[hall.exit(Direction::West).unwrap()];
        assert_eq!(dongari.label(), "Dongari room");
        assert_eq!(item_names(dongari), ["portion", "book"]);

        let computer = &world[hall.exit(Direction::South).unwrap()];
        assert_eq!(computer.items()[0].weight(), 10);

        let cellar = &world[computer.exit(Direction::Down).unwrap()];
        assert_eq!(cellar.label(), "Cellar");
        assert_eq!(cellar.exit(Direction::Up), Some(computer.id()));
    }

    #[test]
    fn test_campus_every_room_reachable() {
        let (world, start) = WorldDefinition::campus().build().unwrap();
        assert_eq!(world.reachable_from(start).len(), world.len());
    }

    #[test]
    fn test_from_toml_str() {
        let definition = WorldDefinition::from_toml_str(TINY_TOML).unwrap();
        let (world, start) = definition.build().unwrap();

        assert_eq!(world[start].label(), "Porch");
        let kitchen = world.room_by_label("Kitchen").unwrap();
        assert_eq!(kitchen.items()[0].long_description(), "knife (1Kg, a bread knife)");
    }

    #[test]
    fn test_shipped_campus_file_matches_builtin() {
        let text = include_str!("../../../worlds/campus.toml");
        let definition = WorldDefinition::from_toml_str(text).unwrap();
        assert_eq!(definition, WorldDefinition::campus());
    }

    #[test]
    fn test_json_matches_builder() {
        let campus = WorldDefinition::campus();
        let json = campus.to_json_string().unwrap();
        assert_eq!(WorldDefinition::from_json_str(&json).unwrap(), campus);
    }

    #[test]
    fn test_unknown_direction_rejected() {
        let definition = WorldDefinition::new("A")
            .with_room(RoomDefinition {
                label: "A".to_string(),
                exits: vec![ExitDefinition {
                    direction: "northeast".to_string(),
                    to: "B".to_string(),
                }],
                items: Vec::new(),
            })
            .with_room(RoomDefinition::new("B"));

        let err = definition.build().unwrap_err();
        assert!(matches!(
            err,
            WorldError::UnknownDirection { ref direction, .. } if direction == "northeast"
        ));
    }

    #[test]
    fn test_unknown_target_rejected() {
        let definition = WorldDefinition::new("A")
            .with_room(RoomDefinition::new("A").with_exit(Direction::East, "Nowhere"));
        assert!(matches!(
            definition.build(),
            Err(WorldError::UnknownRoom(label)) if label == "Nowhere"
        ));
    }

    #[test]
    fn test_unknown_start_rejected() {
        let definition = WorldDefinition::campus().with_start("Attic");
        assert!(matches!(
            definition.build(),
            Err(WorldError::UnknownRoom(label)) if label == "Attic"
        ));
    }

    #[test]
    fn test_duplicate_room_rejected() {
        let definition = WorldDefinition::new("A")
            .with_room(RoomDefinition::new("A").with_exit(Direction::Up, "A"))
            .with_room(RoomDefinition::new("A"));
        assert!(matches!(
            definition.build(),
            Err(WorldError::DuplicateRoom(label)) if label == "A"
        ));
    }

    #[test]
    fn test_empty_world_rejected() {
        assert!(matches!(
            WorldDefinition::new("A").build(),
            Err(WorldError::EmptyWorld)
        ));
    }

    #[test]
    fn test_isolated_start_rejected() {
        let definition = WorldDefinition::new("A").with_room(RoomDefinition::new("A"));
        assert!(matches!(
            definition.build(),
            Err(WorldError::StartRoomIsolated(_))
        ));
    }

    #[test]
    fn test_unreachable_room_rejected() {
        // The cellar only has a one-way exit out; nothing leads in.
        let definition = WorldDefinition::new("Hall")
            .with_room(RoomDefinition::new("Hall").with_exit(Direction::East, "Office"))
            .with_room(RoomDefinition::new("Office").with_exit(Direction::West, "Hall"))
            .with_room(RoomDefinition::new("Cellar").with_exit(Direction::Up, "Hall"));
        assert!(matches!(
            definition.build(),
            Err(WorldError::UnreachableRoom(label)) if label == "Cellar"
        ));
    }

    #[test]
    fn test_from_path_loads_toml() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../worlds/campus.toml");
        let definition = WorldDefinition::from_path(path).unwrap();
        assert_eq!(definition, WorldDefinition::campus());
    }

    #[test]
    fn test_from_path_loads_json() {
        let path = std::env::temp_dir().join(format!("zuul-world-{}.json", uuid::Uuid::new_v4()));
        let definition = WorldDefinition::campus().with_start("Cellar");
        std::fs::write(&path, definition.to_json_string().unwrap()).unwrap();

        let loaded = WorldDefinition::from_path(&path);
        std::fs::remove_file(&path).unwrap();

        let loaded = loaded.unwrap();
        assert_eq!(loaded, definition);
        let (world, start) = loaded.build().unwrap();
        assert_eq!(world[start].label(), "Cellar");
    }

    #[test]
    fn test_from_path_missing_file() {
        let path = std::env::temp_dir().join(format!("zuul-missing-{}.json", uuid::Uuid::new_v4()));
        assert!(matches!(
            WorldDefinition::from_path(path),
            Err(WorldError::Io(_))
        ));
    }

    #[test]
    fn test_from_path_rejects_unknown_extension() {
        assert!(matches!(
            WorldDefinition::from_path("world.yaml"),
            Err(WorldError::UnsupportedFormat(_))
        ));
    }
}
