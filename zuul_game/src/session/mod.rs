//! Game session - dispatches parsed commands against the world and player.
//!
//! Each call to [`Game::process`] runs one command to completion and returns
//! the text to show; nothing here prints.

use log::{debug, info};

use zuul_core::{ActionError, Direction, Item, Player, Room, RoomId, World};

use crate::command::{Command, CommandWord};
use crate::config::{ConfigError, GameConfig};

/// Text produced by one command, and whether the game should end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }

    fn line(line: impl Into<String>) -> Self {
        Self::lines(vec![line.into()])
    }

    fn quit() -> Self {
        Self {
            lines: Vec::new(),
            quit: true,
        }
    }

    /// All lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// One play-through: the world and the player walking around in it.
#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    player: Player,
}

impl Game {
    /// Start a game in `start` with a player who can carry `max_weight`.
    pub fn new(world: World, start: RoomId, max_weight: u32) -> Self {
        Self {
            world,
            player: Player::new(start, max_weight),
        }
    }

    /// Build the world named by the configuration and start a game in it.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let (world, start) = config.world_definition()?.build()?;
        info!(
            "Starting game in {} with max weight {}",
            world[start].label(),
            config.max_weight
        );
        Ok(Self::new(world, start, config.max_weight))
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The room the player is standing in.
    pub fn current_room(&self) -> &Room {
        &self.world[self.player.current_room()]
    }

    /// Opening banner followed by where the player is.
    pub fn welcome(&self) -> Reply {
        let mut lines = vec![
            String::new(),
            "Welcome to the World of Zuul!".to_string(),
            "World of Zuul is a new, incredibly boring adventure game.".to_string(),
            "Type 'help' if you need help.".to_string(),
            String::new(),
        ];
        lines.extend(self.location_info());
        Reply::lines(lines)
    }

    /// Execute one command.
    pub fn process(&mut self, command: &Command) -> Reply {
        debug!("Processing {:?}", command);
        let second = command.second_word();

        match command.word {
            CommandWord::Unknown => Reply::line("Unknown command..."),
            CommandWord::Help => Reply::line(format!("Commands: {}", CommandWord::all_words())),
            CommandWord::Go => self.go(second),
            CommandWord::Look => Reply::lines(self.location_info()),
            CommandWord::Eat => Reply::line("Delicious!"),
            CommandWord::Back => self.back(second),
            CommandWord::Take => self.take(second),
            CommandWord::Drop => self.drop(second),
            CommandWord::Items => Reply::lines(self.carried_items()),
            CommandWord::Quit => match second {
                Some(_) => Reply::line("Quit what?"),
                None => Reply::quit(),
            },
        }
    }

    fn go(&mut self, direction: Option<&str>) -> Reply {
        let Some(direction) = direction else {
            return Reply::line("Where to go?");
        };
        // A word that is not a direction cannot name an exit either.
        let Ok(direction) = direction.parse::<Direction>() else {
            return Reply::line(NO_EXIT);
        };

        match self.player.move_to(&self.world, direction) {
            Ok(_) => Reply::lines(self.location_info()),
            Err(err) => Reply::lines(failure_message(CommandWord::Go, &err)),
        }
    }

    fn back(&mut self, second: Option<&str>) -> Reply {
        if second.is_some() {
            return Reply::lines(vec![
                "You can only go back one step.".to_string(),
                "The back command takes no second word.".to_string(),
            ]);
        }
        self.player.back(&self.world);
        Reply::lines(self.location_info())
    }

    fn take(&mut self, name: Option<&str>) -> Reply {
        let Some(name) = name else {
            return Reply::line("Which item?");
        };
        if let Err(err) = self.player.take_item(&mut self.world, name) {
            return Reply::lines(failure_message(CommandWord::Take, &err));
        }
        Reply::lines(self.carried_items())
    }

    fn drop(&mut self, name: Option<&str>) -> Reply {
        let Some(name) = name else {
            return Reply::line("Which item?");
        };
        if let Err(err) = self.player.drop_item(&mut self.world, name) {
            return Reply::lines(failure_message(CommandWord::Drop, &err));
        }
        Reply::lines(self.carried_items())
    }

    fn location_info(&self) -> Vec<String> {
        let room = self.current_room();
        let mut lines = vec![format!("Location: {}", room.description())];
        lines.extend(room.item_summary());
        lines
    }

    fn carried_items(&self) -> Vec<String> {
        let mut lines = vec!["<Carrying Items>".to_string()];
        lines.extend(self.player.inventory().iter().map(Item::long_description));
        lines.push(format!(
            "<Total weight: {}, max weight: {}>",
            self.player.total_weight(),
            self.player.max_weight()
        ));
        lines
    }
}

const NO_EXIT: &str = "There is no exit that way.";

/// What to tell the player when `word` had no effect.
fn failure_message(word: CommandWord, err: &ActionError) -> Vec<String> {
    match (word, err) {
        (_, ActionError::NoSuchExit { .. }) => vec![NO_EXIT.to_string()],
        (CommandWord::Drop, ActionError::ItemNotFound { .. }) => {
            vec!["You don't have that item.".to_string()]
        }
        (_, ActionError::ItemNotFound { .. }) => vec!["Cannot take item.".to_string()],
        (
            _,
            ActionError::OverCapacity {
                name,
                weight,
                carried,
                max_weight,
            },
        ) => vec![
            "Cannot take item.".to_string(),
            format!("The {name} weighs {weight}Kg; you are carrying {carried} of {max_weight}."),
        ],
    }
}
