//! Commands - what a line of player input turns into.

mod parser;

pub use parser::*;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Every word the game understands as the start of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CommandWord {
    Go,
    Quit,
    Help,
    Look,
    Eat,
    Back,
    Take,
    Drop,
    Items,
    /// Anything not recognised.
    Unknown,
}

impl CommandWord {
    /// Valid command words separated by spaces, for `help`.
    pub fn all_words() -> String {
        Self::iter()
            .filter(|word| *word != CommandWord::Unknown)
            .map(|word| word.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A parsed command: a command word and an optional second word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub word: CommandWord,
    /// `None` when the player typed a single word.
    pub second: Option<String>,
}

impl Command {
    pub fn new(word: CommandWord, second: Option<String>) -> Self {
        Self { word, second }
    }

    /// A command with no second word.
    pub fn bare(word: CommandWord) -> Self {
        Self::new(word, None)
    }

    /// A command with a second word.
    pub fn with_second(word: CommandWord, second: impl Into<String>) -> Self {
        Self::new(word, Some(second.into()))
    }

    pub fn is_unknown(&self) -> bool {
        self.word == CommandWord::Unknown
    }

    pub fn second_word(&self) -> Option<&str> {
        self.second.as_deref()
    }

    pub fn has_second_word(&self) -> bool {
        self.second.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_words_skips_unknown() {
        assert_eq!(
            CommandWord::all_words(),
            "go quit help look eat back take drop items"
        );
    }

    #[test]
    fn test_command_word_parse() {
        assert_eq!("take".parse::<CommandWord>(), Ok(CommandWord::Take));
        assert!("Take".parse::<CommandWord>().is_err());
    }

    #[test]
    fn test_second_word_distinguishes_absent_from_empty() {
        let bare = Command::bare(CommandWord::Take);
        let empty = Command::with_second(CommandWord::Take, "");

        assert!(!bare.has_second_word());
        assert!(empty.has_second_word());
        assert_eq!(empty.second_word(), Some(""));
        assert_ne!(bare, empty);
    }
}
