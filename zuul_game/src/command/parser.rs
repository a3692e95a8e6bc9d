//! Turns raw input lines into [`Command`]s.

use std::io::BufRead;

use super::{Command, CommandWord};

/// Splits input into a command word and an optional second word.
///
/// Only the first two words of a line matter; anything after them is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one line of input.
    pub fn parse(&self, line: &str) -> Command {
        let mut words = line.split_whitespace();
        let word = words
            .next()
            .and_then(|first| first.parse::<CommandWord>().ok())
            .unwrap_or(CommandWord::Unknown);
        let second = words.next().map(str::to_string);
        Command::new(word, second)
    }

    /// Read and parse the next line, or `None` at end of input.
    pub fn read_command(&self, input: &mut impl BufRead) -> std::io::Result<Option<Command>> {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.parse(&line)))
    }
}
