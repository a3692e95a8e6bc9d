//! Console front end for the Zuul adventure.

use clap::Parser as _;
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use zuul_game::{Game, GameConfig, Parser};

/// Walk the campus, pick things up, put them down.
#[derive(Debug, clap::Parser)]
#[command(name = "zuul", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// World definition file (.toml or .json), overriding the configuration.
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// Maximum carry weight, overriding the configuration.
    #[arg(short, long)]
    max_weight: Option<u32>,

    /// Print the world definition as JSON and exit.
    #[arg(long)]
    dump_world: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(world) = cli.world {
        config.world = Some(world);
    }
    if let Some(max_weight) = cli.max_weight {
        config.max_weight = max_weight;
    }
    debug!("Effective config: {:?}", config);

    if cli.dump_world {
        return dump_world(&config, &mut io::stdout());
    }

    let mut game = Game::from_config(&config)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    play(&mut game, &mut input, &mut io::stdout())?;

    info!("Session finished");
    Ok(())
}

/// Write the configured world definition as JSON.
fn dump_world(
    config: &GameConfig,
    output: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(output, "{}", config.world_definition()?.to_json_string()?)?;
    Ok(())
}

/// Read-process loop: one command per line until `quit` or end of input.
fn play(game: &mut Game, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    let parser = Parser::new();
    writeln!(output, "{}", game.welcome().text())?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(command) = parser.read_command(input)? else {
            break;
        };
        let reply = game.process(&command);
        if !reply.lines.is_empty() {
            writeln!(output, "{}", reply.text())?;
        }
        if reply.quit {
            break;
        }
    }

    writeln!(output, "Thank you for playing.  Good bye.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_play_until_quit() {
        let mut game = Game::from_config(&GameConfig::default()).unwrap();
        let mut input = Cursor::new("go west\ntake portion\nquit\nlook\n");
        let mut output = Vec::new();

        play(&mut game, &mut input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Location: Dongari room"));
        assert!(text.contains("portion (5Kg, a potion that restores 5 health)"));
        assert!(text.ends_with("Thank you for playing.  Good bye.\n"));
        assert_eq!(game.player().total_weight(), 5);
    }

    #[test]
    fn test_play_stops_at_end_of_input() {
        let mut game = Game::from_config(&GameConfig::default()).unwrap();
        let mut input = Cursor::new("go south\n");
        let mut output = Vec::new();

        play(&mut game, &mut input, &mut output).unwrap();
        assert_eq!(game.current_room().label(), "Computer room");
    }

    #[test]
    fn test_dump_world_applies_start_override() {
        let config = GameConfig {
            start_room: Some("Office".to_string()),
            ..GameConfig::default()
        };
        let mut output = Vec::new();
        dump_world(&config, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let definition = zuul_core::WorldDefinition::from_json_str(&text).unwrap();
        assert_eq!(definition.start, "Office");
        assert_eq!(definition.rooms, zuul_core::WorldDefinition::campus().rooms);
    }

    #[test]
    fn test_dump_world_reports_bad_world_file() {
        let config = GameConfig {
            world: Some(PathBuf::from("worlds/campus.yaml")),
            ..GameConfig::default()
        };
        let mut output = Vec::new();
        assert!(dump_world(&config, &mut output).is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["zuul", "--max-weight", "30", "--world", "w.toml"]);
        assert_eq!(cli.max_weight, Some(30));
        assert_eq!(cli.world, Some(PathBuf::from("w.toml")));
        assert!(!cli.dump_world);
    }
}
