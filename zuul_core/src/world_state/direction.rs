//! Exit directions.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The closed set of words an exit can be labelled with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_direction_parse() {
        assert_eq!("north".parse::<Direction>(), Ok(Direction::North));
        assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
        assert!("North".parse::<Direction>().is_err());
        assert!("sideways".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_display_matches_parse() {
        for direction in Direction::iter() {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
            let name: &str = direction.as_ref();
            assert_eq!(name, direction.to_string());
        }
    }
}
