//! Things that live in the world: items and the player carrying them.

mod item;
mod player;

pub use item::*;
pub use player::*;

/// Sum the weights of a collection of items.
pub fn total_weight<'a>(items: impl IntoIterator<Item = &'a Item>) -> u32 {
    items.into_iter().map(Item::weight).sum()
}

/// Find the position of the first item called `name`.
pub(crate) fn position_of(items: &[Item], name: &str) -> Option<usize> {
    items.iter().position(|item| item.name() == name)
}
