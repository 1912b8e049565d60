use super::state::{Inventory, PlayerState};
use super::symbol::{Color, Direction};

/// Everything a rule condition can look at: the tile under the player, the
/// direction being attempted (or just taken), and the player's color and items.
#[derive(Debug, Clone, Copy)]
pub struct Probe<'a> {
    pub tile: Option<Color>,
    pub direction: Direction,
    pub color: Color,
    pub inventory: &'a Inventory,
}

impl<'a> Probe<'a> {
    #[must_use]
    pub fn new(state: &'a PlayerState, tile: Option<Color>, direction: Direction) -> Self {
        Self {
            tile,
            direction,
            color: state.color,
            inventory: &state.inventory,
        }
    }
}
