use super::error::LevelError;
use super::grid::Grid;
use super::ruleset::RuleSet;
use super::state::{PlayerState, Position};
use super::symbol::{self, Color, Item};

/// A playable level: an immutable grid, a start coordinate and compiled rules.
///
/// `Level` holds no player state. Play and search both thread a
/// [`PlayerState`] through it, starting from [`Level::initial_state`].
#[derive(Debug, Clone)]
pub struct Level {
    grid: Grid,
    start: Position,
    rules: RuleSet,
}

impl Level {
    /// # Errors
    ///
    /// Returns [`LevelError::StartOutOfBounds`] if `start` is not on the grid.
    pub fn new(grid: Grid, start: Position, rules: RuleSet) -> Result<Self, LevelError> {
        if !grid.contains(start) {
            return Err(LevelError::StartOutOfBounds {
                x: start.x,
                y: start.y,
                width: grid.width(),
                height: grid.height(),
            });
        }
        Ok(Self { grid, start, rules })
    }

    /// Build a level from glyph rows and DSL rule strings.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError`] if the grid is empty or ragged or the start is off-grid.
    pub fn from_dsl<R, S, I, T>(rows: R, start: Position, rules: I) -> Result<Self, LevelError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::new(Grid::from_glyphs(rows)?, start, RuleSet::from_dsl(rules))
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn tile(&self, pos: Position) -> Option<Color> {
        self.grid.tile(pos)
    }

    /// The player as it stands before the first move.
    #[must_use]
    pub fn initial_state(&self) -> PlayerState {
        PlayerState::at(self.start)
    }

    /// Draw the grid with the player glyph at the player's position.
    #[must_use]
    pub fn render(&self, state: &PlayerState) -> String {
        let mut out = String::new();
        for (y, row) in self.grid.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if state.position == Position::new(x, y) {
                    out.push_str(symbol::PLAYER);
                } else {
                    out.push_str(cell.map_or("  ", Color::glyph));
                }
            }
            out.push('\n');
        }
        out.push_str(&format!("color: {}", state.color));
        if !state.inventory.is_empty() {
            let items: String = state.inventory.kinds().into_iter().map(Item::glyph).collect();
            out.push_str(&format!("  items: {items}"));
        }
        out.push('\n');
        out
    }
}
