use super::symbol::{Color, Direction, Item};

/// Player-scoped clause. Present fields are conjoined; absent ones are not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerClause {
    pub colors: Option<Vec<Color>>,
    pub directions: Option<Vec<Direction>>,
    pub items: Option<Vec<Item>>,
}

impl PlayerClause {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors
            .get_or_insert_with(Vec::new)
            .extend(colors);
        self
    }

    #[must_use]
    pub fn directions(mut self, directions: impl IntoIterator<Item = Direction>) -> Self {
        self.directions
            .get_or_insert_with(Vec::new)
            .extend(directions);
        self
    }

    #[must_use]
    pub fn items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.get_or_insert_with(Vec::new).extend(items);
        self
    }

    /// The color an effect paints the player with: the first listed one.
    #[must_use]
    pub fn paint(&self) -> Option<Color> {
        self.colors.as_ref().and_then(|c| c.first().copied())
    }
}

/// The IF side of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Holds when the tile under the player has one of these colors.
    Tile { colors: Vec<Color> },
    /// Holds when the attempted direction is one of these.
    Direction { directions: Vec<Direction> },
    Player(PlayerClause),
}

impl Condition {
    #[must_use]
    pub fn tile(colors: impl IntoIterator<Item = Color>) -> Self {
        Self::Tile {
            colors: colors.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn direction(directions: impl IntoIterator<Item = Direction>) -> Self {
        Self::Direction {
            directions: directions.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn player(clause: PlayerClause) -> Self {
        Self::Player(clause)
    }
}

/// The THEN side of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Forbid these directions unless the condition holds.
    Direction { directions: Vec<Direction> },
    /// Grant items, repaint the player and cascade moves when the condition holds.
    Player(PlayerClause),
}

impl Effect {
    #[must_use]
    pub fn block(directions: impl IntoIterator<Item = Direction>) -> Self {
        Self::Direction {
            directions: directions.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn player(clause: PlayerClause) -> Self {
        Self::Player(clause)
    }
}
