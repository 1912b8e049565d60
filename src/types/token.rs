use std::fmt;

use super::symbol::{self, Color, Direction, Item};

/// One grapheme cluster of a rule string, classified against the symbol tables.
///
/// Unrecognised clusters are kept verbatim so that tokenizing never loses input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Direction(Direction),
    Color(Color),
    Item(Item),
    Player,
    Then,
    Negation,
    Victory,
    Unknown(String),
}

impl Token {
    /// Classify a single grapheme cluster.
    #[must_use]
    pub fn classify(cluster: &str) -> Self {
        match cluster {
            symbol::PLAYER => Self::Player,
            symbol::THEN => Self::Then,
            symbol::NEGATION => Self::Negation,
            symbol::VICTORY => Self::Victory,
            other => Direction::from_glyph(other)
                .map(Self::Direction)
                .or_else(|| Color::from_glyph(other).map(Self::Color))
                .or_else(|| Item::from_glyph(other).map(Self::Item))
                .unwrap_or_else(|| Self::Unknown(other.to_owned())),
        }
    }

    /// The source text this token was read from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Direction(d) => d.glyph(),
            Self::Color(c) => c.glyph(),
            Self::Item(i) => i.glyph(),
            Self::Player => symbol::PLAYER,
            Self::Then => symbol::THEN,
            Self::Negation => symbol::NEGATION,
            Self::Victory => symbol::VICTORY,
            Self::Unknown(s) => s,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
