use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

/// One of the four cardinal moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    VariantArray,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Tile and player colors.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    VariantArray,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Black,
    Orange,
    Purple,
}

/// Items a player can carry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    VariantArray,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Item {
    Key,
    Bomb,
}

pub const PLAYER: &str = "🤖";
pub const THEN: &str = "➤";
pub const NEGATION: &str = "🚫";
pub const VICTORY: &str = "🏁";

static DIRECTIONS: [(&str, Direction); 4] = [
    ("⬆️", Direction::Up),
    ("⬇️", Direction::Down),
    ("⬅️", Direction::Left),
    ("➡️", Direction::Right),
];

static COLORS: [(&str, Color); 8] = [
    ("🟥", Color::Red),
    ("🟩", Color::Green),
    ("🟦", Color::Blue),
    ("🟨", Color::Yellow),
    ("⬜", Color::White),
    ("⬛", Color::Black),
    ("🟧", Color::Orange),
    ("🟪", Color::Purple),
];

static ITEMS: [(&str, Item); 2] = [("🗝️", Item::Key), ("💣", Item::Bomb)];

fn lookup<T: Copy>(table: &[(&str, T)], glyph: &str) -> Option<T> {
    table.iter().find(|(g, _)| *g == glyph).map(|(_, v)| *v)
}

fn glyph_of<T: Copy + PartialEq>(table: &'static [(&'static str, T)], value: T) -> &'static str {
    table
        .iter()
        .find(|(_, v)| *v == value)
        .map_or("", |(g, _)| g)
}

impl Direction {
    /// Resolve a DSL glyph such as `"⬆️"`.
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        lookup(&DIRECTIONS, glyph)
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        glyph_of(&DIRECTIONS, self)
    }

    /// Column/row offset of one step; rows grow downwards.
    #[must_use]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

impl Color {
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        lookup(&COLORS, glyph)
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        glyph_of(&COLORS, self)
    }
}

impl Item {
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        lookup(&ITEMS, glyph)
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        glyph_of(&ITEMS, self)
    }
}
