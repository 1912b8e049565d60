use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::symbol::{Color, Direction, Item};

/// Grid coordinate; `x` is the column and `y` the row, origin at the top left.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// One step along `direction`, or `None` when it would leave the first quadrant.
    /// Upper bounds are the grid's business.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Multiset of carried items. Only ever grows along a path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Inventory {
    counts: BTreeMap<Item, u32>,
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        *self.counts.entry(item).or_insert(0) += 1;
    }

    #[must_use]
    pub fn contains(&self, item: Item) -> bool {
        self.counts.contains_key(&item)
    }

    /// True if any of `items` is carried.
    #[must_use]
    pub fn holds_any(&self, items: &[Item]) -> bool {
        items.iter().any(|&i| self.contains(i))
    }

    #[must_use]
    pub fn count(&self, item: Item) -> u32 {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().map(|&n| n as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct carried item kinds, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<Item> {
        self.counts.keys().copied().collect()
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        let mut inventory = Self::new();
        for item in iter {
            inventory.add(item);
        }
        inventory
    }
}

/// The mutable part of a level: where the player is, its color and what it carries.
///
/// Transitions build a new value instead of mutating a shared one, so search
/// branches never observe each other's effects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerState {
    pub position: Position,
    pub color: Color,
    pub inventory: Inventory,
}

impl PlayerState {
    /// A fresh white player with empty pockets.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self {
            position,
            color: Color::White,
            inventory: Inventory::new(),
        }
    }

    /// Deduplication key for the search graph.
    ///
    /// Conditions only ever test item membership, so counts are dropped and two
    /// states that differ only in how many copies they hold are the same node.
    #[must_use]
    pub fn key(&self) -> SearchState {
        SearchState {
            position: self.position,
            color: self.color,
            items: self.inventory.kinds(),
        }
    }
}

/// `(position, color, sorted item kinds)`; the visited-set key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchState {
    pub position: Position,
    pub color: Color,
    pub items: Vec<Item>,
}
