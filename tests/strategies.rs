#![allow(dead_code)]

use glyphgate::generate::random_rules;
use glyphgate::{Color, Direction, Grid, Inventory, Item, Level, PlayerState, Position, RuleSet};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strum::VariantArray;

/// A small level together with the rule strings it was compiled from.
#[derive(Debug, Clone)]
pub struct GenLevel {
    pub level: Level,
    pub rules: Vec<String>,
}

/// Rule strings drawn from the same distribution the level generator uses.
pub fn arb_rules(max: usize) -> impl Strategy<Value = Vec<String>> {
    (any::<u64>(), 1..=max).prop_map(|(seed, count)| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        random_rules(&mut rng, count)
    })
}

/// A single cell: usually a color, occasionally unresolved.
pub fn arb_cell() -> impl Strategy<Value = Option<Color>> {
    prop::option::weighted(0.9, prop::sample::select(Color::VARIANTS))
}

pub fn arb_grid() -> impl Strategy<Value = Grid> {
    (1_usize..=4, 1_usize..=4).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::collection::vec(arb_cell(), width), height)
            .prop_map(|rows| Grid::new(rows).unwrap())
    })
}

/// Grids up to 4x4 with the start somewhere on the grid and up to five rules.
pub fn arb_level() -> impl Strategy<Value = GenLevel> {
    (arb_grid(), arb_rules(5)).prop_flat_map(|(grid, rules)| {
        let (width, height) = (grid.width(), grid.height());
        (0..width, 0..height).prop_map(move |(x, y)| GenLevel {
            level: Level::new(grid.clone(), Position::new(x, y), RuleSet::from_dsl(&rules))
                .unwrap(),
            rules: rules.clone(),
        })
    })
}

pub fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::VARIANTS)
}

pub fn arb_inventory() -> impl Strategy<Value = Inventory> {
    prop::collection::vec(prop::sample::select(Item::VARIANTS), 0..4)
        .prop_map(|items| items.into_iter().collect())
}

/// A player standing anywhere on a 4x4 board.
pub fn arb_player() -> impl Strategy<Value = PlayerState> {
    (
        0_usize..4,
        0_usize..4,
        prop::sample::select(Color::VARIANTS),
        arb_inventory(),
    )
        .prop_map(|(x, y, color, inventory)| PlayerState {
            position: Position::new(x, y),
            color,
            inventory,
        })
}
