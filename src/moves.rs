use strum::VariantArray;

use crate::{Direction, Level, PlayerState, Probe};

/// Directions in which the player may leave `state.position`.
///
/// Movement rules are probed with the tile the player currently stands on, not
/// the destination. Standing on an unresolved tile allows nothing.
pub(crate) fn allowed_moves(level: &Level, state: &PlayerState) -> Vec<Direction> {
    let Some(tile) = level.tile(state.position) else {
        return Vec::new();
    };
    Direction::VARIANTS
        .iter()
        .copied()
        .filter(|&d| level.rules().permits(&Probe::new(state, Some(tile), d)))
        .filter(|&d| level.grid().neighbor(state.position, d).is_some())
        .collect()
}

/// Move one tile if allowed; otherwise `None` and nothing changes.
pub(crate) fn try_move(
    level: &Level,
    state: &PlayerState,
    direction: Direction,
) -> Option<PlayerState> {
    if !allowed_moves(level, state).contains(&direction) {
        return None;
    }
    let position = level.grid().neighbor(state.position, direction)?;
    Some(PlayerState {
        position,
        ..state.clone()
    })
}

/// A full turn: the move itself, then every action rule in registration order.
pub(crate) fn step(
    level: &Level,
    state: &PlayerState,
    direction: Direction,
) -> Option<PlayerState> {
    let moved = try_move(level, state, direction)?;
    Some(
        level
            .rules()
            .action()
            .iter()
            .fold(moved, |s, rule| rule.apply(level, s, direction)),
    )
}

impl Level {
    /// Directions the movement rules and grid bounds permit from `state`.
    #[must_use]
    pub fn allowed_moves(&self, state: &PlayerState) -> Vec<Direction> {
        allowed_moves(self, state)
    }

    /// Move without running action rules. `None` if the move is not allowed.
    #[must_use]
    pub fn try_move(&self, state: &PlayerState, direction: Direction) -> Option<PlayerState> {
        try_move(self, state, direction)
    }

    /// Move and run action rules. `None` if the move is not allowed.
    #[must_use]
    pub fn step(&self, state: &PlayerState, direction: Direction) -> Option<PlayerState> {
        step(self, state, direction)
    }

    /// Whether `state`, reached by moving along `last`, satisfies every victory rule.
    #[must_use]
    pub fn is_won(&self, state: &PlayerState, last: Direction) -> bool {
        let tile = self.tile(state.position);
        self.rules().is_won(&Probe::new(state, tile, last))
    }

    /// Replay `path` from the start. Returns the final state, or `None` if some
    /// move along the way is not allowed.
    #[must_use]
    pub fn replay(&self, path: &[Direction]) -> Option<PlayerState> {
        path.iter()
            .try_fold(self.initial_state(), |s, &d| self.step(&s, d))
    }
}
