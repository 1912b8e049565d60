use crate::{Direction, Level, PlayerState};

/// What happened on one turn of [`Game::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The move was not allowed; nothing changed.
    Blocked,
    Moved,
    /// The move completed the level.
    Won,
}

/// One player's session on a level. Owns its own [`PlayerState`], so solving
/// the same level meanwhile cannot disturb it.
#[derive(Debug, Clone)]
pub struct Game<'a> {
    level: &'a Level,
    state: PlayerState,
    history: Vec<Direction>,
    won: bool,
}

impl<'a> Game<'a> {
    #[must_use]
    pub fn new(level: &'a Level) -> Self {
        Self {
            level,
            state: level.initial_state(),
            history: Vec::new(),
            won: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Moves taken so far.
    #[must_use]
    pub fn history(&self) -> &[Direction] {
        &self.history
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn allowed_moves(&self) -> Vec<Direction> {
        self.level.allowed_moves(&self.state)
    }

    /// Move without running action rules or checking victory.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        match self.level.try_move(&self.state, direction) {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        }
    }

    /// Take a full turn. Once the level is won further turns are ignored.
    pub fn play(&mut self, direction: Direction) -> Turn {
        if self.won {
            return Turn::Won;
        }
        let Some(next) = self.level.step(&self.state, direction) else {
            return Turn::Blocked;
        };
        self.state = next;
        self.history.push(direction);
        if self.level.is_won(&self.state, direction) {
            self.won = true;
            Turn::Won
        } else {
            Turn::Moved
        }
    }

    pub fn reset(&mut self) {
        self.state = self.level.initial_state();
        self.history.clear();
        self.won = false;
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.level.render(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{bfs, SearchLimits};
    use crate::{Color, Position};

    fn level() -> Level {
        Level::from_dsl(
            [["⬜", "🟥", "⬜"], ["⬜", "⬜", "🟩"]],
            Position::new(0, 0),
            ["🟥➤🤖🟪", "🏁🤖🟪"],
        )
        .unwrap()
    }

    #[test]
    fn blocked_turn_changes_nothing() {
        let level = level();
        let mut game = Game::new(&level);
        assert_eq!(game.play(Direction::Up), Turn::Blocked);
        assert_eq!(game.state(), &level.initial_state());
        assert!(game.history().is_empty());
    }

    #[test]
    fn action_rules_fire_and_win() {
        let level = level();
        let mut game = Game::new(&level);
        assert_eq!(game.play(Direction::Right), Turn::Won);
        assert_eq!(game.state().color, Color::Purple);
        assert!(game.is_won());
        assert_eq!(game.play(Direction::Down), Turn::Won);
        assert_eq!(game.history(), &[Direction::Right]);
    }

    #[test]
    fn try_move_skips_actions() {
        let level = level();
        let mut game = Game::new(&level);
        assert!(game.try_move(Direction::Right));
        assert_eq!(game.state().color, Color::White);
        assert!(!game.try_move(Direction::Up));
    }

    #[test]
    fn solver_path_wins_the_game() {
        let level = level();
        let path = bfs(&level, SearchLimits::default()).into_path().unwrap();
        let mut game = Game::new(&level);
        let turns: Vec<Turn> = path.iter().map(|&d| game.play(d)).collect();
        assert_eq!(turns.last(), Some(&Turn::Won));
    }

    #[test]
    fn reset_restores_start() {
        let level = level();
        let mut game = Game::new(&level);
        let _ = game.play(Direction::Down);
        game.reset();
        assert_eq!(game.state(), &level.initial_state());
        assert!(!game.is_won());
        assert_eq!(game.render(), level.render(&level.initial_state()));
    }
}
