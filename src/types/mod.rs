mod condition;
mod error;
mod grid;
mod level;
mod probe;
mod rule;
mod ruleset;
mod state;
mod symbol;
mod token;

pub use condition::{Condition, Effect, PlayerClause};
pub use error::LevelError;
pub use grid::Grid;
pub use level::Level;
pub use probe::Probe;
pub use rule::{CompiledRule, Rule, RuleKind};
pub use ruleset::{RuleSet, RuleSetBuilder};
pub use state::{Inventory, PlayerState, Position, SearchState};
pub use symbol::{Color, Direction, Item, NEGATION, PLAYER, THEN, VICTORY};
pub use token::Token;
