mod compile;
pub mod definition;
mod error;
mod evaluate;
pub mod game;
pub mod generate;
mod moves;
pub mod parse;
pub mod search;
mod types;

pub use definition::LevelDefinition;
pub use error::GlyphgateError;
pub use game::{Game, Turn};
pub use generate::{GenerationError, GeneratorConfig, SolutionCriteria};
pub use search::{SearchLimits, SearchOutcome, Solver, Strategy};
pub use types::{
    Color, CompiledRule, Condition, Direction, Effect, Grid, Inventory, Item, Level, LevelError,
    NEGATION, PLAYER, PlayerClause, PlayerState, Position, Probe, Rule, RuleKind, RuleSet,
    RuleSetBuilder, SearchState, THEN, Token, VICTORY,
};
