use thiserror::Error;

use crate::generate::GenerationError;
use crate::LevelError;

/// Unified error type covering level construction, generation, JSON and I/O.
///
/// Returned by convenience methods like
/// [`LevelDefinition::from_file()`](crate::LevelDefinition::from_file).
#[derive(Debug, Error)]
pub enum GlyphgateError {
    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
