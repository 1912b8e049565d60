use thiserror::Error;

/// Errors raised while assembling a [`Level`](super::Level).
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("grid has no tiles")]
    EmptyGrid,

    #[error("grid row {row} has {found} tiles, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("start ({x}, {y}) lies outside the {width}x{height} grid")]
    StartOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("unknown direction name '{0}'")]
    UnknownDirection(String),
}
