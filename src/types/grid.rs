use std::fmt;

use super::error::LevelError;
use super::state::Position;
use super::symbol::{Color, Direction};

/// Rectangular tile matrix, fixed after construction.
///
/// A cell is `None` when its glyph was blank or not a known color; the player may
/// stand on such a cell but cannot leave it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<Color>>,
}

impl Grid {
    /// Build from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::EmptyGrid`] for zero rows or zero columns and
    /// [`LevelError::RaggedGrid`] when rows differ in length.
    pub fn new(rows: Vec<Vec<Option<Color>>>) -> Result<Self, LevelError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(LevelError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(LevelError::RaggedGrid {
                    row,
                    expected: width,
                    found: cols.len(),
                });
            }
            cells.extend(cols);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build from rows of glyphs such as `"🟥"`. Unknown or empty glyphs become `None`.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::new`].
    pub fn from_glyphs<R, S>(rows: R) -> Result<Self, LevelError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|g| Color::from_glyph(g.as_ref()))
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    /// A `width` x `height` grid painted with one color.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::EmptyGrid`] if either side is zero.
    pub fn filled(width: usize, height: usize, color: Color) -> Result<Self, LevelError> {
        Self::new(vec![vec![Some(color); width]; height])
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Color at `pos`; `None` if out of bounds or unresolved.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Option<Color> {
        if self.contains(pos) {
            self.cells[pos.y * self.width + pos.x]
        } else {
            None
        }
    }

    /// The in-bounds neighbor of `pos` along `direction`.
    #[must_use]
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        pos.step(direction).filter(|&p| self.contains(p))
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Color>]> {
        self.cells.chunks(self.width)
    }

    #[must_use]
    pub fn positions(&self) -> usize {
        self.cells.len()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(cell.map_or("  ", Color::glyph))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_rejected() {
        let result = Grid::from_glyphs([vec!["⬜", "⬜"], vec!["⬜"]]);
        assert!(matches!(
            result,
            Err(LevelError::RaggedGrid {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(Grid::new(vec![]), Err(LevelError::EmptyGrid)));
        assert!(matches!(Grid::new(vec![vec![]]), Err(LevelError::EmptyGrid)));
    }

    #[test]
    fn unknown_glyphs_are_unresolved() {
        let grid = Grid::from_glyphs([vec!["🟥", ""], vec!["?", "🟦"]]).unwrap();
        assert_eq!(grid.tile(Position::new(0, 0)), Some(Color::Red));
        assert_eq!(grid.tile(Position::new(1, 0)), None);
        assert_eq!(grid.tile(Position::new(0, 1)), None);
        assert_eq!(grid.tile(Position::new(1, 1)), Some(Color::Blue));
        assert_eq!(grid.tile(Position::new(5, 5)), None);
    }

    #[test]
    fn neighbor_respects_bounds() {
        let grid = Grid::filled(2, 1, Color::White).unwrap();
        let origin = Position::new(0, 0);
        assert_eq!(grid.neighbor(origin, Direction::Right), Some(Position::new(1, 0)));
        assert_eq!(grid.neighbor(origin, Direction::Down), None);
        assert_eq!(grid.neighbor(Position::new(1, 0), Direction::Right), None);
    }

    #[test]
    fn display_draws_rows() {
        let grid = Grid::from_glyphs([vec!["🟥", "🟦"]]).unwrap();
        assert_eq!(grid.to_string(), "🟥🟦\n");
    }
}
