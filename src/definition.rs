use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GlyphgateError;
use crate::{Direction, Grid, Level, LevelError, Position, RuleSet};

/// A level as it is stored and exchanged: glyph rows, start, DSL rules and an
/// optional reference solution.
///
/// An empty string in `grid` marks a slot still to be filled by a generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub grid: Vec<Vec<String>>,
    /// `[x, y]`.
    pub start: [usize; 2],
    pub emoji_rules: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<Vec<String>>,
}

impl LevelDefinition {
    /// # Errors
    ///
    /// Returns [`GlyphgateError::Json`] if the input is not a level record.
    pub fn from_json(input: &str) -> Result<Self, GlyphgateError> {
        Ok(serde_json::from_str(input)?)
    }

    /// # Errors
    ///
    /// Returns [`GlyphgateError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, GlyphgateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// # Errors
    ///
    /// Returns [`GlyphgateError`] on I/O or JSON failure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GlyphgateError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json(&input)
    }

    /// # Errors
    ///
    /// Returns [`GlyphgateError`] on I/O or JSON failure.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), GlyphgateError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Record a level together with the rule strings it was compiled from.
    ///
    /// A [`Grid`] keeps no glyph text for cells that are not colors, so blank
    /// slots and unknown glyphs alike are written back as `""`. A definition
    /// loaded with `"?"` in its grid therefore comes back with an empty
    /// generator slot in its place.
    #[must_use]
    pub fn from_level(level: &Level, emoji_rules: Vec<String>, solution: Option<&[Direction]>) -> Self {
        let grid = level
            .grid()
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or_else(String::new, |c| c.glyph().to_owned()))
                    .collect()
            })
            .collect();
        Self {
            grid,
            start: [level.start().x, level.start().y],
            emoji_rules,
            solution: solution.map(|path| path.iter().map(ToString::to_string).collect()),
        }
    }

    /// Compile into a playable [`Level`].
    ///
    /// # Errors
    ///
    /// Returns [`LevelError`] if the grid is empty or ragged or the start is off-grid.
    pub fn to_level(&self) -> Result<Level, LevelError> {
        Level::new(
            Grid::from_glyphs(&self.grid)?,
            Position::new(self.start[0], self.start[1]),
            RuleSet::from_dsl(&self.emoji_rules),
        )
    }

    /// The stored solution as directions, if there is one.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::UnknownDirection`] for a name other than
    /// `UP`, `DOWN`, `LEFT` or `RIGHT`.
    pub fn solution_path(&self) -> Result<Option<Vec<Direction>>, LevelError> {
        self.solution
            .as_ref()
            .map(|names| {
                names
                    .iter()
                    .map(|n| Direction::from_str(n).map_err(|_| LevelError::UnknownDirection(n.clone())))
                    .collect()
            })
            .transpose()
    }

    /// Replay the stored solution and check that it ends in a won state.
    /// A definition without a solution, or with an empty one, does not verify.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError`] if the level or the solution cannot be read.
    pub fn verify_solution(&self) -> Result<bool, LevelError> {
        let level = self.to_level()?;
        let Some(path) = self.solution_path()? else {
            return Ok(false);
        };
        let Some(&last) = path.last() else {
            return Ok(false);
        };
        Ok(level
            .replay(&path)
            .is_some_and(|end| level.is_won(&end, last)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{bfs, SearchLimits};

    const SAMPLE: &str = r#"{
  "grid": [["⬜", "⬜"], ["🟥", ""]],
  "start": [0, 0],
  "emoji_rules": ["➡️➤🏁"],
  "solution": ["RIGHT"]
}"#;

    #[test]
    fn load_sample() {
        let def = LevelDefinition::from_json(SAMPLE).unwrap();
        assert_eq!(def.grid[1][1], "");
        let level = def.to_level().unwrap();
        assert_eq!(level.grid().width(), 2);
        assert_eq!(level.rules().victory().len(), 1);
        assert_eq!(def.solution_path().unwrap(), Some(vec![Direction::Right]));
        assert!(def.verify_solution().unwrap());
    }

    #[test]
    fn solution_is_optional() {
        let def = LevelDefinition::from_json(
            r#"{"grid": [["⬜"]], "start": [0, 0], "emoji_rules": []}"#,
        )
        .unwrap();
        assert_eq!(def.solution, None);
        assert!(!def.verify_solution().unwrap());
        assert!(!def.to_json().unwrap().contains("solution"));
    }

    #[test]
    fn wrong_solution_does_not_verify() {
        let mut def = LevelDefinition::from_json(SAMPLE).unwrap();
        def.solution = Some(vec!["DOWN".into()]);
        assert!(!def.verify_solution().unwrap());
        def.solution = Some(vec!["SIDEWAYS".into()]);
        assert!(matches!(
            def.verify_solution(),
            Err(LevelError::UnknownDirection(name)) if name == "SIDEWAYS"
        ));
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(matches!(
            LevelDefinition::from_json("{\"grid\": 3}"),
            Err(GlyphgateError::Json(_))
        ));
    }

    #[test]
    fn from_level_keeps_unresolved_slots() {
        let def = LevelDefinition::from_json(SAMPLE).unwrap();
        let level = def.to_level().unwrap();
        let path = bfs(&level, SearchLimits::default()).into_path().unwrap();
        let again = LevelDefinition::from_level(&level, def.emoji_rules.clone(), Some(&path));
        assert_eq!(again, def);
    }

    #[test]
    fn from_level_blanks_unknown_glyphs() {
        let def = LevelDefinition {
            grid: vec![vec!["🟥".into(), "?".into(), String::new()]],
            start: [0, 0],
            emoji_rules: vec!["🏁🟩".into()],
            solution: None,
        };
        let level = def.to_level().unwrap();
        let again = LevelDefinition::from_level(&level, def.emoji_rules.clone(), None);
        assert_eq!(again.grid, vec![vec!["🟥".to_owned(), String::new(), String::new()]]);
        assert_eq!(again.to_level().unwrap().grid(), level.grid());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.json");
        let def = LevelDefinition::from_json(SAMPLE).unwrap();
        def.to_file(&path).unwrap();
        assert_eq!(LevelDefinition::from_file(&path).unwrap(), def);
        assert!(matches!(
            LevelDefinition::from_file(dir.path().join("missing.json")),
            Err(GlyphgateError::Io(_))
        ));
    }
}
