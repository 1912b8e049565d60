//! Random levels for which a solution of a requested shape is known to exist.
//!
//! Generation is driven by any [`rand::Rng`]; [`generate_seeded`] uses ChaCha8
//! so a seed always reproduces the same level. The search engine is used purely
//! as an oracle: a candidate is kept only if BFS finds a shortest solution that
//! meets the [`SolutionCriteria`].

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strum::VariantArray;
use thiserror::Error;

use crate::search::{bfs, SearchLimits};
use crate::{
    Color, Direction, Item, Level, LevelDefinition, LevelError, NEGATION, PLAYER, THEN, VICTORY,
};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no acceptable level found after {attempts} attempts")]
    Exhausted { attempts: usize },

    #[error(transparent)]
    Level(#[from] LevelError),
}

/// Shape a shortest solution must have for a level to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionCriteria {
    pub min_len: usize,
    pub min_distinct_directions: usize,
}

impl SolutionCriteria {
    #[must_use]
    pub fn accepts(&self, path: &[Direction]) -> bool {
        let distinct: HashSet<&Direction> = path.iter().collect();
        path.len() >= self.min_len && distinct.len() >= self.min_distinct_directions
    }
}

impl Default for SolutionCriteria {
    fn default() -> Self {
        Self {
            min_len: 5,
            min_distinct_directions: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub num_rules: usize,
    pub criteria: SolutionCriteria,
    /// Random fillings of the template tried per rule set.
    pub grid_attempts: usize,
    /// Rule sets drawn before giving up.
    pub rule_attempts: usize,
    pub limits: SearchLimits,
    /// `[x, y]`.
    pub start: [usize; 2],
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_rules: 5,
            criteria: SolutionCriteria::default(),
            grid_attempts: 10,
            rule_attempts: 200,
            limits: SearchLimits::default(),
            start: [0, 0],
        }
    }
}

/// An accepted level with its shortest solution.
#[derive(Debug, Clone)]
pub struct GeneratedLevel {
    pub definition: LevelDefinition,
    pub level: Level,
    pub solution: Vec<Direction>,
}

// -- Rule strings -----------------------------------------------------------

fn glyphs<R, T>(rng: &mut R, pool: &[T], max: usize, glyph: fn(T) -> &'static str) -> String
where
    R: Rng + ?Sized,
    T: Copy,
{
    let count = rng.gen_range(1..=max);
    pool.choose_multiple(rng, count)
        .map(|&v| glyph(v))
        .collect()
}

fn tile_clause<R: Rng + ?Sized>(rng: &mut R) -> String {
    glyphs(rng, Color::VARIANTS, 3, Color::glyph)
}

fn direction_clause<R: Rng + ?Sized>(rng: &mut R) -> String {
    glyphs(rng, Direction::VARIANTS, 2, Direction::glyph)
}

/// A player marker followed by at least one of colors, directions, items.
fn player_clause<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut clause = String::from(PLAYER);
    let mut empty = true;
    if rng.gen_bool(0.5) {
        clause += &glyphs(rng, Color::VARIANTS, 2, Color::glyph);
        empty = false;
    }
    if rng.gen_bool(0.5) {
        clause += &direction_clause(rng);
        empty = false;
    }
    if empty || rng.gen_bool(0.5) {
        clause += &glyphs(rng, Item::VARIANTS, 2, Item::glyph);
    }
    clause
}

/// One random rule string.
///
/// Three families are drawn with equal odds: a tile or direction condition,
/// a player condition (both followed by a direction or player effect), or a
/// victory rule with any kind of condition. Half of all rules are negated.
pub fn random_rule<R: Rng + ?Sized>(rng: &mut R) -> String {
    let negated = rng.gen_bool(0.5);
    let mut rule = match rng.gen_range(0..3) {
        0 if rng.gen_bool(0.5) => direction_clause(rng),
        0 => tile_clause(rng),
        1 => player_clause(rng),
        _ => {
            let condition = match rng.gen_range(0..3) {
                0 => tile_clause(rng),
                1 => direction_clause(rng),
                _ => player_clause(rng),
            };
            return prefix(negated, format!("{VICTORY}{condition}"));
        }
    };
    rule += THEN;
    if rng.gen_bool(0.5) {
        rule += &direction_clause(rng);
    } else {
        rule += &player_clause(rng);
    }
    prefix(negated, rule)
}

fn prefix(negated: bool, rule: String) -> String {
    if negated {
        format!("{NEGATION}{rule}")
    } else {
        rule
    }
}

pub fn random_rules<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count).map(|_| random_rule(rng)).collect()
}

// -- Grids ------------------------------------------------------------------

/// Copy `template`, painting every empty slot with a random color.
pub fn fill_grid<R: Rng + ?Sized>(rng: &mut R, template: &[Vec<String>]) -> Vec<Vec<String>> {
    template
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if cell.is_empty() {
                        Color::VARIANTS
                            .choose(rng)
                            .map_or_else(String::new, |c| c.glyph().to_owned())
                    } else {
                        cell.clone()
                    }
                })
                .collect()
        })
        .collect()
}

// -- Generation -------------------------------------------------------------

/// Try up to `config.grid_attempts` fillings of `template` under a fixed rule set.
///
/// # Errors
///
/// [`GenerationError::Level`] if the template or start is invalid,
/// [`GenerationError::Exhausted`] if no filling yields an acceptable solution.
pub fn generate_for_rules<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rules: &[String],
    template: &[Vec<String>],
    rng: &mut R,
) -> Result<GeneratedLevel, GenerationError> {
    for attempt in 0..config.grid_attempts {
        let definition = LevelDefinition {
            grid: fill_grid(rng, template),
            start: config.start,
            emoji_rules: rules.to_vec(),
            solution: None,
        };
        let level = definition.to_level()?;
        match bfs(&level, config.limits).into_path() {
            Some(solution) if config.criteria.accepts(&solution) => {
                let definition = LevelDefinition {
                    solution: Some(solution.iter().map(ToString::to_string).collect()),
                    ..definition
                };
                return Ok(GeneratedLevel {
                    definition,
                    level,
                    solution,
                });
            }
            Some(solution) => {
                tracing::debug!(attempt, moves = solution.len(), "solution too simple");
            }
            None => tracing::debug!(attempt, "grid not solvable"),
        }
    }
    Err(GenerationError::Exhausted {
        attempts: config.grid_attempts,
    })
}

/// Draw rule sets until one admits a grid filling whose shortest solution meets
/// the criteria, or `config.rule_attempts` rule sets have been tried.
///
/// # Errors
///
/// [`GenerationError::Level`] if the template or start is invalid,
/// [`GenerationError::Exhausted`] if every rule set was rejected.
pub fn generate_level<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    template: &[Vec<String>],
    rng: &mut R,
) -> Result<GeneratedLevel, GenerationError> {
    for attempt in 0..config.rule_attempts {
        let rules = random_rules(rng, config.num_rules);
        match generate_for_rules(config, &rules, template, rng) {
            Ok(generated) => {
                tracing::info!(
                    attempt,
                    moves = generated.solution.len(),
                    rules = ?generated.definition.emoji_rules,
                    "generated level"
                );
                return Ok(generated);
            }
            Err(GenerationError::Exhausted { .. }) => {
                tracing::warn!(attempt, ?rules, "rule set rejected, retrying");
            }
            Err(err) => return Err(err),
        }
    }
    Err(GenerationError::Exhausted {
        attempts: config.rule_attempts,
    })
}

/// [`generate_level`] with a ChaCha8 generator seeded from `seed`.
///
/// # Errors
///
/// Same as [`generate_level`].
pub fn generate_seeded(
    config: &GeneratorConfig,
    template: &[Vec<String>],
    seed: u64,
) -> Result<GeneratedLevel, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_level(config, template, &mut rng)
}
