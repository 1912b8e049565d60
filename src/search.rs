use std::collections::{HashSet, VecDeque};
use std::fmt;

use crate::{Direction, Level, PlayerState, SearchState};

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Breadth-first; returns a shortest path.
    #[default]
    Bfs,
    /// Depth-first with a visited set; returns some path, not necessarily the shortest.
    Dfs,
}

/// How far a search may go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Longest path, in moves, the search will consider.
    pub max_depth: usize,
}

impl SearchLimits {
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// The deeper default used for depth-first search.
    #[must_use]
    pub const fn dfs_default() -> Self {
        Self { max_depth: 50 }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self { max_depth: 15 }
    }
}

/// Result of one solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A move sequence ending in a state where every victory rule holds.
    Solved(Vec<Direction>),
    /// The depth cutoff pruned part of the state space; a longer solution may exist.
    BoundExceeded { max_depth: usize },
    /// Every reachable state was explored and none wins.
    Unsolvable,
}

impl SearchOutcome {
    #[must_use]
    pub fn path(&self) -> Option<&[Direction]> {
        match self {
            Self::Solved(path) => Some(path),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_path(self) -> Option<Vec<Direction>> {
        match self {
            Self::Solved(path) => Some(path),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved(path) => {
                let names: Vec<String> = path.iter().map(ToString::to_string).collect();
                write!(f, "solved in {} moves: {}", path.len(), names.join(" "))
            }
            Self::BoundExceeded { max_depth } => {
                write!(f, "no solution within {max_depth} moves")
            }
            Self::Unsolvable => f.write_str("unsolvable"),
        }
    }
}

/// Configurable entry point for solving a level.
///
/// # Example
///
/// ```
/// use glyphgate::{Direction, Level, Position, Solver, Strategy};
///
/// let level = Level::from_dsl([["⬜", "⬜"]], Position::new(0, 0), ["➡️➤🏁"]).unwrap();
/// let outcome = Solver::new(&level).strategy(Strategy::Bfs).max_depth(10).solve();
/// assert_eq!(outcome.path(), Some(&[Direction::Right][..]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    level: &'a Level,
    strategy: Strategy,
    limits: Option<SearchLimits>,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub fn new(level: &'a Level) -> Self {
        Self {
            level,
            strategy: Strategy::default(),
            limits: None,
        }
    }

    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.limits = Some(SearchLimits::new(max_depth));
        self
    }

    /// Run the search. Without an explicit depth, BFS uses
    /// [`SearchLimits::default`] and DFS [`SearchLimits::dfs_default`].
    #[must_use]
    pub fn solve(&self) -> SearchOutcome {
        match self.strategy {
            Strategy::Bfs => bfs(self.level, self.limits.unwrap_or_default()),
            Strategy::Dfs => dfs(
                self.level,
                self.limits.unwrap_or_else(SearchLimits::dfs_default),
            ),
        }
    }
}

/// Successor states of `state`, paired with the move that produced them.
fn successors<'l>(
    level: &'l Level,
    state: &'l PlayerState,
) -> impl Iterator<Item = (Direction, PlayerState)> + 'l {
    level
        .allowed_moves(state)
        .into_iter()
        .filter_map(move |d| level.step(state, d).map(|next| (d, next)))
}

/// Whether a state sitting on the depth cutoff still leads somewhere new: an
/// unvisited successor, or a move that would win.
fn cut_off(level: &Level, state: &PlayerState, visited: &HashSet<SearchState>) -> bool {
    successors(level, state).any(|(d, next)| !visited.contains(&next.key()) || level.is_won(&next, d))
}

fn finish(outcome: SearchOutcome, strategy: Strategy, expanded: usize) -> SearchOutcome {
    tracing::debug!(?strategy, expanded, %outcome, "search finished");
    outcome
}

/// Breadth-first search from the level's start.
///
/// Victory is checked on every generated move, including moves into states
/// already seen, because the victory rules may look at the last direction
/// which the dedup key does not record. Nodes are expanded in order of path
/// length, so the first win found is a shortest one.
#[must_use]
pub fn bfs(level: &Level, limits: SearchLimits) -> SearchOutcome {
    tracing::debug!(max_depth = limits.max_depth, rules = %level.rules(), "bfs start");
    let start = level.initial_state();
    let mut visited = HashSet::from([start.key()]);
    let mut queue = VecDeque::from([(start, Vec::new())]);
    let mut truncated = false;
    let mut expanded = 0_usize;

    while let Some((state, path)) = queue.pop_front() {
        if path.len() >= limits.max_depth {
            truncated = truncated || cut_off(level, &state, &visited);
            continue;
        }
        expanded += 1;
        for (direction, next) in successors(level, &state) {
            let mut next_path: Vec<Direction> = path.clone();
            next_path.push(direction);
            if level.is_won(&next, direction) {
                return finish(SearchOutcome::Solved(next_path), Strategy::Bfs, expanded);
            }
            if visited.insert(next.key()) {
                queue.push_back((next, next_path));
            }
        }
    }

    let outcome = if truncated {
        SearchOutcome::BoundExceeded {
            max_depth: limits.max_depth,
        }
    } else {
        SearchOutcome::Unsolvable
    };
    finish(outcome, Strategy::Bfs, expanded)
}

struct DepthFirst<'a> {
    level: &'a Level,
    max_depth: usize,
    visited: HashSet<SearchState>,
    truncated: bool,
    expanded: usize,
}

/// An expanded state on the DFS stack: the successors not yet tried, last
/// one first.
struct Frame {
    pending: Vec<(Direction, PlayerState)>,
}

impl DepthFirst<'_> {
    /// Expand `state`, reached after `depth` moves. `None` when it sits on the
    /// cutoff or was expanded before.
    fn enter(&mut self, state: &PlayerState, depth: usize) -> Option<Frame> {
        let level = self.level;
        if depth >= self.max_depth {
            self.truncated = self.truncated || cut_off(level, state, &self.visited);
            return None;
        }
        if !self.visited.insert(state.key()) {
            return None;
        }
        self.expanded += 1;
        let mut pending: Vec<_> = successors(level, state).collect();
        pending.reverse();
        Some(Frame { pending })
    }

    /// Walk the graph with an explicit stack; `path` always holds the moves
    /// leading to the top frame.
    fn run(&mut self, start: &PlayerState) -> Option<Vec<Direction>> {
        let level = self.level;
        let mut path = Vec::new();
        let mut stack: Vec<Frame> = self.enter(start, 0).into_iter().collect();

        while let Some(frame) = stack.last_mut() {
            let Some((direction, next)) = frame.pending.pop() else {
                stack.pop();
                path.pop();
                continue;
            };
            path.push(direction);
            if level.is_won(&next, direction) {
                return Some(path);
            }
            match self.enter(&next, path.len()) {
                Some(child) => stack.push(child),
                None => {
                    path.pop();
                }
            }
        }
        None
    }
}

/// Depth-first search from the level's start.
///
/// A state is expanded at most once, at whatever depth it is first met, so a
/// solution that only fits the bound through a shallower route to an already
/// expanded state can be missed; such a run still reports `BoundExceeded`
/// rather than `Unsolvable`.
#[must_use]
pub fn dfs(level: &Level, limits: SearchLimits) -> SearchOutcome {
    tracing::debug!(max_depth = limits.max_depth, rules = %level.rules(), "dfs start");
    let mut search = DepthFirst {
        level,
        max_depth: limits.max_depth,
        visited: HashSet::new(),
        truncated: false,
        expanded: 0,
    };
    let outcome = match search.run(&level.initial_state()) {
        Some(path) => SearchOutcome::Solved(path),
        None if search.truncated => SearchOutcome::BoundExceeded {
            max_depth: limits.max_depth,
        },
        None => SearchOutcome::Unsolvable,
    };
    finish(outcome, Strategy::Dfs, search.expanded)
}
