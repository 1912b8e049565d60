use std::fmt;

use super::probe::Probe;
use super::rule::{CompiledRule, Rule};

/// Builder for constructing a [`RuleSet`].
///
/// Rules are registered either as DSL strings or as ready-made [`Rule`] values;
/// registration order is preserved inside each of the three partitions.
///
/// # Example
///
/// ```
/// use glyphgate::RuleSetBuilder;
///
/// let rules = RuleSetBuilder::new()
///     .dsl("🟦➤➡️")
///     .dsl("🏁➡️")
///     .compile();
/// assert_eq!(rules.movement().len(), 1);
/// assert_eq!(rules.victory().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<(Rule, Option<String>)>,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a DSL rule string and register it. Never fails: malformed input
    /// yields whatever prefix of the rule could be read.
    #[must_use]
    pub fn dsl(mut self, source: &str) -> Self {
        let rule = crate::parse::parse(source);
        self.rules.push((rule, Some(source.to_owned())));
        self
    }

    /// Register an already built rule.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push((rule, None));
        self
    }

    /// Partition the registered rules into movement, action and victory sets.
    #[must_use]
    pub fn compile(self) -> RuleSet {
        crate::compile::compile(self.rules)
    }
}

/// The compiled rules of one level, split into three disjoint ordered lists.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub(crate) movement: Vec<CompiledRule>,
    pub(crate) action: Vec<CompiledRule>,
    pub(crate) victory: Vec<CompiledRule>,
}

impl RuleSet {
    /// Parse and compile a list of DSL rule strings.
    #[must_use]
    pub fn from_dsl<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        sources
            .into_iter()
            .fold(RuleSetBuilder::new(), |b, s| b.dsl(s.as_ref()))
            .compile()
    }

    /// Rules without a player effect; they gate move legality.
    #[must_use]
    pub fn movement(&self) -> &[CompiledRule] {
        &self.movement
    }

    /// Rules with a player effect, applied after each move.
    #[must_use]
    pub fn action(&self) -> &[CompiledRule] {
        &self.action
    }

    /// Rules that must all hold for the level to be won.
    #[must_use]
    pub fn victory(&self) -> &[CompiledRule] {
        &self.victory
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.movement.len() + self.action.len() + self.victory.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when every movement rule lets the probed move through.
    #[must_use]
    pub fn permits(&self, probe: &Probe<'_>) -> bool {
        self.movement.iter().all(|r| r.verdict(probe))
    }

    /// True when every victory rule holds. An empty victory set is always won.
    #[must_use]
    pub fn is_won(&self, probe: &Probe<'_>) -> bool {
        self.victory.iter().all(|r| r.verdict(probe))
    }

    /// All compiled rules in registration order.
    #[must_use]
    pub fn registered(&self) -> Vec<&CompiledRule> {
        let mut all: Vec<&CompiledRule> = self
            .movement
            .iter()
            .chain(&self.action)
            .chain(&self.victory)
            .collect();
        all.sort_by_key(|r| r.index);
        all
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RuleSet({} movement, {} action, {} victory)",
            self.movement.len(),
            self.action.len(),
            self.victory.len(),
        )
    }
}
