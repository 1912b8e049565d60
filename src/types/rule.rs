use std::fmt;

use super::condition::{Condition, Effect};

/// A parsed rule: optional IF-side condition, optional THEN-side effect and two flags.
///
/// Rules come out of [`parse`](crate::parse::parse) or are assembled directly with
/// [`Rule::when`] and friends. They are immutable once handed to a
/// [`RuleSetBuilder`](super::RuleSetBuilder).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    /// Inverts the condition of the whole rule.
    pub negation: bool,
    pub win: bool,
    pub condition: Option<Condition>,
    pub effect: Option<Effect>,
}

impl Rule {
    /// Start a rule from its condition.
    #[must_use]
    pub fn when(condition: Condition) -> Self {
        Self {
            condition: Some(condition),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn then(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    #[must_use]
    pub fn negated(mut self) -> Self {
        self.negation = true;
        self
    }

    #[must_use]
    pub fn victory(mut self) -> Self {
        self.win = true;
        self
    }

    /// Which rule set this rule lands in. Total over all rules.
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        if self.win {
            RuleKind::Victory
        } else if matches!(self.effect, Some(Effect::Player(_))) {
            RuleKind::Action
        } else {
            RuleKind::Movement
        }
    }
}

/// The three disjoint behavior sets a rule can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Gates move legality.
    Movement,
    /// Mutates player state after a move.
    Action,
    /// Checked after every move for level completion.
    Victory,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Movement => "movement",
            Self::Action => "action",
            Self::Victory => "victory",
        };
        f.write_str(name)
    }
}

/// A rule bound into a [`RuleSet`](super::RuleSet).
///
/// `index` is the rule's registration position across the whole level, so
/// diagnostics can point back at the source string.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub(crate) rule: Rule,
    pub(crate) source: Option<String>,
    pub(crate) index: usize,
}

impl CompiledRule {
    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    #[must_use]
    pub fn kind(&self) -> RuleKind {
        self.rule.kind()
    }

    /// The DSL string this rule was parsed from, if it came from one.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}
