use crate::{CompiledRule, Rule, RuleKind, RuleSet};

/// Bind each rule and sort it into exactly one of the three partitions.
/// Relative order inside a partition follows registration order.
pub(crate) fn compile(rules: Vec<(Rule, Option<String>)>) -> RuleSet {
    let mut set = RuleSet::default();
    for (index, (rule, source)) in rules.into_iter().enumerate() {
        let kind = rule.kind();
        let compiled = CompiledRule {
            rule,
            source,
            index,
        };
        match kind {
            RuleKind::Movement => set.movement.push(compiled),
            RuleKind::Action => set.action.push(compiled),
            RuleKind::Victory => set.victory.push(compiled),
        }
    }
    tracing::debug!(
        movement = set.movement.len(),
        action = set.action.len(),
        victory = set.victory.len(),
        "compiled rule set"
    );
    set
}

#[cfg(test)]
mod tests {
    use crate::{Condition, Direction, Effect, PlayerClause, Rule, RuleSet, RuleSetBuilder};

    #[test]
    fn partition_is_total_and_disjoint() {
        let sources = [
            "🟥➤⬆️",
            "🤖🗝️➤🤖🟦",
            "🏁🟩",
            "🚫⬇️",
            "🏁🤖🟦➤🤖💣",
            "",
            "x",
        ];
        let rules = RuleSet::from_dsl(sources);
        assert_eq!(rules.len(), sources.len());

        let mut seen: Vec<usize> = rules.registered().iter().map(|r| r.index()).collect();
        seen.dedup();
        assert_eq!(seen.len(), sources.len());

        assert_eq!(rules.movement().len(), 4);
        assert_eq!(rules.action().len(), 1);
        assert_eq!(rules.victory().len(), 2);
    }

    #[test]
    fn win_flag_outranks_player_effect() {
        let rules = RuleSetBuilder::new()
            .rule(
                Rule::when(Condition::direction([Direction::Up]))
                    .then(Effect::player(PlayerClause::new()))
                    .victory(),
            )
            .compile();
        assert!(rules.action().is_empty());
        assert_eq!(rules.victory().len(), 1);
    }

    #[test]
    fn partition_preserves_order() {
        let rules = RuleSet::from_dsl(["🟥➤⬆️", "🏁🟩", "🟦➤⬇️"]);
        let sources: Vec<_> = rules.movement().iter().map(|r| r.source()).collect();
        assert_eq!(sources, vec![Some("🟥➤⬆️"), Some("🟦➤⬇️")]);
    }
}
