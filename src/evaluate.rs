use crate::{CompiledRule, Condition, Direction, Effect, Level, PlayerState, Probe, Rule};

/// Whether the IF side holds. A rule without a condition holds vacuously.
fn condition_holds(condition: Option<&Condition>, probe: &Probe<'_>) -> bool {
    match condition {
        None => true,
        Some(Condition::Tile { colors }) => probe.tile.is_some_and(|t| colors.contains(&t)),
        Some(Condition::Direction { directions }) => directions.contains(&probe.direction),
        Some(Condition::Player(clause)) => {
            clause
                .colors
                .as_ref()
                .is_none_or(|c| c.contains(&probe.color))
                && clause
                    .directions
                    .as_ref()
                    .is_none_or(|d| d.contains(&probe.direction))
                && clause
                    .items
                    .as_ref()
                    .is_none_or(|i| probe.inventory.holds_any(i))
        }
    }
}

/// The condition after applying the rule's negation flag.
pub(crate) fn holds(rule: &Rule, probe: &Probe<'_>) -> bool {
    condition_holds(rule.condition.as_ref(), probe) != rule.negation
}

/// Boolean verdict of a rule. Never mutates anything.
///
/// - no effect: the verdict is the (negated) condition itself;
/// - direction effect: false only when the condition fails and the probed
///   direction is one the effect forbids;
/// - player effect: always true, the rule only acts through [`apply`].
pub(crate) fn verdict(rule: &Rule, probe: &Probe<'_>) -> bool {
    let holds = holds(rule, probe);
    match &rule.effect {
        None => holds,
        Some(Effect::Direction { directions }) => holds || !directions.contains(&probe.direction),
        Some(Effect::Player(_)) => true,
    }
}

/// Run a rule's player effect against `state`, returning the successor state.
///
/// The condition is probed on the tile under the player. When it holds, items
/// are granted first, then each listed direction is attempted as an extra move
/// (gated by the movement rules only), then the player is repainted.
pub(crate) fn apply(
    rule: &Rule,
    level: &Level,
    state: PlayerState,
    direction: Direction,
) -> PlayerState {
    let Some(Effect::Player(clause)) = &rule.effect else {
        return state;
    };
    let tile = level.tile(state.position);
    if !holds(rule, &Probe::new(&state, tile, direction)) {
        return state;
    }

    let mut next = state;
    for &item in clause.items.iter().flatten() {
        next.inventory.add(item);
    }
    for &cascade in clause.directions.iter().flatten() {
        if let Some(moved) = crate::moves::try_move(level, &next, cascade) {
            next = moved;
        }
    }
    if let Some(color) = clause.paint() {
        next.color = color;
    }
    next
}

impl CompiledRule {
    /// The rule's condition with negation applied.
    #[must_use]
    pub fn holds(&self, probe: &Probe<'_>) -> bool {
        holds(&self.rule, probe)
    }

    /// Pure verdict of this rule for one probe; see the rule-kind docs on
    /// [`RuleSet`](crate::RuleSet) for how each partition uses it.
    #[must_use]
    pub fn verdict(&self, probe: &Probe<'_>) -> bool {
        verdict(&self.rule, probe)
    }

    /// Apply this rule's player effect, if any, producing a new state.
    #[must_use]
    pub fn apply(&self, level: &Level, state: PlayerState, direction: Direction) -> PlayerState {
        apply(&self.rule, level, state, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Inventory, Item, PlayerClause, Position};

    fn probe_with<'a>(
        inventory: &'a Inventory,
        tile: Option<Color>,
        direction: Direction,
        color: Color,
    ) -> Probe<'a> {
        Probe {
            tile,
            direction,
            color,
            inventory,
        }
    }

    #[test]
    fn tile_condition() {
        let inv = Inventory::new();
        let rule = Rule::when(Condition::tile([Color::Red, Color::Blue]));
        assert!(verdict(&rule, &probe_with(&inv, Some(Color::Blue), Direction::Up, Color::White)));
        assert!(!verdict(&rule, &probe_with(&inv, Some(Color::Green), Direction::Up, Color::White)));
        assert!(!verdict(&rule, &probe_with(&inv, None, Direction::Up, Color::White)));
    }

    #[test]
    fn direction_condition() {
        let inv = Inventory::new();
        let rule = Rule::when(Condition::direction([Direction::Left]));
        assert!(verdict(&rule, &probe_with(&inv, None, Direction::Left, Color::White)));
        assert!(!verdict(&rule, &probe_with(&inv, None, Direction::Right, Color::White)));
    }

    #[test]
    fn player_condition_conjoins_present_fields() {
        let with_key: Inventory = [Item::Key].into_iter().collect();
        let empty = Inventory::new();
        let rule = Rule::when(Condition::player(
            PlayerClause::new()
                .colors([Color::Red])
                .items([Item::Key, Item::Bomb]),
        ));
        let tile = Some(Color::White);
        assert!(verdict(&rule, &probe_with(&with_key, tile, Direction::Up, Color::Red)));
        assert!(!verdict(&rule, &probe_with(&with_key, tile, Direction::Up, Color::Blue)));
        assert!(!verdict(&rule, &probe_with(&empty, tile, Direction::Up, Color::Red)));
    }

    #[test]
    fn empty_player_clause_holds() {
        let inv = Inventory::new();
        let rule = Rule::when(Condition::player(PlayerClause::new()));
        assert!(verdict(&rule, &probe_with(&inv, None, Direction::Down, Color::Black)));
    }

    #[test]
    fn negation_flips_plain_verdict() {
        let inv = Inventory::new();
        let rule = Rule::when(Condition::tile([Color::Red])).negated();
        assert!(!verdict(&rule, &probe_with(&inv, Some(Color::Red), Direction::Up, Color::White)));
        assert!(verdict(&rule, &probe_with(&inv, Some(Color::Blue), Direction::Up, Color::White)));
    }

    #[test]
    fn direction_effect_forbids_unless_condition() {
        let inv = Inventory::new();
        // forbid RIGHT unless standing on blue
        let rule = Rule::when(Condition::tile([Color::Blue])).then(Effect::block([Direction::Right]));
        let on = |tile, dir| verdict(&rule, &probe_with(&inv, Some(tile), dir, Color::White));
        assert!(on(Color::Blue, Direction::Right));
        assert!(!on(Color::Red, Direction::Right));
        assert!(on(Color::Red, Direction::Left));
    }

    #[test]
    fn player_effect_verdict_is_always_true() {
        let inv = Inventory::new();
        let rule = Rule::when(Condition::tile([Color::Red]))
            .then(Effect::player(PlayerClause::new().colors([Color::Blue])));
        assert!(verdict(&rule, &probe_with(&inv, Some(Color::Green), Direction::Up, Color::White)));
        assert!(verdict(&rule, &probe_with(&inv, Some(Color::Red), Direction::Up, Color::White)));
    }

    #[test]
    fn missing_condition_is_vacuous() {
        let inv = Inventory::new();
        let probe = probe_with(&inv, None, Direction::Up, Color::White);
        assert!(verdict(&Rule::default(), &probe));
        assert!(!verdict(&Rule::default().negated(), &probe));
    }

    #[test]
    fn apply_grants_paints_and_cascades() {
        let level = Level::from_dsl(
            [["🟥", "⬜", "⬜"]],
            Position::new(0, 0),
            ["🟥➤🤖🗝️🟦➡️"],
        )
        .unwrap();
        let rule = &level.rules().action()[0];
        let next = rule.apply(&level, level.initial_state(), Direction::Left);
        assert_eq!(next.position, Position::new(1, 0));
        assert_eq!(next.color, Color::Blue);
        assert!(next.inventory.contains(Item::Key));
    }

    #[test]
    fn apply_skips_when_condition_fails() {
        let level = Level::from_dsl([["⬜", "⬜"]], Position::new(0, 0), ["🟥➤🤖🗝️"]).unwrap();
        let rule = &level.rules().action()[0];
        let before = level.initial_state();
        let after = rule.apply(&level, before.clone(), Direction::Right);
        assert_eq!(before, after);
    }

    #[test]
    fn cascade_respects_movement_rules_and_bounds() {
        let level = Level::from_dsl(
            [["🟥", "⬜"]],
            Position::new(0, 0),
            ["🟥➤🤖➡️➡️", "🚫🟥➤⬇️"],
        )
        .unwrap();
        let rule = &level.rules().action()[0];
        let next = rule.apply(&level, level.initial_state(), Direction::Up);
        // first cascade lands on the white tile, second would leave the grid
        assert_eq!(next.position, Position::new(1, 0));
    }
}
