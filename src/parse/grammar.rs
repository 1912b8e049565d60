use winnow::combinator::opt;
use winnow::prelude::*;
use winnow::token::any;

use crate::{Color, Condition, Direction, Effect, Item, PlayerClause, Rule, Token};

// -- Accumulators -----------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Side {
    #[default]
    If,
    Then,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClauseKind {
    Tile,
    Direction,
    Player,
}

/// Symbols collected for one side of a rule. Every symbol lands in the same
/// per-field lists; the most recent classification decides what the side means.
#[derive(Debug, Default)]
struct Clause {
    kind: Option<ClauseKind>,
    colors: Vec<Color>,
    directions: Vec<Direction>,
    items: Vec<Item>,
}

impl Clause {
    fn color(&mut self, kind: ClauseKind, color: Color) {
        self.kind = Some(kind);
        self.colors.push(color);
    }

    fn direction(&mut self, kind: ClauseKind, direction: Direction) {
        self.kind = Some(kind);
        self.directions.push(direction);
    }

    fn item(&mut self, item: Item) {
        self.kind = Some(ClauseKind::Player);
        self.items.push(item);
    }

    fn player(self) -> PlayerClause {
        fn present<T>(v: Vec<T>) -> Option<Vec<T>> {
            (!v.is_empty()).then_some(v)
        }
        PlayerClause {
            colors: present(self.colors),
            directions: present(self.directions),
            items: present(self.items),
        }
    }

    fn into_condition(self) -> Option<Condition> {
        match self.kind? {
            ClauseKind::Tile => Some(Condition::Tile {
                colors: self.colors,
            }),
            ClauseKind::Direction => Some(Condition::Direction {
                directions: self.directions,
            }),
            ClauseKind::Player => Some(Condition::Player(self.player())),
        }
    }

    fn into_effect(self) -> Option<Effect> {
        match self.kind? {
            // bare colors are refused on the THEN side before they get here
            ClauseKind::Tile => None,
            ClauseKind::Direction => Some(Effect::Direction {
                directions: self.directions,
            }),
            ClauseKind::Player => Some(Effect::Player(self.player())),
        }
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    negation: bool,
    win: bool,
    side: Side,
    when: Clause,
    then: Clause,
}

impl Accumulator {
    fn clause(&mut self) -> &mut Clause {
        match self.side {
            Side::If => &mut self.when,
            Side::Then => &mut self.then,
        }
    }

    fn finish(self) -> Rule {
        Rule {
            negation: self.negation,
            win: self.win,
            condition: self.when.into_condition(),
            effect: self.then.into_effect(),
        }
    }
}

// -- Grammar ----------------------------------------------------------------

fn next_token(input: &mut &[Token]) -> ModalResult<Option<Token>> {
    opt(any).parse_next(input)
}

/// Operands after a player marker. The marker stays in force until a token that
/// is not a color, direction or item; a THEN marker switches sides and lets the
/// rule continue, anything else ends it.
fn player_operands(input: &mut &[Token], acc: &mut Accumulator) -> ModalResult<bool> {
    loop {
        match next_token(input)? {
            Some(Token::Color(c)) => acc.clause().color(ClauseKind::Player, c),
            Some(Token::Direction(d)) => acc.clause().direction(ClauseKind::Player, d),
            Some(Token::Item(i)) => acc.clause().item(i),
            Some(Token::Then) => {
                acc.side = Side::Then;
                return Ok(true);
            }
            _ => return Ok(false),
        }
    }
}

/// One rule, read left to right. Stops quietly at the first token that does not
/// fit and returns what was read so far.
pub(crate) fn rule(input: &mut &[Token]) -> ModalResult<Rule> {
    let mut acc = Accumulator::default();
    while let Some(token) = next_token(input)? {
        let proceed = match token {
            Token::Negation => {
                acc.negation = true;
                true
            }
            Token::Victory => {
                acc.win = true;
                true
            }
            Token::Then => {
                acc.side = Side::Then;
                true
            }
            Token::Player => player_operands(input, &mut acc)?,
            Token::Direction(d) => {
                acc.clause().direction(ClauseKind::Direction, d);
                true
            }
            Token::Color(c) if acc.side == Side::If => {
                acc.clause().color(ClauseKind::Tile, c);
                true
            }
            _ => false,
        };
        if !proceed {
            break;
        }
    }
    Ok(acc.finish())
}
