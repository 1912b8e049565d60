mod grammar;
mod lexer;

pub use lexer::tokenize;

use crate::{Rule, Token};

/// Parse a DSL rule string.
///
/// Parsing is permissive: there is no error case. Reading stops at the first
/// token that does not fit the grammar and the rule built so far is returned,
/// so garbage input degrades to an under-specified rule.
#[must_use]
pub fn parse(source: &str) -> Rule {
    let rule = parse_tokens(&tokenize(source));
    tracing::trace!(source, ?rule, "parsed rule");
    rule
}

/// Parse an already tokenized rule.
#[must_use]
pub fn parse_tokens(tokens: &[Token]) -> Rule {
    use winnow::Parser;
    let mut input = tokens;
    // the grammar only ever backtracks on an exhausted stream, which `opt` absorbs
    grammar::rule.parse_next(&mut input).unwrap_or_default()
}
