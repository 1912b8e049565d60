use unicode_segmentation::UnicodeSegmentation;

use crate::Token;

/// Split a rule string into tokens at extended grapheme cluster boundaries.
///
/// Multi-codepoint glyphs such as `"⬆️"` (arrow + variation selector) come out
/// as one token, so rule authors can write symbols back to back. Nothing is
/// validated here; unknown clusters become [`Token::Unknown`].
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    source.graphemes(true).map(Token::classify).collect()
}
