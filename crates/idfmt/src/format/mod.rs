mod edit;
mod parse;
mod serialize;
#[cfg(test)]
mod tests;
mod validate;

use crate::{Token, TokenKind};

/// The format used when an inventory has none configured.
pub const DEFAULT_FORMAT: &str = "ITEM-{SEQ}";

/// An ordered sequence of [`Token`]s.
///
/// Token order is rendering order. A `Format` is never persisted as such: the
/// canonical string produced by its [`Display`](core::fmt::Display)
/// implementation is, and the tokens are re-derived from it with
/// [`Format::parse`] on every use.
///
/// A `Format` built by hand (or edited) is unchecked until
/// [`Format::validate`] accepts it; [`Format::compile`] parses and validates
/// in one step.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Format {
    tokens: Vec<Token>,
}

impl Format {
    /// An empty format.
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// The tokens of [`DEFAULT_FORMAT`]: `Text("ITEM-")` then a default-width
    /// sequence.
    pub fn standard() -> Self {
        Self::from(vec![Token::text("ITEM-"), Token::sequence()])
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens of `kind`.
    pub fn count(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.kind() == kind).count()
    }

    /// Returns true if rendering this format consumes a sequence value.
    pub fn has_sequence(&self) -> bool {
        self.tokens
            .iter()
            .any(|t| matches!(t, Token::Sequence { .. }))
    }

    /// Returns an equivalent format with adjacent text merged and empty text
    /// dropped.
    ///
    /// Both render and serialize identically to `self`, and this is exactly
    /// the shape [`Format::parse`] produces from the serialized string.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut tokens: Vec<Token> = Vec::with_capacity(self.tokens.len());
        for token in &self.tokens {
            if let Token::Text { literal } = token {
                if literal.is_empty() {
                    continue;
                }
                if let Some(Token::Text { literal: prev }) = tokens.last_mut() {
                    prev.push_str(literal);
                    continue;
                }
            }
            tokens.push(token.clone());
        }
        Self { tokens }
    }
}

impl From<Vec<Token>> for Format {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl FromIterator<Token> for Format {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Format {
    type Item = &'a Token;
    type IntoIter = core::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for Format {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
